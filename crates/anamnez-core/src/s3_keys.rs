//! S3 key/path conventions.
//!
//! Pure string functions with no AWS SDK dependency. These define the canonical
//! layout of objects in the intake bucket.

use crate::models::session::SessionId;

pub const SESSIONS_PREFIX: &str = "sessions/";

/// Every object belonging to one session lives under this prefix.
pub fn session_prefix(id: &SessionId) -> String {
    format!("{SESSIONS_PREFIX}{id}/")
}

pub fn session_answers(id: &SessionId) -> String {
    format!("{}answers.json", session_prefix(id))
}
