//! anamnez-core
//!
//! Pure domain types and storage key conventions.
//! No I/O and no AWS SDK dependency: this is the shared vocabulary of the
//! intake service.

pub mod error;
pub mod models;
pub mod s3_keys;
