//! The session cookie.
//!
//! A session is identified only by the `anamnez_session` cookie. Handlers
//! that work on a session take the [`Session`] extractor, which rejects
//! requests without a well-formed id.

use axum::extract::FromRequestParts;
use axum::http::header::{COOKIE, SET_COOKIE};
use axum::http::request::Parts;
use axum::http::{HeaderMap, HeaderName};
use cookie::{Cookie, SameSite};

use anamnez_core::error::CoreError;
use anamnez_core::models::session::SessionId;

use crate::error::ApiError;
use crate::state::CookieSettings;

pub const SESSION_COOKIE: &str = "anamnez_session";

/// The id carried by the request's session cookie.
pub struct Session(pub SessionId);

impl<S: Send + Sync> FromRequestParts<S> for Session {
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        match read_session(&parts.headers)? {
            Some(id) => Ok(Session(id)),
            None => Err(ApiError::BadRequest("missing session cookie".to_string())),
        }
    }
}

/// Find the session cookie among the request's `Cookie` headers.
///
/// Returns `Ok(None)` when there is no session cookie and an error when
/// there is one but its value is not a valid id.
pub fn read_session(headers: &HeaderMap) -> Result<Option<SessionId>, CoreError> {
    for value in headers.get_all(COOKIE) {
        let Ok(raw) = value.to_str() else {
            continue;
        };
        for cookie in Cookie::split_parse(raw).flatten() {
            if cookie.name() == SESSION_COOKIE {
                return SessionId::parse(cookie.value()).map(Some);
            }
        }
    }
    Ok(None)
}

/// `Set-Cookie` header binding the client to `id`.
pub fn set_session_cookie(id: &SessionId, settings: CookieSettings) -> [(HeaderName, String); 1] {
    let cookie = Cookie::build((SESSION_COOKIE, id.to_string()))
        .path("/")
        .same_site(SameSite::Lax)
        .http_only(settings.secure)
        .secure(settings.secure)
        .build();
    [(SET_COOKIE, cookie.to_string())]
}
