use axum::extract::State;
use axum::http::HeaderMap;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Serialize;

use anamnez_core::models::session::SessionId;

use crate::error::ApiError;
use crate::session::{read_session, set_session_cookie};
use crate::state::AppState;

#[derive(Serialize)]
pub struct LandingResponse {
    /// A fresh session was issued with this response.
    pub new_session: bool,
    pub answered: usize,
    pub total_questions: usize,
    pub complete: bool,
}

#[derive(Serialize)]
pub struct ResetResponse {
    pub status: &'static str,
    pub cleared: usize,
}

/// Landing endpoint: issues a session cookie on first visit and reports
/// progress for a returning one. A malformed cookie is replaced.
pub async fn landing(
    State(state): State<AppState>,
    headers: HeaderMap,
) -> Result<Response, ApiError> {
    let existing = read_session(&headers).ok().flatten();

    let Some(session) = existing else {
        let session = SessionId::generate();
        tracing::info!("session issued");
        let body = LandingResponse {
            new_session: true,
            answered: 0,
            total_questions: state.questionnaire.len(),
            complete: state.questionnaire.is_empty(),
        };
        return Ok((set_session_cookie(&session, state.cookies), Json(body)).into_response());
    };

    let answers = state.store.answers(&session).await?;
    let body = LandingResponse {
        new_session: false,
        answered: answers.len(),
        total_questions: state.questionnaire.len(),
        complete: state.questionnaire.is_complete(&answers),
    };
    Ok(Json(body).into_response())
}

/// Delete every answer of the current session and bind the client to a new
/// one. Works without a prior session too.
pub async fn reset(
    State(state): State<AppState>,
    headers: HeaderMap,
) -> Result<Response, ApiError> {
    let cleared = match read_session(&headers).ok().flatten() {
        Some(old) => state.store.clear(&old).await?,
        None => 0,
    };
    tracing::info!(cleared, "session reset");

    let session = SessionId::generate();
    let body = ResetResponse {
        status: "success",
        cleared,
    };
    Ok((set_session_cookie(&session, state.cookies), Json(body)).into_response())
}
