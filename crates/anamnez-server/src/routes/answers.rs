use axum::extract::State;
use axum::Json;
use serde::{Deserialize, Serialize};

use anamnez_core::error::CoreError;
use anamnez_core::models::answer::{Answer, ConversationEntry};
use anamnez_questionnaire::sequencer::AnswerLookup;

use crate::error::{ApiError, ALREADY_ANSWERED};
use crate::session::Session;
use crate::state::AppState;

#[derive(Deserialize)]
pub struct SubmitAnswerRequest {
    #[serde(default)]
    pub question: String,
    #[serde(default)]
    pub answer: String,
}

#[derive(Serialize)]
pub struct SubmitAnswerResponse {
    pub status: &'static str,
}

/// Store the answer to one question.
///
/// Rejected without touching the session when the question is blank or
/// unknown, the answer does not fit the question, or the question already
/// has an answer.
pub async fn submit_answer(
    State(state): State<AppState>,
    Session(session): Session,
    Json(req): Json<SubmitAnswerRequest>,
) -> Result<Json<SubmitAnswerResponse>, ApiError> {
    let question = req.question.trim();
    if question.is_empty() {
        return Err(CoreError::MissingField("question".to_string()).into());
    }

    // A repeat is a conflict whatever it contains. The store's insert still
    // catches concurrent repeats.
    let existing = state.store.answers(&session).await?;
    if existing.answer_for(question).is_some() {
        return Err(ApiError::Conflict(ALREADY_ANSWERED.to_string()));
    }

    let answer = req.answer.trim();
    let definition = state.questionnaire.validate_answer(question, answer)?;

    state
        .store
        .insert(Answer::new(session, definition.text.clone(), answer))
        .await?;
    tracing::debug!(kind = ?definition.kind, "answer stored");

    Ok(Json(SubmitAnswerResponse { status: "success" }))
}

/// The session's question/answer pairs in submission order.
pub async fn conversation(
    State(state): State<AppState>,
    Session(session): Session,
) -> Result<Json<Vec<ConversationEntry>>, ApiError> {
    let answers = state.store.answers(&session).await?;
    Ok(Json(answers.iter().map(ConversationEntry::from).collect()))
}
