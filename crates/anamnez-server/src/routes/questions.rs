use axum::extract::State;
use axum::Json;
use serde::Serialize;

use anamnez_questionnaire::definition::QuestionDefinition;

use crate::error::ApiError;
use crate::session::Session;
use crate::state::AppState;

#[derive(Serialize)]
pub struct NextQuestionResponse {
    /// `null` once every eligible question has been answered.
    pub question: Option<QuestionDefinition>,
}

pub async fn list_questions(State(state): State<AppState>) -> Json<Vec<QuestionDefinition>> {
    Json(state.questionnaire.questions().to_vec())
}

/// The first unanswered question whose conditions the session's answers
/// satisfy.
pub async fn next_question(
    State(state): State<AppState>,
    Session(session): Session,
) -> Result<Json<NextQuestionResponse>, ApiError> {
    let answers = state.store.answers(&session).await?;
    let question = state.questionnaire.next_question(&answers).cloned();
    Ok(Json(NextQuestionResponse { question }))
}
