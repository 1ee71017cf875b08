use serde::{Deserialize, Serialize};
use ts_rs::TS;

use super::session::SessionId;

/// A single stored response to one question within one session.
///
/// Keyed by `(session_id, question)`. Created on submit, never mutated,
/// removed only when the session is reset.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Answer {
    pub session_id: SessionId,
    /// Text of the question this answers; question texts are unique keys.
    pub question: String,
    pub answer: String,
    pub answered_at: jiff::Timestamp,
}

impl Answer {
    pub fn new(
        session_id: SessionId,
        question: impl Into<String>,
        answer: impl Into<String>,
    ) -> Self {
        Self {
            session_id,
            question: question.into(),
            answer: answer.into(),
            answered_at: jiff::Timestamp::now(),
        }
    }
}

/// One question/answer pair as shown back to the user.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct ConversationEntry {
    pub question: String,
    pub answer: String,
}

impl From<&Answer> for ConversationEntry {
    fn from(answer: &Answer) -> Self {
        Self {
            question: answer.question.clone(),
            answer: answer.answer.clone(),
        }
    }
}
