use std::collections::HashMap;

use tokio::sync::RwLock;

use anamnez_core::models::answer::Answer;
use anamnez_core::models::session::SessionId;

use crate::error::StorageError;
use crate::store::{AnswerStore, BoxFuture};

/// Answers held in process memory. Lost on restart.
#[derive(Default)]
pub struct MemoryAnswerStore {
    sessions: RwLock<HashMap<SessionId, Vec<Answer>>>,
}

impl MemoryAnswerStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl AnswerStore for MemoryAnswerStore {
    fn answers<'a>(
        &'a self,
        session: &'a SessionId,
    ) -> BoxFuture<'a, Result<Vec<Answer>, StorageError>> {
        Box::pin(async move {
            let sessions = self.sessions.read().await;
            Ok(sessions.get(session).cloned().unwrap_or_default())
        })
    }

    fn insert(&self, answer: Answer) -> BoxFuture<'_, Result<(), StorageError>> {
        Box::pin(async move {
            let mut sessions = self.sessions.write().await;
            let answers = sessions.entry(answer.session_id.clone()).or_default();
            if answers.iter().any(|a| a.question == answer.question) {
                return Err(StorageError::AlreadyAnswered {
                    question: answer.question,
                });
            }
            answers.push(answer);
            Ok(())
        })
    }

    fn clear<'a>(&'a self, session: &'a SessionId) -> BoxFuture<'a, Result<usize, StorageError>> {
        Box::pin(async move {
            let mut sessions = self.sessions.write().await;
            Ok(sessions.remove(session).map(|a| a.len()).unwrap_or(0))
        })
    }
}
