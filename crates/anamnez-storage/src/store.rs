use std::future::Future;
use std::pin::Pin;

use anamnez_core::models::answer::Answer;
use anamnez_core::models::session::SessionId;

use crate::error::StorageError;

pub type BoxFuture<'a, T> = Pin<Box<dyn Future<Output = T> + Send + 'a>>;

/// Persistence for session answers.
///
/// Implementations must make `insert` atomic per session: the duplicate
/// check and the write happen as one step, so two submissions of the same
/// question can never both succeed.
pub trait AnswerStore: Send + Sync {
    /// Every answer of the session, in submission order. Unknown sessions
    /// have no answers.
    fn answers<'a>(
        &'a self,
        session: &'a SessionId,
    ) -> BoxFuture<'a, Result<Vec<Answer>, StorageError>>;

    /// Store an answer. Fails with [`StorageError::AlreadyAnswered`] and
    /// leaves the session untouched when its question already has one.
    fn insert(&self, answer: Answer) -> BoxFuture<'_, Result<(), StorageError>>;

    /// Remove every answer of the session. Returns how many were removed.
    fn clear<'a>(&'a self, session: &'a SessionId) -> BoxFuture<'a, Result<usize, StorageError>>;
}
