use aws_sdk_s3::Client;
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use anamnez_core::models::answer::Answer;
use anamnez_core::models::session::SessionId;
use anamnez_core::s3_keys;

use crate::error::StorageError;
use crate::objects;
use crate::state::{load_state, save_state_if_absent, save_state_if_match};
use crate::store::{AnswerStore, BoxFuture};

/// How many times an insert re-reads the session after losing a
/// conditional write before giving up.
const MAX_WRITE_ATTEMPTS: usize = 5;

/// The per-session document at `sessions/{id}/answers.json`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SessionRecord {
    pub session_id: SessionId,
    pub answers: Vec<Answer>,
    pub created_at: jiff::Timestamp,
    pub updated_at: jiff::Timestamp,
}

impl SessionRecord {
    fn new(session_id: SessionId) -> Self {
        let now = jiff::Timestamp::now();
        Self {
            session_id,
            answers: Vec::new(),
            created_at: now,
            updated_at: now,
        }
    }
}

/// Answers stored as one JSON document per session in S3.
///
/// Writes are conditional (`If-None-Match: *` on creation, `If-Match` on
/// update), so concurrent submissions for one session are serialized by S3.
pub struct S3AnswerStore {
    client: Client,
    bucket: String,
}

impl S3AnswerStore {
    pub fn new(client: Client, bucket: impl Into<String>) -> Self {
        Self {
            client,
            bucket: bucket.into(),
        }
    }

    async fn load(&self, key: &str) -> Result<Option<(SessionRecord, String)>, StorageError> {
        match load_state::<SessionRecord>(&self.client, &self.bucket, key).await {
            Ok(loaded) => Ok(Some(loaded)),
            Err(StorageError::NotFound { .. }) => Ok(None),
            Err(e) => Err(e),
        }
    }

    async fn insert_answer(&self, answer: Answer) -> Result<(), StorageError> {
        let key = s3_keys::session_answers(&answer.session_id);

        for attempt in 1..=MAX_WRITE_ATTEMPTS {
            let loaded = self.load(&key).await?;
            let exists = loaded.is_some();
            let (mut record, etag) = loaded
                .unwrap_or_else(|| (SessionRecord::new(answer.session_id.clone()), String::new()));

            if record.answers.iter().any(|a| a.question == answer.question) {
                return Err(StorageError::AlreadyAnswered {
                    question: answer.question,
                });
            }
            record.answers.push(answer.clone());
            record.updated_at = jiff::Timestamp::now();

            let written = if exists {
                save_state_if_match(&self.client, &self.bucket, &key, &record, &etag).await
            } else {
                save_state_if_absent(&self.client, &self.bucket, &key, &record).await
            };

            match written {
                Ok(_) => return Ok(()),
                Err(StorageError::PreconditionFailed { .. }) => {
                    debug!(attempt, "session document changed underneath insert, retrying");
                }
                Err(e) => return Err(e),
            }
        }

        Err(StorageError::Contended {
            key,
            attempts: MAX_WRITE_ATTEMPTS,
        })
    }
}

impl AnswerStore for S3AnswerStore {
    fn answers<'a>(
        &'a self,
        session: &'a SessionId,
    ) -> BoxFuture<'a, Result<Vec<Answer>, StorageError>> {
        Box::pin(async move {
            let key = s3_keys::session_answers(session);
            Ok(self
                .load(&key)
                .await?
                .map(|(record, _)| record.answers)
                .unwrap_or_default())
        })
    }

    fn insert(&self, answer: Answer) -> BoxFuture<'_, Result<(), StorageError>> {
        Box::pin(self.insert_answer(answer))
    }

    fn clear<'a>(&'a self, session: &'a SessionId) -> BoxFuture<'a, Result<usize, StorageError>> {
        Box::pin(async move {
            let key = s3_keys::session_answers(session);
            let cleared = self
                .load(&key)
                .await?
                .map(|(record, _)| record.answers.len())
                .unwrap_or(0);

            let prefix = s3_keys::session_prefix(session);
            let deleted =
                objects::delete_prefix(&self.client, &self.bucket, &prefix).await?;
            info!(objects = deleted, "session objects deleted");
            Ok(cleared)
        })
    }
}
