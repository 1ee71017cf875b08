use serde::{Deserialize, Serialize};

use super::answer::{Answer, ConversationEntry};
use super::score::ScaleScore;

pub const DEFAULT_TITLE: &str = "Anamnez Sohbet Raporu";

/// `strftime` pattern for the generation date on the cover page.
pub const DATE_FORMAT: &str = "%d.%m.%Y %H:%M";

/// Everything a transcript template can address by name.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Transcript {
    pub title: String,
    pub generated_at: String,
    pub entries: Vec<ConversationEntry>,
    #[serde(default)]
    pub scores: Vec<ScaleScore>,
}

impl Transcript {
    /// Build a transcript from a session's answers, preserving submission order.
    pub fn new(generated_at: &jiff::Zoned, answers: &[Answer], scores: Vec<ScaleScore>) -> Self {
        Self {
            title: DEFAULT_TITLE.to_string(),
            generated_at: generated_at.strftime(DATE_FORMAT).to_string(),
            entries: answers.iter().map(ConversationEntry::from).collect(),
            scores,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
