use serde::{Deserialize, Serialize};
use ts_rs::TS;

/// How a question collects its answer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum QuestionKind {
    /// Free text.
    Text,
    /// Exactly one of the options.
    Radio,
    /// One or more of the options, submitted joined with `", "`.
    Checkbox,
}

impl QuestionKind {
    pub fn has_options(self) -> bool {
        matches!(self, QuestionKind::Radio | QuestionKind::Checkbox)
    }
}

/// Gate on an earlier answer: the answer to `question` must be one of
/// `accepted`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Condition {
    pub question: String,
    pub accepted: Vec<String>,
}

/// Inclusive numeric bounds for text questions that ask for a number.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct AnswerRange {
    pub min: f64,
    pub max: f64,
}

impl AnswerRange {
    pub fn contains(&self, value: f64) -> bool {
        value >= self.min && value <= self.max
    }
}

/// One entry of the questionnaire.
///
/// `text` is the question's unique key; answers reference it verbatim.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct QuestionDefinition {
    pub text: String,
    pub kind: QuestionKind,
    #[serde(default)]
    pub options: Vec<String>,
    /// All must hold for the question to be asked.
    #[serde(default)]
    pub conditions: Vec<Condition>,
    #[serde(default)]
    pub range: Option<AnswerRange>,
}

impl QuestionDefinition {
    pub fn text(text: impl Into<String>) -> Self {
        Self::new(text, QuestionKind::Text, &[])
    }

    pub fn radio(text: impl Into<String>, options: &[&str]) -> Self {
        Self::new(text, QuestionKind::Radio, options)
    }

    pub fn checkbox(text: impl Into<String>, options: &[&str]) -> Self {
        Self::new(text, QuestionKind::Checkbox, options)
    }

    fn new(text: impl Into<String>, kind: QuestionKind, options: &[&str]) -> Self {
        Self {
            text: text.into(),
            kind,
            options: options.iter().map(|o| o.to_string()).collect(),
            conditions: Vec::new(),
            range: None,
        }
    }

    /// Only ask this question when `question` was answered with one of `accepted`.
    pub fn when(mut self, question: impl Into<String>, accepted: &[&str]) -> Self {
        self.conditions.push(Condition {
            question: question.into(),
            accepted: accepted.iter().map(|a| a.to_string()).collect(),
        });
        self
    }

    pub fn range(mut self, min: f64, max: f64) -> Self {
        self.range = Some(AnswerRange { min, max });
        self
    }

    pub fn is_conditional(&self) -> bool {
        !self.conditions.is_empty()
    }
}
