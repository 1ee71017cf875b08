use std::path::PathBuf;

use thiserror::Error;

/// A questionnaire definition that cannot be served. Raised at load time.
#[derive(Debug, Error)]
pub enum QuestionnaireError {
    #[error("question #{index} has blank text")]
    BlankText { index: usize },

    #[error("'{question}' is a choice question without options")]
    MissingOptions { question: String },

    #[error("'{question}' is a text question but lists options")]
    UnexpectedOptions { question: String },

    #[error("'{question}' lists option '{option}' more than once")]
    DuplicateOption { question: String, option: String },

    #[error("'{question}' has a condition on unknown question '{references}'")]
    UnknownConditionQuestion { question: String, references: String },

    #[error("'{question}' has a condition on '{references}' that accepts no answers")]
    EmptyCondition { question: String, references: String },

    #[error("'{question}' accepts '{value}' for '{references}', which is not one of its options")]
    UnreachableConditionValue {
        question: String,
        references: String,
        value: String,
    },

    #[error("'{question}' has an invalid range [{min}, {max}]")]
    InvalidRange { question: String, min: f64, max: f64 },

    #[error("'{question}' is a choice question and cannot carry a numeric range")]
    RangeOnChoice { question: String },

    #[error("failed to read questionnaire at {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("questionnaire parse error: {0}")]
    Parse(#[from] serde_json::Error),
}

/// A submitted answer that does not fit its question.
#[derive(Debug, Error, PartialEq)]
pub enum AnswerError {
    #[error("unknown question: {0}")]
    UnknownQuestion(String),

    #[error("'{answer}' is not an option of '{question}'")]
    NotAnOption { question: String, answer: String },

    #[error("no option selected for '{question}'")]
    EmptySelection { question: String },

    #[error("option '{option}' selected more than once for '{question}'")]
    RepeatedOption { question: String, option: String },

    #[error("'{question}' expects a number, got '{answer}'")]
    NotANumber { question: String, answer: String },

    #[error("'{question}' expects a value between {min} and {max}, got {value}")]
    OutOfRange {
        question: String,
        value: f64,
        min: f64,
        max: f64,
    },
}
