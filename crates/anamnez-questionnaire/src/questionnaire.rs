use std::collections::{HashMap, HashSet};
use std::path::Path;

use tracing::warn;

use crate::definition::{QuestionDefinition, QuestionKind};
use crate::error::{AnswerError, QuestionnaireError};

/// Separator the client uses to join checkbox selections.
pub const SELECTION_SEPARATOR: &str = ", ";

/// The validated, ordered question list served to every session.
///
/// Built once at startup and shared read-only afterwards.
#[derive(Debug, Clone)]
pub struct Questionnaire {
    questions: Vec<QuestionDefinition>,
    index: HashMap<String, usize>,
}

impl Questionnaire {
    /// Validate a raw definition list.
    ///
    /// Duplicate question texts keep their first definition; so do duplicate
    /// condition keys within one question. Everything else that would make a
    /// question unaskable or unanswerable is rejected.
    pub fn load(definitions: Vec<QuestionDefinition>) -> Result<Self, QuestionnaireError> {
        let mut questions: Vec<QuestionDefinition> = Vec::with_capacity(definitions.len());
        let mut index = HashMap::new();

        for (i, mut definition) in definitions.into_iter().enumerate() {
            trim_strings(&mut definition);
            if definition.text.is_empty() {
                return Err(QuestionnaireError::BlankText { index: i });
            }
            if index.contains_key(&definition.text) {
                warn!(question = %definition.text, "duplicate question dropped, keeping first definition");
                continue;
            }

            let mut seen_keys = HashSet::new();
            definition.conditions.retain(|c| {
                let first = seen_keys.insert(c.question.clone());
                if !first {
                    warn!(
                        question = %definition.text,
                        references = %c.question,
                        "duplicate condition dropped, keeping first definition"
                    );
                }
                first
            });

            check_shape(&definition)?;
            index.insert(definition.text.clone(), questions.len());
            questions.push(definition);
        }

        let questionnaire = Self { questions, index };
        questionnaire.check_conditions()?;
        Ok(questionnaire)
    }

    /// The built-in intake catalog, section by section.
    pub fn builtin() -> Result<Self, QuestionnaireError> {
        let definitions = crate::all_sections()
            .iter()
            .flat_map(|s| s.questions().to_vec())
            .collect();
        Self::load(definitions)
    }

    /// Load a JSON array of question definitions from disk.
    pub fn from_path(path: &Path) -> Result<Self, QuestionnaireError> {
        let contents = std::fs::read_to_string(path).map_err(|source| QuestionnaireError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let definitions: Vec<QuestionDefinition> = serde_json::from_str(&contents)?;
        Self::load(definitions)
    }

    pub fn questions(&self) -> &[QuestionDefinition] {
        &self.questions
    }

    pub fn get(&self, text: &str) -> Option<&QuestionDefinition> {
        self.index.get(text).map(|&i| &self.questions[i])
    }

    pub fn len(&self) -> usize {
        self.questions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.questions.is_empty()
    }

    /// Check a submitted answer against its question before it is stored.
    pub fn validate_answer(
        &self,
        question: &str,
        answer: &str,
    ) -> Result<&QuestionDefinition, AnswerError> {
        let definition = self
            .get(question)
            .ok_or_else(|| AnswerError::UnknownQuestion(question.to_string()))?;

        match definition.kind {
            QuestionKind::Text => {
                if let Some(range) = definition.range {
                    let value: f64 =
                        answer
                            .trim()
                            .replace(',', ".")
                            .parse()
                            .map_err(|_| AnswerError::NotANumber {
                                question: question.to_string(),
                                answer: answer.to_string(),
                            })?;
                    if !range.contains(value) {
                        return Err(AnswerError::OutOfRange {
                            question: question.to_string(),
                            value,
                            min: range.min,
                            max: range.max,
                        });
                    }
                }
            }
            QuestionKind::Radio => {
                if !definition.options.iter().any(|o| o == answer) {
                    return Err(AnswerError::NotAnOption {
                        question: question.to_string(),
                        answer: answer.to_string(),
                    });
                }
            }
            QuestionKind::Checkbox => {
                if answer.trim().is_empty() {
                    return Err(AnswerError::EmptySelection {
                        question: question.to_string(),
                    });
                }
                let mut selected = HashSet::new();
                for part in answer.split(SELECTION_SEPARATOR) {
                    if !definition.options.iter().any(|o| o == part) {
                        return Err(AnswerError::NotAnOption {
                            question: question.to_string(),
                            answer: part.to_string(),
                        });
                    }
                    if !selected.insert(part) {
                        return Err(AnswerError::RepeatedOption {
                            question: question.to_string(),
                            option: part.to_string(),
                        });
                    }
                }
            }
        }

        Ok(definition)
    }

    fn check_conditions(&self) -> Result<(), QuestionnaireError> {
        for definition in &self.questions {
            for condition in &definition.conditions {
                let referenced = self.get(&condition.question).ok_or_else(|| {
                    QuestionnaireError::UnknownConditionQuestion {
                        question: definition.text.clone(),
                        references: condition.question.clone(),
                    }
                })?;
                if condition.accepted.is_empty() {
                    return Err(QuestionnaireError::EmptyCondition {
                        question: definition.text.clone(),
                        references: condition.question.clone(),
                    });
                }
                // Checkbox answers are joined selections, so only radio
                // options can be checked value by value.
                if referenced.kind == QuestionKind::Radio
                    && let Some(value) = condition
                        .accepted
                        .iter()
                        .find(|v| !referenced.options.contains(v))
                {
                    return Err(QuestionnaireError::UnreachableConditionValue {
                        question: definition.text.clone(),
                        references: condition.question.clone(),
                        value: value.clone(),
                    });
                }
            }
        }
        Ok(())
    }
}

/// Answers are matched verbatim against texts, options and accepted values,
/// so surrounding whitespace from a hand-written catalog is dropped.
fn trim_strings(definition: &mut QuestionDefinition) {
    let trim = |s: &mut String| *s = s.trim().to_string();

    trim(&mut definition.text);
    definition.options.iter_mut().for_each(trim);
    for condition in &mut definition.conditions {
        trim(&mut condition.question);
        condition.accepted.iter_mut().for_each(trim);
    }
}

fn check_shape(definition: &QuestionDefinition) -> Result<(), QuestionnaireError> {
    let question = || definition.text.clone();

    if definition.kind.has_options() {
        if definition.options.is_empty() {
            return Err(QuestionnaireError::MissingOptions {
                question: question(),
            });
        }
        if definition.range.is_some() {
            return Err(QuestionnaireError::RangeOnChoice {
                question: question(),
            });
        }
    } else if !definition.options.is_empty() {
        return Err(QuestionnaireError::UnexpectedOptions {
            question: question(),
        });
    }

    let mut seen = HashSet::new();
    for option in &definition.options {
        if !seen.insert(option.as_str()) {
            return Err(QuestionnaireError::DuplicateOption {
                question: question(),
                option: option.clone(),
            });
        }
    }

    if let Some(range) = definition.range
        && (range.min.is_nan() || range.max.is_nan() || range.min > range.max)
    {
        return Err(QuestionnaireError::InvalidRange {
            question: question(),
            min: range.min,
            max: range.max,
        });
    }

    Ok(())
}
