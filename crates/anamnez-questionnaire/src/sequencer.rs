//! Next-question selection.
//!
//! Walks the questionnaire in declaration order and returns the first
//! question that is neither answered nor gated off by its conditions. The
//! session's answers are passed in on every call; the sequencer holds no
//! state of its own.

use std::collections::{BTreeMap, HashMap};

use anamnez_core::models::answer::Answer;

use crate::definition::QuestionDefinition;
use crate::questionnaire::Questionnaire;

/// Read access to one session's answers, keyed by question text.
pub trait AnswerLookup {
    fn answer_for(&self, question: &str) -> Option<&str>;
}

impl AnswerLookup for [Answer] {
    fn answer_for(&self, question: &str) -> Option<&str> {
        self.iter()
            .find(|a| a.question == question)
            .map(|a| a.answer.as_str())
    }
}

impl AnswerLookup for Vec<Answer> {
    fn answer_for(&self, question: &str) -> Option<&str> {
        self.as_slice().answer_for(question)
    }
}

impl AnswerLookup for HashMap<String, String> {
    fn answer_for(&self, question: &str) -> Option<&str> {
        self.get(question).map(String::as_str)
    }
}

impl AnswerLookup for BTreeMap<String, String> {
    fn answer_for(&self, question: &str) -> Option<&str> {
        self.get(question).map(String::as_str)
    }
}

impl QuestionDefinition {
    /// Whether every condition holds for these answers. A condition on a
    /// question that has no answer yet fails.
    pub fn is_eligible<A: AnswerLookup + ?Sized>(&self, answers: &A) -> bool {
        self.conditions.iter().all(|condition| {
            answers
                .answer_for(&condition.question)
                .is_some_and(|given| condition.accepted.iter().any(|a| a == given))
        })
    }
}

impl Questionnaire {
    /// The next question to ask, or `None` when the session is complete.
    pub fn next_question<A: AnswerLookup + ?Sized>(
        &self,
        answers: &A,
    ) -> Option<&QuestionDefinition> {
        self.questions()
            .iter()
            .filter(|q| answers.answer_for(&q.text).is_none())
            .find(|q| q.is_eligible(answers))
    }

    pub fn is_complete<A: AnswerLookup + ?Sized>(&self, answers: &A) -> bool {
        self.next_question(answers).is_none()
    }
}
