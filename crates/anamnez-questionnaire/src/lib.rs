//! anamnez-questionnaire
//!
//! Intake question definitions, load-time validation, next-question
//! sequencing and scale scoring. Pure data and pure functions.

pub mod definition;
pub mod error;
pub mod questionnaire;
pub mod scoring;
pub mod sections;
pub mod sequencer;

use definition::QuestionDefinition;
use scoring::Scale;

/// A named, ordered block of the built-in intake catalog.
pub trait Section: Send + Sync {
    /// Unique identifier (e.g., "demographics", "scl14").
    fn id(&self) -> &str;

    /// Human-readable name.
    fn name(&self) -> &str;

    /// Questions in the order they are asked.
    fn questions(&self) -> &[QuestionDefinition];

    /// The psychometric scale scored from this section's answers, if any.
    fn scale(&self) -> Option<&Scale> {
        None
    }
}

/// Return all built-in sections in intake order.
pub fn all_sections() -> Vec<Box<dyn Section>> {
    vec![
        Box::new(sections::demographics::Demographics),
        Box::new(sections::history::History),
        Box::new(sections::scl14::Scl14),
        Box::new(sections::beck_anxiety::BeckAnxiety),
    ]
}

/// Look up a section by ID.
pub fn get_section(id: &str) -> Option<Box<dyn Section>> {
    all_sections().into_iter().find(|s| s.id() == id)
}
