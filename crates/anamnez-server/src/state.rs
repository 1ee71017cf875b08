use std::sync::Arc;

use anamnez_core::models::transcript::DEFAULT_TITLE;
use anamnez_export::pdf::PdfOptions;
use anamnez_export::render::TRANSCRIPT_TEMPLATE;
use anamnez_export::styles::DocumentStyles;
use anamnez_questionnaire::questionnaire::Questionnaire;
use anamnez_storage::store::AnswerStore;

/// Shared application state, injected into all route handlers via Axum state.
#[derive(Clone)]
pub struct AppState {
    pub store: Arc<dyn AnswerStore>,
    pub questionnaire: Arc<Questionnaire>,
    pub export: Arc<ExportSettings>,
    pub cookies: CookieSettings,
}

impl AppState {
    /// State with the built-in transcript layout and insecure cookies.
    pub fn new(store: Arc<dyn AnswerStore>, questionnaire: Arc<Questionnaire>) -> Self {
        Self {
            store,
            questionnaire,
            export: Arc::new(ExportSettings::default()),
            cookies: CookieSettings::default(),
        }
    }
}

/// How transcripts are rendered.
#[derive(Debug, Clone)]
pub struct ExportSettings {
    /// Tera template producing the markdown subset the writers understand.
    pub template: String,
    /// PDF font and title; its styles apply to DOCX output too.
    pub pdf: PdfOptions,
}

impl ExportSettings {
    pub fn styles(&self) -> &DocumentStyles {
        &self.pdf.styles
    }
}

impl Default for ExportSettings {
    fn default() -> Self {
        Self {
            template: TRANSCRIPT_TEMPLATE.to_string(),
            pdf: PdfOptions {
                title: DEFAULT_TITLE.to_string(),
                ..PdfOptions::default()
            },
        }
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct CookieSettings {
    pub secure: bool,
}
