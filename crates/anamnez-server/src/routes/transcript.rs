use axum::extract::{Query, State};
use axum::http::header::{CONTENT_DISPOSITION, CONTENT_TYPE};
use axum::response::{IntoResponse, Response};
use serde::Deserialize;

use anamnez_core::models::transcript::Transcript;
use anamnez_export::render::render_transcript;
use anamnez_questionnaire::scoring::score_scales;

use crate::error::ApiError;
use crate::session::Session;
use crate::state::AppState;

#[derive(Debug, Clone, Copy, Default, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ExportFormat {
    #[default]
    Pdf,
    Docx,
}

impl ExportFormat {
    fn content_type(self) -> &'static str {
        match self {
            ExportFormat::Pdf => "application/pdf",
            ExportFormat::Docx => {
                "application/vnd.openxmlformats-officedocument.wordprocessingml.document"
            }
        }
    }

    fn extension(self) -> &'static str {
        match self {
            ExportFormat::Pdf => "pdf",
            ExportFormat::Docx => "docx",
        }
    }
}

#[derive(Deserialize)]
pub struct TranscriptQuery {
    #[serde(default)]
    pub format: ExportFormat,
}

/// Download the session's conversation as a PDF (default) or DOCX document.
pub async fn download_transcript(
    State(state): State<AppState>,
    Session(session): Session,
    Query(query): Query<TranscriptQuery>,
) -> Result<Response, ApiError> {
    let answers = state.store.answers(&session).await?;
    if answers.is_empty() {
        return Err(ApiError::NotFound(
            "no answers recorded for this session".to_string(),
        ));
    }

    let scores = score_scales(&state.questionnaire, &answers);
    let transcript = Transcript::new(&jiff::Zoned::now(), &answers, scores);
    let rendered = render_transcript(&state.export.template, &transcript)?;

    let bytes = match query.format {
        ExportFormat::Pdf => anamnez_export::pdf::generate_pdf(&rendered, &state.export.pdf)?,
        ExportFormat::Docx => {
            anamnez_export::docx::generate_docx(&rendered, state.export.styles())?
        }
    };
    tracing::info!(
        format = query.format.extension(),
        entries = transcript.entries.len(),
        bytes = bytes.len(),
        "transcript generated"
    );

    let disposition = format!(
        "attachment; filename=\"anamnez-transcript.{}\"",
        query.format.extension()
    );
    Ok((
        [
            (CONTENT_TYPE, query.format.content_type().to_string()),
            (CONTENT_DISPOSITION, disposition),
        ],
        bytes,
    )
        .into_response())
}
