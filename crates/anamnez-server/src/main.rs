use std::fs;
use std::sync::Arc;

use eyre::WrapErr;
use tokio::net::TcpListener;
use tracing_subscriber::EnvFilter;

use anamnez_core::models::transcript::Transcript;
use anamnez_export::render::render_transcript;
use anamnez_questionnaire::questionnaire::Questionnaire;
use anamnez_server::config::{ServerConfig, StoreBackend};
use anamnez_server::state::{AppState, CookieSettings, ExportSettings};
use anamnez_storage::memory::MemoryAnswerStore;
use anamnez_storage::s3::S3AnswerStore;
use anamnez_storage::store::AnswerStore;

#[tokio::main]
async fn main() -> eyre::Result<()> {
    // A missing .env file is fine; the process environment still applies.
    let _ = dotenvy::dotenv();

    // Structured JSON logging
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .json()
        .init();

    let config = ServerConfig::from_env()?;

    let questionnaire = match &config.questionnaire_path {
        Some(path) => Questionnaire::from_path(path)?,
        None => Questionnaire::builtin()?,
    };
    tracing::info!(questions = questionnaire.len(), "questionnaire loaded");

    let store: Arc<dyn AnswerStore> = match config.store {
        StoreBackend::Memory => Arc::new(MemoryAnswerStore::new()),
        StoreBackend::S3 => {
            let client = anamnez_storage::client::build_client().await;
            Arc::new(S3AnswerStore::new(client, config.bucket.clone()))
        }
    };
    tracing::info!(backend = ?config.store, "answer store ready");

    let state = AppState {
        store,
        questionnaire: Arc::new(questionnaire),
        export: Arc::new(load_export_settings(&config)?),
        cookies: CookieSettings {
            secure: config.secure_cookies,
        },
    };

    let app = anamnez_server::router(state);

    if config.lambda {
        return lambda_http::run(app).await.map_err(|e| eyre::eyre!(e));
    }

    let addr = config.socket_addr();
    let listener = TcpListener::bind(addr)
        .await
        .wrap_err_with(|| format!("failed to bind {addr}"))?;
    tracing::info!(%addr, "listening");
    axum::serve(listener, app).await?;
    Ok(())
}

/// Read the optional template and font overrides. A template that does not
/// parse fails startup instead of the first download.
fn load_export_settings(config: &ServerConfig) -> eyre::Result<ExportSettings> {
    let mut settings = ExportSettings::default();

    if let Some(path) = &config.transcript_template_path {
        settings.template = fs::read_to_string(path)
            .wrap_err_with(|| format!("failed to read template {}", path.display()))?;
        let sample = Transcript::new(&jiff::Zoned::now(), &[], Vec::new());
        render_transcript(&settings.template, &sample)?;
    }

    if let Some(path) = &config.pdf_font_path {
        let font = fs::read(path)
            .wrap_err_with(|| format!("failed to read font {}", path.display()))?;
        settings.pdf.font = Some(font);
    }

    Ok(settings)
}
