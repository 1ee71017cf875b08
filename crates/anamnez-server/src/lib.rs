//! anamnez-server
//!
//! HTTP surface of the intake service. The binary serves the router either
//! directly over TCP or under the AWS Lambda runtime.

pub mod config;
pub mod error;
pub mod middleware;
pub mod routes;
pub mod session;
pub mod state;

use axum::middleware as axum_mw;
use axum::routing::{get, post};
use axum::Router;
use tower_http::cors::{Any, CorsLayer};

use state::AppState;

/// Build the application router with every route and layer attached.
pub fn router(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/health", get(routes::health::health_check))
        .route("/", get(routes::session::landing))
        .route("/reset", post(routes::session::reset))
        .route("/questions", get(routes::questions::list_questions))
        .route("/questions/next", get(routes::questions::next_question))
        .route("/answers", get(routes::answers::conversation))
        .route("/answers", post(routes::answers::submit_answer))
        .route("/transcript", get(routes::transcript::download_transcript))
        .layer(axum_mw::from_fn(middleware::request_log::request_log))
        .layer(cors)
        .with_state(state)
}
