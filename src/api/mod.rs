//! HTTP API server.
//!
//! axum router with permissive CORS (the browser client is served from a
//! separate origin in development) and request tracing.

pub mod handlers;
pub mod types;

use std::sync::Arc;

use anyhow::{Context, Result};
use axum::{
    routing::{get, post},
    Router,
};
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing::info;

use crate::config::Config;
use crate::content::ContentGenerator;
use crate::error::CoachResult;
use crate::tts::TtsEngine;
use self::handlers::AppState;

/// Build the application state from configuration.
pub fn build_state(config: &Config) -> CoachResult<Arc<AppState>> {
    Ok(Arc::new(AppState {
        content: ContentGenerator::new(config)?,
        tts: TtsEngine::new(config.tts_command.clone()),
    }))
}

/// Build the API router.
pub fn router(state: Arc<AppState>) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/api/status", get(handlers::status))
        .route("/api/compareAnswer", post(handlers::compare_answer))
        .route("/api/generateQuestions", post(handlers::generate_questions))
        .route(
            "/api/generateQuestionsWithAudio",
            post(handlers::generate_questions_with_audio),
        )
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(state)
}

/// Bind and serve the API until the process is stopped.
pub async fn serve(config: Config) -> Result<()> {
    let state = build_state(&config).context("failed to build application state")?;
    let app = router(state);

    let addr = format!("0.0.0.0:{}", config.port);
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .with_context(|| format!("failed to bind {addr}"))?;

    info!(%addr, "lingo-coach API listening");

    axum::serve(listener, app)
        .await
        .context("API server error")?;

    Ok(())
}
