use axum::extract::State;
use axum::{routing::get, Json, Router};
use serde::Serialize;

use crate::state::AppState;

/// Health check response payload.
#[derive(Serialize)]
pub struct HealthResponse {
    /// Overall service status.
    pub status: &'static str,
    /// Crate version from Cargo.toml.
    pub version: &'static str,
    /// Whether the configured generator script exists on disk.
    pub generator_ready: bool,
}

/// GET /health -- returns service and generator readiness.
async fn health_check(State(state): State<AppState>) -> Json<HealthResponse> {
    let generator_ready = tokio::fs::metadata(&state.config.generator.script_path)
        .await
        .map(|m| m.is_file())
        .unwrap_or(false);

    let status = if generator_ready { "ok" } else { "degraded" };

    Json(HealthResponse {
        status,
        version: env!("CARGO_PKG_VERSION"),
        generator_ready,
    })
}

/// Mount health check routes (intended for root-level, NOT under `/api/v1`).
pub fn router() -> Router<AppState> {
    Router::new().route("/health", get(health_check))
}
