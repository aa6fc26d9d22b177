use axum::http::{header, StatusCode};
use axum::response::{IntoResponse, Response};
use serde_json::json;

use examgen_core::error::CoreError;

/// Operator-facing body for a failed generation. Deliberately plain text
/// with no detail: the captured generator output is in the server log.
pub const GENERATION_FAILED_BODY: &str = "Generation failed: check server logs.";

/// Application-level error type for HTTP handlers.
///
/// Wraps [`CoreError`] for domain errors and adds HTTP-specific variants.
/// Implements [`IntoResponse`] to produce consistent error responses.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// A domain-level error from `examgen_core`.
    #[error(transparent)]
    Core(#[from] CoreError),

    /// A bad request with a human-readable message.
    #[error("Bad request: {0}")]
    BadRequest(String),

    /// An internal error with a human-readable message.
    #[error("Internal error: {0}")]
    InternalError(String),
}

/// Convenience type alias for handler return values.
pub type AppResult<T> = Result<T, AppError>;

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, code, message) = match &self {
            // --- CoreError variants ---
            AppError::Core(core) => match core {
                CoreError::Validation(msg) => {
                    (StatusCode::BAD_REQUEST, "VALIDATION_ERROR", msg.clone())
                }
                CoreError::Configuration(msg) => {
                    tracing::error!(error = %msg, "Configuration error");
                    (
                        StatusCode::INTERNAL_SERVER_ERROR,
                        "CONFIGURATION_ERROR",
                        msg.clone(),
                    )
                }
                // The only fatal, operator-visible failure path: the
                // generator did not produce the artifact. Plain text, no
                // download headers.
                CoreError::GenerationFailed(detail) => {
                    tracing::error!(error = %detail, "Question generation failed");
                    return (
                        StatusCode::BAD_GATEWAY,
                        [(header::CONTENT_TYPE, "text/plain; charset=utf-8")],
                        GENERATION_FAILED_BODY,
                    )
                        .into_response();
                }
                CoreError::Io(err) => {
                    tracing::error!(error = %err, "I/O error");
                    (
                        StatusCode::INTERNAL_SERVER_ERROR,
                        "INTERNAL_ERROR",
                        "An internal error occurred".to_string(),
                    )
                }
            },

            // --- HTTP-specific errors ---
            AppError::BadRequest(msg) => (StatusCode::BAD_REQUEST, "BAD_REQUEST", msg.clone()),
            AppError::InternalError(msg) => {
                tracing::error!(error = %msg, "Internal error");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "INTERNAL_ERROR",
                    "An internal error occurred".to_string(),
                )
            }
        };

        let body = json!({
            "error": message,
            "code": code,
        });

        (status, axum::Json(body)).into_response()
    }
}
