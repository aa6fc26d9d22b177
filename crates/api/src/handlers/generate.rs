//! Generation request handler and delivery responder.
//!
//! Drives the full pipeline for one submission: sanitize and validate the
//! form fields, invoke the external generator, verify the artifact, then
//! either stream it back as a download or redirect the operator to the
//! import screen. One blocking round trip per request; nothing persists
//! across requests.

use axum::body::Body;
use axum::extract::{Form, Query, State};
use axum::http::{header, StatusCode};
use axum::response::{IntoResponse, Redirect, Response};
use percent_encoding::{utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};
use serde::Deserialize;

use examgen_core::artifact::{self, Artifact};
use examgen_core::error::CoreError;
use examgen_core::generator;
use examgen_core::request::GenerationRequest;

use crate::error::AppResult;
use crate::state::AppState;

/// Stable operator-facing download name. The cache file itself is
/// request-unique; this is only the `Content-Disposition` filename.
pub const DOWNLOAD_FILENAME: &str = "ai.tsv";

/// Import collaborator endpoint targeted by the redirect branch.
pub const IMPORT_ROUTE: &str = "/api/v1/questions/import";

/// Query-encoding set for the artifact basename: everything except
/// unreserved characters is percent-encoded.
const FILENAME_QUERY: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'.')
    .remove(b'_')
    .remove(b'~');

/// Raw form fields submitted by the operator.
#[derive(Debug, Deserialize)]
pub struct GenerateForm {
    /// Module name (required).
    pub module: String,
    /// Subject description (optional).
    #[serde(default)]
    pub desc: String,
    /// Comma-separated subject list (required).
    pub subjects: String,
    /// Requested question count as entered; coerced, never rejected.
    #[serde(default)]
    pub n: String,
}

/// Delivery selection. Always evaluated: `?download=false` takes the
/// redirect-to-import branch, anything else downloads.
#[derive(Debug, Deserialize)]
pub struct GenerateQuery {
    pub download: Option<bool>,
}

/// POST /questions/generate
///
/// Pipeline: `Received -> Sanitized -> Invoked -> {Failed | Verified} -> Delivered`.
pub async fn generate_questions(
    State(state): State<AppState>,
    Query(params): Query<GenerateQuery>,
    Form(form): Form<GenerateForm>,
) -> AppResult<Response> {
    let config = &state.config.generator;

    let request = GenerationRequest::from_fields(
        &form.module,
        &form.desc,
        &form.subjects,
        &form.n,
        config.max_questions,
    )?;

    tracing::info!(
        module = %request.module,
        subjects = request.subjects.len(),
        num_questions = request.num_questions,
        "Generation requested",
    );

    let output_path = artifact::unique_path(&config.cache_dir);

    // Blocks until the generator exits. The output is captured and logged
    // inside `run`; the exit status is not the success signal, the
    // artifact existing afterwards is.
    generator::run(config, &request, &output_path).await?;

    let artifact = artifact::verify(&output_path).await?;

    tracing::info!(
        artifact = %artifact.basename,
        size = artifact.size,
        "Generation artifact verified",
    );

    if params.download.unwrap_or(true) {
        download_response(&artifact).await
    } else {
        Ok(redirect_response(&artifact))
    }
}

/// Stream the artifact back as a file download.
///
/// `Content-Length` is the artifact's exact byte size and the body is the
/// raw file content. Cache-disabling headers keep intermediaries from
/// serving a stale artifact.
async fn download_response(artifact: &Artifact) -> AppResult<Response> {
    let bytes = tokio::fs::read(&artifact.path)
        .await
        .map_err(CoreError::Io)?;

    let response = Response::builder()
        .status(StatusCode::OK)
        .header(header::CONTENT_TYPE, "text/tab-separated-values")
        .header(
            header::CONTENT_DISPOSITION,
            format!("attachment; filename=\"{DOWNLOAD_FILENAME}\""),
        )
        .header(header::CONTENT_LENGTH, bytes.len())
        .header(header::EXPIRES, "0")
        .header(header::CACHE_CONTROL, "must-revalidate")
        .header(header::PRAGMA, "public")
        .body(Body::from(bytes))
        .map_err(|e| crate::error::AppError::InternalError(e.to_string()))?;

    Ok(response)
}

/// Redirect the operator to the import screen, referencing the
/// request-unique artifact by basename with the preview flag set.
fn redirect_response(artifact: &Artifact) -> Response {
    let file = utf8_percent_encode(&artifact.basename, FILENAME_QUERY);
    let location = format!("{IMPORT_ROUTE}?file={file}&preview=1");
    Redirect::to(&location).into_response()
}
