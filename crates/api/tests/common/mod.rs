//! Shared helpers for integration tests.
//!
//! Builds the full application router with the production middleware
//! stack, pointing the generator config at a bash script standing in for
//! the real question generator.

#![allow(dead_code)]

use std::path::{Path, PathBuf};
use std::sync::Arc;

use axum::body::{Body, Bytes};
use axum::http::{Method, Request, Response};
use axum::Router;
use http_body_util::BodyExt;
use tower::ServiceExt;

use examgen_api::config::ServerConfig;
use examgen_api::router::build_app_router;
use examgen_api::state::AppState;
use examgen_core::generator::GeneratorConfig;

/// A fake generator that scans its arguments for `--output` and writes a
/// small fixed TSV there.
pub const GENERATOR_WRITES_TSV: &str = r#"
out=""
prev=""
for a in "$@"; do
  if [ "$prev" = "--output" ]; then out="$a"; fi
  prev="$a"
done
printf 'M\t1\tNetworks\nQ\t1\tWhat is TCP?\n' > "$out"
"#;

/// A fake generator that dumps every received argument, one per line,
/// into the output artifact. Lets tests assert on the exact argv the
/// sanitizer produced.
pub const GENERATOR_ECHOES_ARGS: &str = r#"
out=""
prev=""
for a in "$@"; do
  if [ "$prev" = "--output" ]; then out="$a"; fi
  prev="$a"
done
printf '%s\n' "$@" > "$out"
"#;

/// A fake generator that produces no artifact at all.
pub const GENERATOR_WRITES_NOTHING: &str = "\necho 'generator exploded'\n";

/// Write a bash generator script into `dir` and return its path.
pub fn write_generator_script(dir: &Path, body: &str) -> PathBuf {
    let path = dir.join("gen.sh");
    std::fs::write(&path, format!("#!/bin/bash{body}")).expect("write generator script");
    path
}

/// Build a `GeneratorConfig` that runs `script` via bash, writing
/// artifacts under `dir`.
pub fn test_generator(dir: &Path, script: PathBuf) -> GeneratorConfig {
    GeneratorConfig {
        interpreter: "bash".to_string(),
        script_path: script,
        api_key: "test-api-key".to_string(),
        cache_dir: dir.to_path_buf(),
        max_questions: 50,
    }
}

/// Build a test `ServerConfig` with safe defaults around the given
/// generator configuration.
pub fn test_config(generator: GeneratorConfig) -> ServerConfig {
    ServerConfig {
        host: "127.0.0.1".to_string(),
        port: 0,
        cors_origins: vec!["http://localhost:5173".to_string()],
        request_timeout_secs: 30,
        generator,
    }
}

/// Build the full application router with all middleware layers.
///
/// This mirrors the router construction in `main.rs` so integration tests
/// exercise the same stack (CORS, request ID, timeout, tracing, panic
/// recovery) that production uses.
pub fn build_test_app(generator: GeneratorConfig) -> Router {
    let config = test_config(generator);
    let state = AppState {
        config: Arc::new(config.clone()),
    };
    build_app_router(state, &config)
}

/// Issue a GET request against the app.
pub async fn get(app: Router, uri: &str) -> Response<Body> {
    app.oneshot(
        Request::builder()
            .method(Method::GET)
            .uri(uri)
            .body(Body::empty())
            .expect("build request"),
    )
    .await
    .expect("infallible")
}

/// POST a urlencoded form body against the app.
pub async fn post_form(app: Router, uri: &str, body: &str) -> Response<Body> {
    app.oneshot(
        Request::builder()
            .method(Method::POST)
            .uri(uri)
            .header("content-type", "application/x-www-form-urlencoded")
            .body(Body::from(body.to_string()))
            .expect("build request"),
    )
    .await
    .expect("infallible")
}

/// Collect the full response body as bytes.
pub async fn body_bytes(response: Response<Body>) -> Bytes {
    response
        .into_body()
        .collect()
        .await
        .expect("collect body")
        .to_bytes()
}

/// Collect the full response body and parse it as JSON.
pub async fn body_json(response: Response<Body>) -> serde_json::Value {
    let bytes = body_bytes(response).await;
    serde_json::from_slice(&bytes).expect("body should be valid JSON")
}
