pub mod health;

use axum::routing::post;
use axum::Router;

use crate::handlers;
use crate::state::AppState;

/// Build the `/api/v1` route tree.
///
/// Route hierarchy:
///
/// ```text
/// /questions/generate    POST   run the generator, deliver the artifact
/// ```
///
/// The import endpoint (`/questions/import`) that the redirect branch
/// targets is a downstream collaborator and is not served here.
pub fn api_routes() -> Router<AppState> {
    Router::new().route(
        "/questions/generate",
        post(handlers::generate::generate_questions),
    )
}
