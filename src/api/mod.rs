/// API routes and handlers
pub mod envelope;
pub mod health;
pub mod identifiers;

use crate::context::AppContext;
use axum::{
    http::{header, StatusCode},
    response::{IntoResponse, Json},
    Router,
};
use envelope::Envelope;

/// Build API routes
pub fn routes() -> Router<AppContext> {
    Router::new()
        .merge(identifiers::routes())
        .merge(health::routes())
}

/// Method fallback for GET-only routes
pub async fn method_not_allowed() -> impl IntoResponse {
    (
        StatusCode::METHOD_NOT_ALLOWED,
        [(header::ALLOW, "GET,HEAD")],
        Json(Envelope::failure(405, "Method not allowed")),
    )
}
