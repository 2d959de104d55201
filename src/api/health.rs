/// Health check endpoint
use crate::{api::method_not_allowed, context::AppContext};
use axum::{response::Json, routing::get, Router};

pub fn routes() -> Router<AppContext> {
    Router::new().route("/health", get(health_basic).fallback(method_not_allowed))
}

/// Liveness only; the backend is not contacted
pub async fn health_basic() -> Json<serde_json::Value> {
    Json(serde_json::json!({
        "status": "ok",
        "version": env!("CARGO_PKG_VERSION")
    }))
}
