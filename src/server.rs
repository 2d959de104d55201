/// HTTP server setup and routing
use crate::{
    api::envelope::Envelope,
    context::AppContext,
    error::{DriverError, DriverResult},
};
use axum::{
    http::{header, Method, StatusCode},
    response::Json,
    Router,
};
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};
use tracing::info;

/// Build the main application router
/// Returns Router<()> because state is already provided
pub fn build_router(ctx: AppContext) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([Method::GET])
        .allow_headers([header::CONTENT_TYPE]);

    Router::new()
        .merge(crate::api::routes())
        .with_state(ctx)
        .fallback(not_found)
        .layer(cors)
        .layer(TraceLayer::new_for_http())
}

/// 404 handler
async fn not_found() -> (StatusCode, Json<Envelope>) {
    (
        StatusCode::NOT_FOUND,
        Json(Envelope::failure(404, "Not found")),
    )
}

/// Start the HTTP server
pub async fn serve(ctx: AppContext) -> DriverResult<()> {
    let addr = ctx.listen_addr();

    info!("did:cndid driver listening on {}", addr);
    info!("   Resolver backend: {}", ctx.config.resolver.resolve_url());

    let app = build_router(ctx);

    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .map_err(|e| DriverError::Internal(format!("Failed to bind to {}: {}", addr, e)))?;

    axum::serve(listener, app)
        .await
        .map_err(|e| DriverError::Internal(format!("Server error: {}", e)))?;

    Ok(())
}
