/// Universal Resolver driver endpoint
/// Implements `GET /1.0/identifiers/{id}` for did:cndid addresses
use crate::{
    address::Address,
    api::{envelope::Envelope, method_not_allowed},
    context::AppContext,
    document::reshape_document,
    error::{DriverError, DriverResult},
};
use axum::{
    extract::{rejection::PathRejection, Path, State},
    routing::get,
    Json, Router,
};
use tracing::{info, warn};

/// Route prefix shared by all universal resolver drivers
pub const IDENTIFIERS_PREFIX: &str = "/1.0/identifiers/";

/// Build identifier routes
///
/// The wildcard does not match an empty remainder, so the bare prefix gets
/// its own route.
pub fn routes() -> Router<AppContext> {
    Router::new()
        .route(
            IDENTIFIERS_PREFIX,
            get(missing_identifier).fallback(method_not_allowed),
        )
        .route(
            "/1.0/identifiers/*id",
            get(resolve_identifier).fallback(method_not_allowed),
        )
}

/// `/1.0/identifiers/` with nothing after it
pub async fn missing_identifier() -> DriverResult<Json<Envelope>> {
    warn!("ID is required");
    Err(DriverError::MissingId)
}

/// Resolve an identifier and return the reshaped document
pub async fn resolve_identifier(
    State(ctx): State<AppContext>,
    path: Result<Path<String>, PathRejection>,
) -> DriverResult<Json<Envelope>> {
    let id = match path {
        Ok(Path(id)) => id,
        Err(rejection) => {
            warn!(error = %rejection, "Undecodable identifier");
            return Err(DriverError::InvalidAddress(rejection.body_text()));
        }
    };

    if id.is_empty() {
        warn!("ID is required");
        return Err(DriverError::MissingId);
    }

    if !Address::is_canonical(&id) {
        warn!(id, "Invalid DID Address");
        return Err(DriverError::InvalidAddress(id));
    }

    let record = ctx.resolver.resolve(&id).await?;
    let document = reshape_document(&record);

    info!(id, "Resolved DID");
    Ok(Json(Envelope::success(document)))
}
