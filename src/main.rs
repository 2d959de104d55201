/// did:cndid Universal Resolver driver
///
/// Serves `GET /1.0/identifiers/{id}`, forwards the lookup to the did:cndid
/// resolution backend and returns the reshaped DID document.

mod address;
mod api;
mod config;
mod context;
mod document;
mod error;
mod resolver;
mod server;

#[cfg(test)]
mod test_util;

use config::ServerConfig;
use context::AppContext;
use error::DriverResult;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> DriverResult<()> {
    // Load configuration (also picks up .env)
    let config = ServerConfig::from_env()?;

    // Initialize logging
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_new(&config.logging.level)
                .unwrap_or_else(|_| "info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!("did:cndid driver v{}", env!("CARGO_PKG_VERSION"));

    let ctx = AppContext::new(config)?;

    server::serve(ctx).await?;

    Ok(())
}
