/// Application context and dependency injection
use crate::{config::ServerConfig, error::DriverResult, resolver::BackendResolver};
use std::sync::Arc;

/// Immutable services shared by every request
#[derive(Clone)]
pub struct AppContext {
    pub config: Arc<ServerConfig>,
    pub resolver: Arc<BackendResolver>,
}

impl AppContext {
    /// Create a new application context from configuration
    pub fn new(config: ServerConfig) -> DriverResult<Self> {
        config.validate()?;

        let resolver = Arc::new(BackendResolver::new(config.resolver.clone())?);

        Ok(Self {
            config: Arc::new(config),
            resolver,
        })
    }

    /// Listen address
    pub fn listen_addr(&self) -> String {
        format!("{}:{}", self.config.service.hostname, self.config.service.port)
    }
}
