/// Configuration management for the did:cndid driver
use crate::error::{DriverError, DriverResult};
use std::env;
use std::time::Duration;

/// Main driver configuration
#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub service: ServiceConfig,
    pub resolver: ResolverConfig,
    pub logging: LoggingConfig,
}

/// Listener configuration
#[derive(Debug, Clone)]
pub struct ServiceConfig {
    pub hostname: String,
    pub port: u16,
}

/// Remote resolution backend
#[derive(Debug, Clone)]
pub struct ResolverConfig {
    /// `http` or `https`
    pub scheme: String,
    pub host: String,
    pub port: u16,
    /// Request timeout in seconds
    pub timeout_secs: u64,
    /// User-Agent header for backend requests
    pub user_agent: String,
}

/// Logging configuration
#[derive(Debug, Clone)]
pub struct LoggingConfig {
    pub level: String,
}

impl ResolverConfig {
    /// Base URL of the backend, without trailing slash
    pub fn base_url(&self) -> String {
        format!("{}://{}:{}", self.scheme, self.host, self.port)
    }

    /// Full URL of the backend resolve endpoint
    pub fn resolve_url(&self) -> String {
        format!("{}/resolve", self.base_url())
    }

    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }
}

impl ServerConfig {
    /// Load configuration from environment variables
    pub fn from_env() -> DriverResult<Self> {
        dotenv::dotenv().ok();
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Load configuration from an arbitrary key lookup
    pub fn from_lookup<F>(lookup: F) -> DriverResult<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let var = |key: &str, default: &str| lookup(key).unwrap_or_else(|| default.to_string());

        let hostname = var("DRIVER_HOSTNAME", "0.0.0.0");
        let port = var("DRIVER_PORT", "8080")
            .parse()
            .map_err(|_| DriverError::Config("Invalid port number".to_string()))?;

        let scheme = var("DRIVER_RESOLVER_SCHEME", "http").to_lowercase();
        let resolver_host = var("DRIVER_RESOLVER_HOST", "139.198.21.202");
        let resolver_port = var("DRIVER_RESOLVER_PORT", "31005")
            .parse()
            .map_err(|_| DriverError::Config("Invalid resolver port number".to_string()))?;
        let timeout_secs = var("DRIVER_RESOLVER_TIMEOUT_SECS", "30")
            .parse()
            .map_err(|_| DriverError::Config("Invalid resolver timeout".to_string()))?;
        let user_agent = lookup("DRIVER_USER_AGENT")
            .unwrap_or_else(|| format!("did-cndid-driver/{}", env!("CARGO_PKG_VERSION")));

        let log_level = var("RUST_LOG", "info");

        Ok(ServerConfig {
            service: ServiceConfig { hostname, port },
            resolver: ResolverConfig {
                scheme,
                host: resolver_host,
                port: resolver_port,
                timeout_secs,
                user_agent,
            },
            logging: LoggingConfig { level: log_level },
        })
    }

    /// Validate configuration
    pub fn validate(&self) -> DriverResult<()> {
        if self.service.hostname.is_empty() {
            return Err(DriverError::Config("Hostname cannot be empty".to_string()));
        }

        if self.resolver.host.is_empty() {
            return Err(DriverError::Config("Resolver host cannot be empty".to_string()));
        }

        if self.resolver.scheme != "http" && self.resolver.scheme != "https" {
            return Err(DriverError::Config(format!(
                "Unsupported resolver scheme: {}",
                self.resolver.scheme
            )));
        }

        if self.resolver.port == 0 {
            return Err(DriverError::Config("Resolver port cannot be 0".to_string()));
        }

        if self.resolver.timeout_secs == 0 {
            return Err(DriverError::Config(
                "Resolver timeout must be at least 1 second".to_string(),
            ));
        }

        Ok(())
    }
}
