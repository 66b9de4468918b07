//! Web application configuration.

use common::{CacheConfig, DatabaseConfig, ServerConfig, SessionConfig};

/// Everything the web application reads from the environment.
#[derive(Debug, Clone, Default)]
pub struct WebConfig {
    pub server: ServerConfig,
    pub database: DatabaseConfig,
    /// Redis for sessions. `None` keeps sessions in process memory.
    pub cache: Option<CacheConfig>,
    pub session: SessionConfig,
}

impl WebConfig {
    /// Load configuration from environment variables.
    pub fn from_env() -> Self {
        Self {
            server: ServerConfig::from_env(),
            database: DatabaseConfig::from_env(),
            cache: CacheConfig::from_env(),
            session: SessionConfig::from_env(),
        }
    }
}
