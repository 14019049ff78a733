//! Server configuration module

use clap::Parser;

use catalog_app::database::DatabaseSettings;

use crate::config::{
    db::DatabaseConfig,
    observability::{LoggingConfig, ObservabilityConfig},
    server::ServerRuntimeConfig,
};

pub(crate) mod db;
pub(crate) mod observability;
pub(crate) mod server;

pub(crate) use observability::LogFormat;

/// Catalog JSON API Server configuration
#[derive(Debug, Parser)]
#[command(name = "catalog-json", about = "Product Catalog JSON API Server", long_about = None)]
pub struct ServerConfig {
    /// Server network settings.
    #[command(flatten)]
    pub server: ServerRuntimeConfig,

    /// Logging output settings.
    #[command(flatten)]
    pub logging: LoggingConfig,

    /// Request logging settings.
    #[command(flatten)]
    pub observability: ObservabilityConfig,

    /// Application database settings.
    #[command(flatten)]
    pub database: DatabaseConfig,
}

impl ServerConfig {
    /// Load configuration from environment and CLI arguments
    ///
    /// # Errors
    ///
    /// Returns an error if configuration cannot be parsed
    pub fn load() -> Result<Self, clap::Error> {
        // Load .env file if present (ignore if missing)
        _ = dotenvy::dotenv();

        Self::try_parse()
    }

    /// Get the socket address for binding
    #[must_use]
    pub fn socket_addr(&self) -> String {
        self.server.socket_addr()
    }

    /// Connection pool settings for the application database.
    #[must_use]
    pub fn database_settings(&self) -> DatabaseSettings {
        DatabaseSettings {
            url: self.database.database_url.clone(),
            max_connections: self.database.max_connections,
            log_statements: self.database.debug,
        }
    }
}
