//! Database Config

use clap::Args;

/// Database settings.
#[derive(Debug, Args)]
pub struct DatabaseConfig {
    /// `PostgreSQL` connection string
    #[arg(long, env = "DATABASE_URL", hide_env_values = true)]
    pub database_url: String,

    /// Maximum pooled connections
    #[arg(long = "db-max-connections", env = "DB_MAX_CONNECTIONS", default_value_t = 10)]
    pub max_connections: u32,

    /// Log every SQL statement at debug level
    #[arg(long = "db-debug", env = "DB_DEBUG", default_value_t = false)]
    pub debug: bool,

    /// Apply pending migrations before serving
    #[arg(long = "db-migration", env = "DB_MIGRATION", default_value_t = false)]
    pub migrate: bool,
}
