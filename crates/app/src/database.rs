//! Database connection management

use sqlx::{
    ConnectOptions, PgPool,
    migrate::{MigrateError, Migrator},
    postgres::{PgConnectOptions, PgPoolOptions},
};
use tracing::info;

/// Embedded schema migrations.
pub static MIGRATOR: Migrator = sqlx::migrate!("../../migrations");

/// Connection pool settings.
#[derive(Debug, Clone)]
pub struct DatabaseSettings {
    /// `PostgreSQL` connection string.
    pub url: String,

    /// Upper bound on pooled connections.
    pub max_connections: u32,

    /// Log every executed statement at debug level.
    pub log_statements: bool,
}

impl DatabaseSettings {
    #[must_use]
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            max_connections: 10,
            log_statements: false,
        }
    }
}

/// Connect to `PostgreSQL` with default pool settings.
///
/// # Errors
///
/// Returns an error if the connection cannot be established.
pub async fn connect(database_url: &str) -> Result<PgPool, sqlx::Error> {
    connect_with(&DatabaseSettings::new(database_url)).await
}

/// Connect to `PostgreSQL`.
///
/// # Errors
///
/// Returns an error if the URL is malformed or the connection cannot be
/// established.
pub async fn connect_with(settings: &DatabaseSettings) -> Result<PgPool, sqlx::Error> {
    let mut options: PgConnectOptions = settings.url.parse()?;

    if !settings.log_statements {
        options = options.disable_statement_logging();
    }

    PgPoolOptions::new()
        .max_connections(settings.max_connections)
        .connect_with(options)
        .await
}

/// Apply any pending migrations.
///
/// # Errors
///
/// Returns an error when a migration fails or the applied history has diverged.
pub async fn migrate(pool: &PgPool) -> Result<(), MigrateError> {
    MIGRATOR.run(pool).await?;

    info!("database migrations applied");

    Ok(())
}
