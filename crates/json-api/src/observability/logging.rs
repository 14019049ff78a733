//! Logging subscriber initialisation.

use tracing_subscriber::{
    EnvFilter, Registry,
    layer::{Layer, SubscriberExt},
    util::SubscriberInitExt,
};

use crate::config::{LogFormat, ServerConfig};

use super::ObservabilityError;

/// sqlx reports each executed statement at debug level on this target.
const SQL_STATEMENTS_DIRECTIVE: &str = "sqlx::query=debug";

pub(crate) fn init_subscriber(config: &ServerConfig) -> Result<(), ObservabilityError> {
    let filter = build_env_filter(config)?;

    match config.logging.log_format {
        LogFormat::Compact => init_with_layer(
            filter,
            tracing_subscriber::fmt::layer()
                .compact()
                .with_target(true)
                .with_file(true)
                .with_line_number(true),
        ),
        LogFormat::Json => init_with_layer(
            filter,
            tracing_subscriber::fmt::layer()
                .json()
                .with_current_span(true)
                .with_span_list(true)
                .with_target(true),
        ),
    }
}

fn build_env_filter(config: &ServerConfig) -> Result<EnvFilter, ObservabilityError> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        EnvFilter::new(format!(
            "{},h2=warn,hyper=warn,sqlx=warn",
            config.logging.log_level
        ))
    });

    if config.database.debug {
        return Ok(filter.add_directive(SQL_STATEMENTS_DIRECTIVE.parse()?));
    }

    Ok(filter)
}

fn init_with_layer<L>(filter: EnvFilter, fmt_layer: L) -> Result<(), ObservabilityError>
where
    L: Layer<Registry> + Send + Sync + 'static,
{
    tracing_subscriber::registry()
        .with(fmt_layer)
        .with(filter)
        .try_init()?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use clap::Parser;
    use testresult::TestResult;
    use tracing::Level;

    use super::*;

    fn sql_statements_enabled(config: &ServerConfig) -> Result<bool, ObservabilityError> {
        let subscriber = tracing_subscriber::registry().with(build_env_filter(config)?);

        Ok(tracing::subscriber::with_default(subscriber, || {
            tracing::enabled!(target: "sqlx::query", Level::DEBUG)
        }))
    }

    #[test]
    fn db_debug_lets_sql_statements_through() -> TestResult {
        let config = ServerConfig::try_parse_from([
            "catalog-json",
            "--database-url",
            "postgres://localhost/catalog",
            "--db-debug",
        ])?;

        assert!(
            sql_statements_enabled(&config)?,
            "sqlx statement logs should be enabled with --db-debug"
        );

        Ok(())
    }

    #[test]
    fn other_sqlx_noise_stays_quiet_with_db_debug() -> TestResult {
        let config = ServerConfig::try_parse_from([
            "catalog-json",
            "--database-url",
            "postgres://localhost/catalog",
            "--db-debug",
        ])?;

        let subscriber = tracing_subscriber::registry().with(build_env_filter(&config)?);

        let pool_debug = tracing::subscriber::with_default(subscriber, || {
            tracing::enabled!(target: "sqlx::pool", Level::DEBUG)
        });

        if std::env::var_os("RUST_LOG").is_none() {
            assert!(!pool_debug, "only statement logs should be raised to debug");
        }

        Ok(())
    }
}
