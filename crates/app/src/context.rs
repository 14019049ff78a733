//! App Context

use std::sync::Arc;

use sqlx::migrate::MigrateError;
use thiserror::Error;

use crate::{
    database::{self, DatabaseSettings},
    products::{CatalogProductsService, ProductsService},
};

#[derive(Debug, Error)]
pub enum AppInitError {
    #[error("failed to connect to database")]
    Database(#[source] sqlx::Error),

    #[error("failed to run database migrations")]
    Migration(#[source] MigrateError),
}

#[derive(Clone)]
pub struct AppContext {
    pub products: Arc<dyn ProductsService>,
}

impl AppContext {
    #[must_use]
    pub fn new(products: Arc<dyn ProductsService>) -> Self {
        Self { products }
    }

    /// Build application context from database settings, optionally applying
    /// pending migrations first.
    ///
    /// # Errors
    ///
    /// Returns an error when establishing a database connection or running
    /// migrations fails.
    pub async fn from_database_settings(
        settings: &DatabaseSettings,
        run_migrations: bool,
    ) -> Result<Self, AppInitError> {
        let pool = database::connect_with(settings)
            .await
            .map_err(AppInitError::Database)?;

        if run_migrations {
            database::migrate(&pool)
                .await
                .map_err(AppInitError::Migration)?;
        }

        Ok(Self::new(Arc::new(CatalogProductsService::new(pool))))
    }
}
