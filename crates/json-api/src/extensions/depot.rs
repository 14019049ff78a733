//! Depot helper extensions.

use std::any::{Any, type_name};

use salvo::prelude::{Depot, StatusError};
use tracing::error;

/// Injected state lookups that fail as a logged 500.
pub(crate) trait DepotExt {
    fn obtain_or_500<T: Any + Send + Sync>(&self) -> Result<&T, StatusError>;
}

impl DepotExt for Depot {
    fn obtain_or_500<T: Any + Send + Sync>(&self) -> Result<&T, StatusError> {
        self.obtain::<T>().map_err(|_missing| {
            error!(state = type_name::<T>(), "state missing from depot");

            StatusError::internal_server_error()
        })
    }
}
