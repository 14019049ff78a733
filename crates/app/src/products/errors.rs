//! Products errors.

use sqlx::{
    Error,
    error::{DatabaseError, ErrorKind},
};
use thiserror::Error;

/// Storage gateway failures.
#[derive(Debug, Error)]
pub enum ProductsRepositoryError {
    #[error("product not found")]
    NotFound,

    #[error("product already exists")]
    AlreadyExists,

    #[error("storage error")]
    Sql(#[source] Error),
}

impl From<Error> for ProductsRepositoryError {
    fn from(error: Error) -> Self {
        if matches!(error, Error::RowNotFound) {
            return Self::NotFound;
        }

        match error.as_database_error().map(DatabaseError::kind) {
            Some(ErrorKind::UniqueViolation) => Self::AlreadyExists,
            Some(ErrorKind::Other | _) | None => Self::Sql(error),
        }
    }
}

/// Product use-case failures. Sources are kept for logging only.
#[derive(Debug, Error)]
pub enum ProductsServiceError {
    #[error("product already exists")]
    AlreadyExists,

    #[error("product not found")]
    NotFound,

    #[error("internal error")]
    Internal(#[source] ProductsRepositoryError),
}

impl From<ProductsRepositoryError> for ProductsServiceError {
    /// Translation for writes: lookups decide their own not-found handling.
    fn from(error: ProductsRepositoryError) -> Self {
        match error {
            ProductsRepositoryError::NotFound => Self::NotFound,
            ProductsRepositoryError::AlreadyExists => Self::AlreadyExists,
            error @ ProductsRepositoryError::Sql(_) => Self::Internal(error),
        }
    }
}
