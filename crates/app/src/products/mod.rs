//! Products

pub mod errors;
pub mod models;
pub mod repository;
pub mod service;

pub use errors::{ProductsRepositoryError, ProductsServiceError};
pub use repository::{MockProductsRepository, PgProductsRepository, ProductsRepository};
pub use service::*;
