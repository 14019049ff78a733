//! Product Errors

use salvo::http::StatusError;
use tracing::error;

use catalog_app::products::ProductsServiceError;

pub(crate) fn into_status_error(error: ProductsServiceError) -> StatusError {
    match error {
        ProductsServiceError::AlreadyExists => {
            StatusError::bad_request().brief("Product already exists")
        }
        ProductsServiceError::NotFound => StatusError::not_found().brief("Product not found"),
        ProductsServiceError::Internal(source) => {
            error!("product operation failed: {source}");

            StatusError::internal_server_error()
        }
    }
}
