//! Test helpers.

use std::sync::Arc;

use jiff::Timestamp;
use salvo::{affix_state::inject, prelude::*};

use catalog_app::{
    context::AppContext,
    products::{
        MockProductsService, ProductsRepositoryError, ProductsServiceError,
        models::{Product, ProductUuid},
    },
};

use crate::state::State;

pub(crate) fn products_service(products: MockProductsService, route: Router) -> Service {
    let state = State::from_app_context(AppContext::new(Arc::new(products)));

    Service::new(Router::new().hoop(inject(state)).push(route))
}

pub(crate) fn make_product(uuid: ProductUuid, title: &str) -> Product {
    Product {
        uuid,
        title: title.to_string(),
        description: format!("{title} description"),
        rating: 4.5,
        image: format!("/images/{uuid}.png"),
        created_at: Timestamp::UNIX_EPOCH,
        updated_at: Timestamp::UNIX_EPOCH,
        deleted_at: None,
    }
}

/// A storage failure as the service reports it.
pub(crate) fn internal_error() -> ProductsServiceError {
    ProductsServiceError::Internal(ProductsRepositoryError::Sql(sqlx::Error::PoolTimedOut))
}
