//! Get Product Handler

use std::sync::Arc;

use salvo::{oapi::extract::PathParam, prelude::*};
use uuid::Uuid;

use crate::{
    extensions::*,
    products::{errors::into_status_error, responses::ProductDetailResponse},
    state::State,
};

/// Get Product Handler
///
/// Returns a product.
#[endpoint(
    tags("products"),
    summary = "Get Product",
    responses(
        (status_code = StatusCode::OK, description = "Product"),
        (status_code = StatusCode::NOT_FOUND, description = "Product not found"),
        (status_code = StatusCode::BAD_REQUEST, description = "Malformed product id"),
    ),
)]
pub(crate) async fn handler(
    id: PathParam<Uuid>,
    depot: &mut Depot,
) -> Result<Json<ProductDetailResponse>, StatusError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;

    let product = state
        .app
        .products
        .get_product(id.into_inner().into())
        .await
        .map_err(into_status_error)?;

    Ok(Json(product.into()))
}

#[cfg(test)]
mod tests {
    use salvo::test::{ResponseExt, TestClient};
    use testresult::TestResult;

    use catalog_app::products::{MockProductsService, ProductsServiceError, models::ProductUuid};

    use crate::test_helpers::{make_product, products_service};

    use super::*;

    fn make_service(service: MockProductsService) -> Service {
        products_service(service, Router::with_path("products/{id}").get(handler))
    }

    #[tokio::test]
    async fn test_get_product_returns_detail() -> TestResult {
        let uuid = ProductUuid::new();
        let product = make_product(uuid, "Widget");

        let mut service = MockProductsService::new();

        service
            .expect_get_product()
            .once()
            .withf(move |id| *id == uuid)
            .return_once(move |_| Ok(product));

        service.expect_list_products().never();
        service.expect_create_product().never();
        service.expect_update_product().never();
        service.expect_delete_product().never();

        let response: ProductDetailResponse =
            TestClient::get(format!("http://example.com/products/{uuid}"))
                .send(&make_service(service))
                .await
                .take_json()
                .await?;

        assert_eq!(response.id, uuid.into_uuid());
        assert_eq!(response.title, "Widget");
        assert_eq!(response.created_at, "1970-01-01T00:00:00Z");
        assert_eq!(response.deleted_at, None);

        Ok(())
    }

    #[tokio::test]
    async fn test_get_product_missing_returns_404() -> TestResult {
        let mut service = MockProductsService::new();

        service
            .expect_get_product()
            .once()
            .return_once(|_| Err(ProductsServiceError::NotFound));

        let res = TestClient::get(format!("http://example.com/products/{}", ProductUuid::new()))
            .send(&make_service(service))
            .await;

        assert_eq!(res.status_code, Some(StatusCode::NOT_FOUND));

        Ok(())
    }

    #[tokio::test]
    async fn test_get_product_malformed_id_returns_400() -> TestResult {
        let mut service = MockProductsService::new();

        service.expect_get_product().never();

        let res = TestClient::get("http://example.com/products/not-a-uuid")
            .send(&make_service(service))
            .await;

        assert_eq!(res.status_code, Some(StatusCode::BAD_REQUEST));

        Ok(())
    }
}
