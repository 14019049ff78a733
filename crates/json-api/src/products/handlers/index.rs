//! Product Index Handler

use std::sync::Arc;

use salvo::{oapi::extract::QueryParam, prelude::*};

use crate::{
    extensions::*,
    products::{errors::into_status_error, query::ListParams, responses::ProductsResponse},
    state::State,
};

/// Product Index Handler
///
/// Returns a page of products, optionally filtered by title substring or
/// exact rating, together with the total number of matches.
#[endpoint(
    tags("products"),
    summary = "List Products",
    responses(
        (status_code = StatusCode::OK, description = "Products page"),
        (status_code = StatusCode::BAD_REQUEST, description = "Unparsable query parameter"),
        (status_code = StatusCode::INTERNAL_SERVER_ERROR, description = "Internal Server Error"),
    ),
)]
pub(crate) async fn handler(
    page: QueryParam<String, false>,
    limit: QueryParam<String, false>,
    title: QueryParam<String, false>,
    rating: QueryParam<String, false>,
    depot: &mut Depot,
) -> Result<Json<ProductsResponse>, StatusError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;

    let query = ListParams {
        page: page.into_inner(),
        limit: limit.into_inner(),
        title: title.into_inner(),
        rating: rating.into_inner(),
    }
    .into_query()?;

    let page = state
        .app
        .products
        .list_products(query)
        .await
        .map_err(into_status_error)?;

    Ok(Json(page.into()))
}

#[cfg(test)]
mod tests {
    use salvo::test::{ResponseExt, TestClient};
    use testresult::TestResult;

    use catalog_app::products::{
        MockProductsService,
        models::{Pagination, ProductSummary, ProductUuid, ProductsPage, ProductsQuery},
    };

    use crate::test_helpers::{internal_error, make_product, products_service};

    use super::*;

    fn make_service(service: MockProductsService) -> Service {
        products_service(service, Router::with_path("products").get(handler))
    }

    fn empty_page() -> ProductsPage {
        ProductsPage {
            items: vec![],
            count: 0,
        }
    }

    #[tokio::test]
    async fn test_index_uses_default_pagination() -> TestResult {
        let mut service = MockProductsService::new();

        service
            .expect_list_products()
            .once()
            .withf(|query| {
                *query
                    == ProductsQuery {
                        pagination: Pagination { page: 1, limit: 10 },
                        title: None,
                        rating: None,
                    }
            })
            .return_once(|_| Ok(empty_page()));

        service.expect_get_product().never();
        service.expect_create_product().never();
        service.expect_update_product().never();
        service.expect_delete_product().never();

        let response: ProductsResponse = TestClient::get("http://example.com/products")
            .send(&make_service(service))
            .await
            .take_json()
            .await?;

        assert!(response.items.is_empty());
        assert_eq!(response.count, 0);

        Ok(())
    }

    #[tokio::test]
    async fn test_index_forwards_filters_and_clamps_limit() -> TestResult {
        let mut service = MockProductsService::new();

        service
            .expect_list_products()
            .once()
            .withf(|query| {
                *query
                    == ProductsQuery {
                        pagination: Pagination { page: 3, limit: 30 },
                        title: Some("wid".to_string()),
                        rating: Some(4.5),
                    }
            })
            .return_once(|_| Ok(empty_page()));

        let res = TestClient::get(
            "http://example.com/products?page=3&limit=100&title=wid&rating=4.5",
        )
        .send(&make_service(service))
        .await;

        assert_eq!(res.status_code, Some(StatusCode::OK));

        Ok(())
    }

    #[tokio::test]
    async fn test_index_returns_items_and_total_count() -> TestResult {
        let uuid_a = ProductUuid::new();
        let uuid_b = ProductUuid::new();

        let mut service = MockProductsService::new();

        service.expect_list_products().once().return_once(move |_| {
            Ok(ProductsPage {
                items: vec![
                    ProductSummary::from(make_product(uuid_a, "Anvil")),
                    ProductSummary::from(make_product(uuid_b, "Bucket")),
                ],
                count: 12,
            })
        });

        let response: ProductsResponse = TestClient::get("http://example.com/products?limit=2")
            .send(&make_service(service))
            .await
            .take_json()
            .await?;

        assert_eq!(response.items.len(), 2, "expected two products");
        assert_eq!(response.items[0].id, uuid_a.into_uuid());
        assert_eq!(response.items[1].title, "Bucket");
        assert_eq!(response.count, 12);

        Ok(())
    }

    #[tokio::test]
    async fn test_index_rejects_unparsable_page() -> TestResult {
        let mut service = MockProductsService::new();

        service.expect_list_products().never();

        let res = TestClient::get("http://example.com/products?page=first")
            .send(&make_service(service))
            .await;

        assert_eq!(res.status_code, Some(StatusCode::BAD_REQUEST));

        Ok(())
    }

    #[tokio::test]
    async fn test_index_service_error_returns_500() -> TestResult {
        let mut service = MockProductsService::new();

        service
            .expect_list_products()
            .once()
            .return_once(|_| Err(internal_error()));

        let res = TestClient::get("http://example.com/products")
            .send(&make_service(service))
            .await;

        assert_eq!(res.status_code, Some(StatusCode::INTERNAL_SERVER_ERROR));

        Ok(())
    }
}
