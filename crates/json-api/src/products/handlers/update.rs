//! Update Product Handler

use std::sync::Arc;

use salvo::{
    http::header::LOCATION,
    oapi::extract::{JsonBody, PathParam},
    prelude::*,
};
use uuid::Uuid;

use crate::{
    extensions::*,
    products::{
        errors::into_status_error, requests::ProductRequest, responses::ProductDetailResponse,
    },
    state::State,
};

/// Product Update Handler
///
/// Replaces every editable field of the product.
#[endpoint(
    tags("products"),
    summary = "Update Product",
    responses(
        (status_code = StatusCode::OK, description = "Product updated"),
        (status_code = StatusCode::NOT_FOUND, description = "Product not found"),
        (status_code = StatusCode::BAD_REQUEST, description = "Malformed body or title taken"),
        (status_code = StatusCode::UNPROCESSABLE_ENTITY, description = "Missing title or description"),
        (status_code = StatusCode::INTERNAL_SERVER_ERROR, description = "Internal Server Error"),
    ),
)]
#[tracing::instrument(
    name = "products.update",
    skip(id, json, depot, res),
    fields(product_uuid = tracing::field::Empty),
    err
)]
pub(crate) async fn handler(
    id: PathParam<Uuid>,
    json: JsonBody<ProductRequest>,
    depot: &mut Depot,
    res: &mut Response,
) -> Result<Json<ProductDetailResponse>, StatusError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;
    let id = id.into_inner();

    tracing::Span::current().record("product_uuid", tracing::field::display(id));

    let update = json.into_inner().into_update()?;

    let product = state
        .app
        .products
        .update_product(id.into(), update)
        .await
        .map_err(into_status_error)?;

    res.add_header(LOCATION, format!("/products/{id}"), true)
        .or_500("failed to set location header")?
        .status_code(StatusCode::OK);

    Ok(Json(product.into()))
}
