//! Create Product Handler

use std::sync::Arc;

use salvo::{http::header::LOCATION, oapi::extract::JsonBody, prelude::*};

use crate::{
    extensions::*,
    products::{
        errors::into_status_error, requests::ProductRequest, responses::ProductCreatedResponse,
    },
    state::State,
};

/// Create Product Handler
#[endpoint(
    tags("products"),
    summary = "Create Product",
    responses(
        (status_code = StatusCode::CREATED, description = "Product created"),
        (status_code = StatusCode::BAD_REQUEST, description = "Malformed body or product already exists"),
        (status_code = StatusCode::UNPROCESSABLE_ENTITY, description = "Missing title or description"),
        (status_code = StatusCode::INTERNAL_SERVER_ERROR, description = "Internal Server Error"),
    ),
)]
pub(crate) async fn handler(
    json: JsonBody<ProductRequest>,
    depot: &mut Depot,
    res: &mut Response,
) -> Result<Json<ProductCreatedResponse>, StatusError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;
    let product = json.into_inner().into_new_product()?;

    let uuid = state
        .app
        .products
        .create_product(product)
        .await
        .map_err(into_status_error)?
        .uuid;

    res.add_header(LOCATION, format!("/products/{uuid}"), true)
        .or_500("failed to set location header")?
        .status_code(StatusCode::CREATED);

    Ok(Json(ProductCreatedResponse { id: uuid.into() }))
}
