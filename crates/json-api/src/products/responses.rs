//! Product response bodies.

use std::string::ToString;

use salvo::oapi::ToSchema;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use catalog_app::products::models::{Product, ProductSummary, ProductsPage};

/// Product as shown in listings.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct ProductListItemResponse {
    /// The unique identifier of the product
    pub id: Uuid,

    pub title: String,

    pub description: String,

    pub rating: f64,

    pub image: String,
}

impl From<ProductSummary> for ProductListItemResponse {
    fn from(product: ProductSummary) -> Self {
        Self {
            id: product.uuid.into(),
            title: product.title,
            description: product.description,
            rating: product.rating,
            image: product.image,
        }
    }
}

/// Full product, including lifecycle timestamps.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub(crate) struct ProductDetailResponse {
    /// The unique identifier of the product
    pub id: Uuid,

    pub title: String,

    pub description: String,

    pub rating: f64,

    pub image: String,

    /// The date and time the product was created
    pub created_at: String,

    /// The date and time the product was last updated
    pub updated_at: String,

    /// The date and time the product was deleted
    pub deleted_at: Option<String>,
}

impl From<Product> for ProductDetailResponse {
    fn from(product: Product) -> Self {
        Self {
            id: product.uuid.into(),
            title: product.title,
            description: product.description,
            rating: product.rating,
            image: product.image,
            created_at: product.created_at.to_string(),
            updated_at: product.updated_at.to_string(),
            deleted_at: product.deleted_at.as_ref().map(ToString::to_string),
        }
    }
}

/// A page of products.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct ProductsResponse {
    /// Products on this page
    pub items: Vec<ProductListItemResponse>,

    /// Matching products across all pages
    pub count: u64,
}

impl From<ProductsPage> for ProductsResponse {
    fn from(page: ProductsPage) -> Self {
        Self {
            items: page.items.into_iter().map(Into::into).collect(),
            count: page.count,
        }
    }
}

/// Product Created Response
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct ProductCreatedResponse {
    /// Created product id
    pub id: Uuid,
}
