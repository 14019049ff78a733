//! Products service.

use async_trait::async_trait;
use mockall::automock;
use sqlx::PgPool;
use tracing::{error, info, warn};

use crate::products::{
    errors::{ProductsRepositoryError, ProductsServiceError},
    models::{NewProduct, Product, ProductUpdate, ProductUuid, ProductsPage, ProductsQuery},
    repository::{PgProductsRepository, ProductsRepository},
};

/// Product use cases over any [`ProductsRepository`].
#[derive(Debug, Clone)]
pub struct CatalogProductsService<R = PgProductsRepository> {
    repository: R,
}

impl CatalogProductsService {
    #[must_use]
    pub fn new(pool: PgPool) -> Self {
        Self::with_repository(PgProductsRepository::new(pool))
    }
}

impl<R: ProductsRepository> CatalogProductsService<R> {
    #[must_use]
    pub fn with_repository(repository: R) -> Self {
        Self { repository }
    }

    /// Look for a live product holding `title`.
    ///
    /// A failed lookup counts as "no such product": the partial unique index
    /// on `LOWER(title)` still rejects a duplicate at write time.
    async fn find_by_title(&self, title: &str) -> Option<Product> {
        match self.repository.get_product_by_title(title.to_owned()).await {
            Ok(product) => Some(product),
            Err(ProductsRepositoryError::NotFound) => None,
            Err(source) => {
                warn!(title, "title lookup failed, assuming no conflict: {source}");

                None
            }
        }
    }

    /// Live product with `uuid`. Deleted rows count as missing.
    async fn find_by_uuid(&self, uuid: ProductUuid) -> Result<Product, ProductsServiceError> {
        let product = self.repository.get_product(uuid).await.map_err(|source| {
            if !matches!(source, ProductsRepositoryError::NotFound) {
                error!(product_uuid = %uuid, "failed to get product: {source}");
            }

            ProductsServiceError::NotFound
        })?;

        if product.is_deleted() {
            return Err(ProductsServiceError::NotFound);
        }

        Ok(product)
    }
}

fn log_write_failure(action: &str, error: &ProductsServiceError) {
    match error {
        ProductsServiceError::Internal(source) => error!("failed to {action} product: {source}"),
        ProductsServiceError::AlreadyExists | ProductsServiceError::NotFound => {
            warn!("could not {action} product: {error}");
        }
    }
}

#[async_trait]
impl<R: ProductsRepository> ProductsService for CatalogProductsService<R> {
    async fn list_products(
        &self,
        query: ProductsQuery,
    ) -> Result<ProductsPage, ProductsServiceError> {
        let (products, count) = self.repository.list_products(query).await.map_err(|source| {
            error!("failed to list products: {source}");

            ProductsServiceError::Internal(source)
        })?;

        Ok(ProductsPage {
            items: products.into_iter().map(Into::into).collect(),
            count,
        })
    }

    async fn get_product(&self, uuid: ProductUuid) -> Result<Product, ProductsServiceError> {
        self.find_by_uuid(uuid).await
    }

    async fn create_product(&self, product: NewProduct) -> Result<Product, ProductsServiceError> {
        if self.find_by_title(&product.title).await.is_some() {
            warn!(title = %product.title, "product already exists");

            return Err(ProductsServiceError::AlreadyExists);
        }

        let created = self
            .repository
            .create_product(product)
            .await
            .map_err(ProductsServiceError::from)
            .inspect_err(|error| log_write_failure("create", error))?;

        info!(product_uuid = %created.uuid, "created product");

        Ok(created)
    }

    async fn update_product(
        &self,
        uuid: ProductUuid,
        update: ProductUpdate,
    ) -> Result<Product, ProductsServiceError> {
        let mut product = self.find_by_uuid(uuid).await?;

        if !product.has_title(&update.title) && self.find_by_title(&update.title).await.is_some() {
            warn!(product_uuid = %uuid, title = %update.title, "product title already exists");

            return Err(ProductsServiceError::AlreadyExists);
        }

        product.apply(update);

        let updated = self
            .repository
            .update_product(product)
            .await
            .map_err(ProductsServiceError::from)
            .inspect_err(|error| log_write_failure("update", error))?;

        info!(product_uuid = %uuid, "updated product");

        Ok(updated)
    }

    async fn delete_product(&self, uuid: ProductUuid) -> Result<(), ProductsServiceError> {
        self.find_by_uuid(uuid).await?;

        self.repository
            .delete_product(uuid)
            .await
            .map_err(ProductsServiceError::from)
            .inspect_err(|error| log_write_failure("delete", error))?;

        info!(product_uuid = %uuid, "deleted product");

        Ok(())
    }
}

#[automock]
#[async_trait]
pub trait ProductsService: Send + Sync {
    /// Retrieves one filtered page of products and the total match count.
    async fn list_products(&self, query: ProductsQuery)
    -> Result<ProductsPage, ProductsServiceError>;

    /// Retrieve a single product.
    async fn get_product(&self, uuid: ProductUuid) -> Result<Product, ProductsServiceError>;

    /// Creates a new product, rejecting titles already in use.
    async fn create_product(&self, product: NewProduct) -> Result<Product, ProductsServiceError>;

    /// Overwrites a product's editable fields, rejecting titles held by another product.
    async fn update_product(
        &self,
        uuid: ProductUuid,
        update: ProductUpdate,
    ) -> Result<Product, ProductsServiceError>;

    /// Soft-deletes a product with the given UUID.
    async fn delete_product(&self, uuid: ProductUuid) -> Result<(), ProductsServiceError>;
}
