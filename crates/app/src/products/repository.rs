//! Products Repository

use async_trait::async_trait;
use jiff_sqlx::Timestamp as SqlxTimestamp;
use mockall::automock;
use sqlx::{FromRow, PgPool, Postgres, Row, postgres::PgRow, query, query_as, query_scalar};

use crate::products::{
    errors::ProductsRepositoryError,
    models::{NewProduct, Product, ProductUuid, ProductsQuery},
};

const LIST_PRODUCTS_SQL: &str = include_str!("sql/list_products.sql");
const COUNT_PRODUCTS_SQL: &str = include_str!("sql/count_products.sql");
const GET_PRODUCT_SQL: &str = include_str!("sql/get_product.sql");
const GET_PRODUCT_BY_TITLE_SQL: &str = include_str!("sql/get_product_by_title.sql");
const CREATE_PRODUCT_SQL: &str = include_str!("sql/create_product.sql");
const UPDATE_PRODUCT_SQL: &str = include_str!("sql/update_product.sql");
const DELETE_PRODUCT_SQL: &str = include_str!("sql/delete_product.sql");

#[automock]
#[async_trait]
pub trait ProductsRepository: Send + Sync {
    /// One page of live products matching the query, plus the total number of
    /// matches ignoring pagination.
    async fn list_products(
        &self,
        query: ProductsQuery,
    ) -> Result<(Vec<Product>, u64), ProductsRepositoryError>;

    /// A live product by id.
    async fn get_product(&self, uuid: ProductUuid) -> Result<Product, ProductsRepositoryError>;

    /// A live product whose title equals `title`, ignoring case.
    async fn get_product_by_title(&self, title: String)
    -> Result<Product, ProductsRepositoryError>;

    /// Insert a product under a freshly generated id.
    async fn create_product(&self, product: NewProduct)
    -> Result<Product, ProductsRepositoryError>;

    /// Overwrite the mutable fields of a live product, keyed by its id.
    async fn update_product(&self, product: Product) -> Result<Product, ProductsRepositoryError>;

    /// Mark a live product as deleted.
    async fn delete_product(&self, uuid: ProductUuid) -> Result<(), ProductsRepositoryError>;
}

#[derive(Debug, Clone)]
pub struct PgProductsRepository {
    pool: PgPool,
}

impl PgProductsRepository {
    #[must_use]
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl ProductsRepository for PgProductsRepository {
    async fn list_products(
        &self,
        query: ProductsQuery,
    ) -> Result<(Vec<Product>, u64), ProductsRepositoryError> {
        let title = query.title.as_deref().map(contains_pattern);

        let count: i64 = query_scalar(COUNT_PRODUCTS_SQL)
            .bind(title.as_deref())
            .bind(query.rating)
            .fetch_one(&self.pool)
            .await?;

        let products = query_as::<Postgres, Product>(LIST_PRODUCTS_SQL)
            .bind(title.as_deref())
            .bind(query.rating)
            .bind(i64::from(query.pagination.limit))
            .bind(query.pagination.offset())
            .fetch_all(&self.pool)
            .await?;

        Ok((products, u64::try_from(count).unwrap_or_default()))
    }

    async fn get_product(&self, uuid: ProductUuid) -> Result<Product, ProductsRepositoryError> {
        query_as::<Postgres, Product>(GET_PRODUCT_SQL)
            .bind(uuid.into_uuid())
            .fetch_one(&self.pool)
            .await
            .map_err(Into::into)
    }

    async fn get_product_by_title(
        &self,
        title: String,
    ) -> Result<Product, ProductsRepositoryError> {
        query_as::<Postgres, Product>(GET_PRODUCT_BY_TITLE_SQL)
            .bind(title)
            .fetch_one(&self.pool)
            .await
            .map_err(Into::into)
    }

    async fn create_product(
        &self,
        product: NewProduct,
    ) -> Result<Product, ProductsRepositoryError> {
        query_as::<Postgres, Product>(CREATE_PRODUCT_SQL)
            .bind(ProductUuid::new().into_uuid())
            .bind(product.title)
            .bind(product.description)
            .bind(product.rating)
            .bind(product.image)
            .fetch_one(&self.pool)
            .await
            .map_err(Into::into)
    }

    async fn update_product(&self, product: Product) -> Result<Product, ProductsRepositoryError> {
        query_as::<Postgres, Product>(UPDATE_PRODUCT_SQL)
            .bind(product.uuid.into_uuid())
            .bind(product.title)
            .bind(product.description)
            .bind(product.rating)
            .bind(product.image)
            .fetch_one(&self.pool)
            .await
            .map_err(Into::into)
    }

    async fn delete_product(&self, uuid: ProductUuid) -> Result<(), ProductsRepositoryError> {
        let result = query(DELETE_PRODUCT_SQL)
            .bind(uuid.into_uuid())
            .execute(&self.pool)
            .await?;

        if result.rows_affected() == 0 {
            return Err(ProductsRepositoryError::NotFound);
        }

        Ok(())
    }
}

impl<'r> FromRow<'r, PgRow> for Product {
    fn from_row(row: &'r PgRow) -> sqlx::Result<Self> {
        Ok(Self {
            uuid: ProductUuid::from_uuid(row.try_get("uuid")?),
            title: row.try_get("title")?,
            description: row.try_get("description")?,
            rating: row.try_get("rating")?,
            image: row.try_get("image")?,
            created_at: row.try_get::<SqlxTimestamp, _>("created_at")?.to_jiff(),
            updated_at: row.try_get::<SqlxTimestamp, _>("updated_at")?.to_jiff(),
            deleted_at: row
                .try_get::<Option<SqlxTimestamp>, _>("deleted_at")?
                .map(SqlxTimestamp::to_jiff),
        })
    }
}

/// `ILIKE` pattern matching `fragment` anywhere, with wildcards in the
/// fragment itself taken literally.
fn contains_pattern(fragment: &str) -> String {
    let mut pattern = String::with_capacity(fragment.len() + 2);

    pattern.push('%');

    for c in fragment.chars() {
        if matches!(c, '%' | '_' | '\\') {
            pattern.push('\\');
        }

        pattern.push(c);
    }

    pattern.push('%');

    pattern
}
