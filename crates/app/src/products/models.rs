//! Product Models

use jiff::Timestamp;

use crate::uuids::TypedUuid;

/// Product UUID
pub type ProductUuid = TypedUuid<Product>;

/// Product Model
#[derive(Debug, Clone, PartialEq)]
pub struct Product {
    pub uuid: ProductUuid,
    pub title: String,
    pub description: String,
    pub rating: f64,
    pub image: String,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
    pub deleted_at: Option<Timestamp>,
}

impl Product {
    /// Whether the product has been soft-deleted.
    pub fn is_deleted(&self) -> bool {
        self.deleted_at.is_some()
    }

    /// Case-insensitive title comparison, as used by the uniqueness rule.
    pub fn has_title(&self, title: &str) -> bool {
        titles_match(&self.title, title)
    }

    /// Overwrite every caller-editable field. Identity and timestamps stay.
    pub fn apply(&mut self, update: ProductUpdate) {
        self.title = update.title;
        self.description = update.description;
        self.rating = update.rating;
        self.image = update.image;
    }
}

/// New Product Model
#[derive(Debug, Clone, PartialEq)]
pub struct NewProduct {
    pub title: String,
    pub description: String,
    pub rating: f64,
    pub image: String,
}

/// Product Update Model
#[derive(Debug, Clone, PartialEq)]
pub struct ProductUpdate {
    pub title: String,
    pub description: String,
    pub rating: f64,
    pub image: String,
}

/// List projection of a product: no timestamps.
#[derive(Debug, Clone, PartialEq)]
pub struct ProductSummary {
    pub uuid: ProductUuid,
    pub title: String,
    pub description: String,
    pub rating: f64,
    pub image: String,
}

impl From<Product> for ProductSummary {
    fn from(product: Product) -> Self {
        Self {
            uuid: product.uuid,
            title: product.title,
            description: product.description,
            rating: product.rating,
            image: product.image,
        }
    }
}

/// One page of products plus the number of matches across all pages.
#[derive(Debug, Clone, PartialEq)]
pub struct ProductsPage {
    pub items: Vec<ProductSummary>,
    pub count: u64,
}

/// Page position. `page` is 1-based.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Pagination {
    pub page: u32,
    pub limit: u32,
}

impl Pagination {
    /// Rows to skip before this page starts.
    pub fn offset(&self) -> i64 {
        i64::from(self.page.saturating_sub(1)).saturating_mul(i64::from(self.limit))
    }
}

/// Filtered, paginated product listing request.
#[derive(Debug, Clone, PartialEq)]
pub struct ProductsQuery {
    pub pagination: Pagination,

    /// Case-insensitive substring of the title.
    pub title: Option<String>,

    /// Exact rating.
    pub rating: Option<f64>,
}

pub(crate) fn titles_match(left: &str, right: &str) -> bool {
    left.to_lowercase() == right.to_lowercase()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn widget() -> Product {
        Product {
            uuid: ProductUuid::new(),
            title: "Widget".to_string(),
            description: "d".to_string(),
            rating: 4.5,
            image: "widget.png".to_string(),
            created_at: Timestamp::UNIX_EPOCH,
            updated_at: Timestamp::UNIX_EPOCH,
            deleted_at: None,
        }
    }

    #[test]
    fn offset_is_zero_for_first_page() {
        let pagination = Pagination { page: 1, limit: 10 };

        assert_eq!(pagination.offset(), 0);
    }

    #[test]
    fn offset_skips_previous_pages() {
        let pagination = Pagination { page: 3, limit: 30 };

        assert_eq!(pagination.offset(), 60);
    }

    #[test]
    fn has_title_ignores_case() {
        let product = widget();

        assert!(product.has_title("WIDGET"));
        assert!(product.has_title("widget"));
        assert!(!product.has_title("Widgets"));
    }

    #[test]
    fn has_title_folds_non_ascii_case() {
        let mut product = widget();
        product.title = "Ölkanne".to_string();

        assert!(product.has_title("ÖLKANNE"));
    }

    #[test]
    fn apply_keeps_identity_and_timestamps() {
        let mut product = widget();
        let original = product.clone();

        product.apply(ProductUpdate {
            title: "Gadget".to_string(),
            description: "new".to_string(),
            rating: 1.0,
            image: String::new(),
        });

        assert_eq!(product.uuid, original.uuid);
        assert_eq!(product.created_at, original.created_at);
        assert_eq!(product.title, "Gadget");
        assert_eq!(product.description, "new");
        assert!(product.image.is_empty());
    }

    #[test]
    fn summary_drops_timestamps() {
        let product = widget();
        let uuid = product.uuid;

        let summary = ProductSummary::from(product);

        assert_eq!(summary.uuid, uuid);
        assert_eq!(summary.title, "Widget");
        assert!((summary.rating - 4.5).abs() < f64::EPSILON);
    }
}
