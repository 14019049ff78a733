//! Product request bodies.

use salvo::{oapi::ToSchema, prelude::StatusError};
use serde::{Deserialize, Serialize};

use catalog_app::products::models::{NewProduct, ProductUpdate};

/// Create or replace a product.
///
/// Missing `title` or `description` deserialize as empty so that they are
/// reported as validation failures rather than malformed JSON.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct ProductRequest {
    /// Product title, unique ignoring case
    #[serde(default)]
    pub title: String,

    /// Product description
    #[serde(default)]
    pub description: String,

    /// Product rating
    #[serde(default)]
    pub rating: f64,

    /// Image URL or path
    #[serde(default)]
    pub image: String,
}

impl ProductRequest {
    fn validate(&self) -> Result<(), StatusError> {
        require_present("title", &self.title)?;
        require_present("description", &self.description)
    }

    pub(crate) fn into_new_product(self) -> Result<NewProduct, StatusError> {
        self.validate()?;

        Ok(NewProduct {
            title: self.title,
            description: self.description,
            rating: self.rating,
            image: self.image,
        })
    }

    pub(crate) fn into_update(self) -> Result<ProductUpdate, StatusError> {
        self.validate()?;

        Ok(ProductUpdate {
            title: self.title,
            description: self.description,
            rating: self.rating,
            image: self.image,
        })
    }
}

fn require_present(field: &str, value: &str) -> Result<(), StatusError> {
    if value.trim().is_empty() {
        return Err(StatusError::unprocessable_entity().brief(format!("{field} is required")));
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use salvo::http::StatusCode;
    use testresult::TestResult;

    use super::*;

    fn request(title: &str, description: &str) -> ProductRequest {
        ProductRequest {
            title: title.to_string(),
            description: description.to_string(),
            rating: 0.0,
            image: String::new(),
        }
    }

    #[test]
    fn optional_fields_default() -> TestResult {
        let request: ProductRequest =
            serde_json::from_str(r#"{"title":"Widget","description":"d"}"#)?;

        let product = request.into_new_product()?;

        assert!(product.rating.abs() < f64::EPSILON);
        assert!(product.image.is_empty());

        Ok(())
    }

    #[test]
    fn blank_title_names_the_field() {
        let error = request("  ", "d").into_new_product().err();

        assert_eq!(error.as_ref().map(|e| e.code), Some(StatusCode::UNPROCESSABLE_ENTITY));
        assert_eq!(error.map(|e| e.brief), Some("title is required".to_string()));
    }

    #[test]
    fn missing_description_is_rejected_for_updates() {
        let error = request("Widget", "").into_update().err();

        assert_eq!(error.map(|e| e.brief), Some("description is required".to_string()));
    }
}
