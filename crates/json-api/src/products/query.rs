//! Product listing query parameters.

use std::str::FromStr;

use salvo::prelude::StatusError;

use catalog_app::products::models::{Pagination, ProductsQuery};

use crate::extensions::*;

pub(crate) const DEFAULT_PAGE: u32 = 1;
pub(crate) const DEFAULT_LIMIT: u32 = 10;
pub(crate) const MAX_LIMIT: u32 = 30;

/// Raw listing parameters as they arrive on the query string.
#[derive(Debug, Default)]
pub(crate) struct ListParams {
    pub page: Option<String>,
    pub limit: Option<String>,
    pub title: Option<String>,
    pub rating: Option<String>,
}

impl ListParams {
    /// Apply defaults and clamping. Unparsable numbers are a bad request.
    pub(crate) fn into_query(self) -> Result<ProductsQuery, StatusError> {
        let page = parse::<i64>(self.page)
            .or_400("could not parse \"page\" query parameter")?
            .filter(|page| *page > 0)
            .map_or(DEFAULT_PAGE, |page| u32::try_from(page).unwrap_or(u32::MAX));

        let limit = parse::<i64>(self.limit)
            .or_400("could not parse \"limit\" query parameter")?
            .filter(|limit| *limit > 0)
            .map_or(DEFAULT_LIMIT, |limit| {
                u32::try_from(limit).map_or(MAX_LIMIT, |limit| limit.min(MAX_LIMIT))
            });

        let rating = parse::<f64>(self.rating)
            .or_400("could not parse \"rating\" query parameter")?;

        if rating.is_some_and(|rating| !rating.is_finite()) {
            return Err(StatusError::bad_request().brief("\"rating\" must be a finite number"));
        }

        Ok(ProductsQuery {
            pagination: Pagination { page, limit },
            title: present(self.title),
            // Zero means "no rating filter".
            rating: rating.filter(|rating| rating.abs() > 0.0),
        })
    }
}

fn present(value: Option<String>) -> Option<String> {
    value.filter(|value| !value.trim().is_empty())
}

fn parse<T: FromStr>(value: Option<String>) -> Result<Option<T>, T::Err> {
    present(value).map(|value| value.trim().parse()).transpose()
}

#[cfg(test)]
mod tests {
    use salvo::http::StatusCode;
    use testresult::TestResult;

    use super::*;

    fn params(page: &str, limit: &str) -> ListParams {
        ListParams {
            page: Some(page.to_string()),
            limit: Some(limit.to_string()),
            ..ListParams::default()
        }
    }

    #[test]
    fn defaults_when_absent() -> TestResult {
        let query = ListParams::default().into_query()?;

        assert_eq!(query.pagination, Pagination { page: 1, limit: 10 });
        assert_eq!(query.title, None);
        assert_eq!(query.rating, None);

        Ok(())
    }

    #[test]
    fn non_positive_values_fall_back_to_defaults() -> TestResult {
        let query = params("0", "-5").into_query()?;

        assert_eq!(query.pagination, Pagination { page: 1, limit: 10 });

        Ok(())
    }

    #[test]
    fn limit_is_clamped() -> TestResult {
        let query = params("2", "500").into_query()?;

        assert_eq!(query.pagination, Pagination { page: 2, limit: 30 });
        assert_eq!(query.pagination.offset(), 30);

        Ok(())
    }

    #[test]
    fn zero_rating_is_no_filter() -> TestResult {
        let query = ListParams {
            rating: Some("0".to_string()),
            ..ListParams::default()
        }
        .into_query()?;

        assert_eq!(query.rating, None);

        Ok(())
    }

    #[test]
    fn blank_title_is_no_filter() -> TestResult {
        let query = ListParams {
            title: Some("  ".to_string()),
            ..ListParams::default()
        }
        .into_query()?;

        assert_eq!(query.title, None);

        Ok(())
    }

    #[test]
    fn garbage_page_is_bad_request() {
        let error = params("two", "10").into_query().err();

        assert_eq!(error.map(|e| e.code), Some(StatusCode::BAD_REQUEST));
    }

    #[test]
    fn non_finite_rating_is_bad_request() {
        let error = ListParams {
            rating: Some("NaN".to_string()),
            ..ListParams::default()
        }
        .into_query()
        .err();

        assert_eq!(error.map(|e| e.code), Some(StatusCode::BAD_REQUEST));
    }
}
