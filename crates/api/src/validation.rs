//! Query-parameter validation for the product listing route.

use crate::error::{ApiError, FieldError};
use model::{
    core::identifiers::ObjectId,
    pagination::{
        cursor::{Boundary, PageDirection, SortMethod},
        request::PaginationRequest,
    },
};
use serde::Deserialize;

/// Raw query string of `GET /api/products`.
#[derive(Debug, Default, Clone, Deserialize)]
pub struct ProductQuery {
    #[serde(rename = "sortMethod")]
    pub sort_method: Option<String>,
    pub page: Option<String>,
    #[serde(rename = "sortKey")]
    pub sort_key: Option<String>,
    #[serde(rename = "uniqueKey")]
    pub unique_key: Option<String>,
    pub category: Option<String>,
    pub query: Option<String>,
    pub brand: Option<String>,
}

const INVALID_SORT_METHOD: &str = "Not a valid sort method";
const INVALID_PAGE: &str = "Not a valid page value";
const INVALID_UNIQUE_KEY: &str = "Not a valid unique key";
const EMPTY_QUERY: &str = "If query is provided it cannot be an empty string";
const MISSING_SORT_KEY: &str = "The sort key needs to be defined";
const NON_NUMERIC_SORT_KEY: &str = "The sort key needs to be a number when searching by price or text";
const INVALID_CATEGORY: &str = "Invalid category";

/// Only orderings with a keyset strategy are accepted.
fn parse_sort_method(raw: Option<&str>) -> Option<SortMethod> {
    match raw?.parse::<SortMethod>().ok()? {
        method @ (SortMethod::Text | SortMethod::PriceLowToHigh) => Some(method),
        SortMethod::PriceHighToLow | SortMethod::Date => None,
    }
}

/// Checks every parameter and reports all failures together.
pub fn validate(
    params: ProductQuery,
    categories: &[String],
) -> Result<PaginationRequest, ApiError> {
    let mut errors = Vec::new();

    let sort_method = parse_sort_method(params.sort_method.as_deref());
    if sort_method.is_none() {
        errors.push(FieldError::new("sortMethod", INVALID_SORT_METHOD));
    }

    let direction = params
        .page
        .as_deref()
        .and_then(|p| p.parse::<PageDirection>().ok());
    if direction.is_none() {
        errors.push(FieldError::new("page", INVALID_PAGE));
    }

    let anchor = params
        .unique_key
        .as_deref()
        .and_then(|k| k.parse::<ObjectId>().ok());
    if anchor.is_none() {
        errors.push(FieldError::new("uniqueKey", INVALID_UNIQUE_KEY));
    }

    let sort_key = match params.sort_key.as_deref() {
        None => {
            errors.push(FieldError::new("sortKey", MISSING_SORT_KEY));
            None
        }
        Some(raw) => match raw.trim().parse::<f64>() {
            Ok(key) if !key.is_nan() => Some(key),
            _ => {
                errors.push(FieldError::new("sortKey", NON_NUMERIC_SORT_KEY));
                None
            }
        },
    };

    if params.query.as_deref().is_some_and(|q| q.trim().is_empty()) {
        errors.push(FieldError::new("query", EMPTY_QUERY));
    }

    if let Some(category) = params.category.as_deref()
        && !categories.iter().any(|c| c == category)
    {
        errors.push(FieldError::new("category", INVALID_CATEGORY));
    }

    match (sort_method, direction, sort_key, anchor) {
        (Some(method), Some(direction), Some(key), Some(anchor)) if errors.is_empty() => {
            Ok(PaginationRequest::builder(method, direction)
                .boundary(Boundary::new(key, anchor))
                .query(params.query)
                .brand(params.brand.filter(|b| !b.is_empty()))
                .category(params.category)
                .build())
        }
        _ => Err(ApiError::Validation(errors)),
    }
}
