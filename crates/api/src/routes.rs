use crate::{
    error::ApiError,
    state::AppState,
    validation::{ProductQuery, validate},
};
use axum::{
    Json,
    extract::{Query, State},
    http::StatusCode,
    response::IntoResponse,
};
use model::{catalog::item::Item, pagination::cursor::SortMethod};
use serde::Serialize;
use std::sync::Arc;

#[derive(Debug, Serialize)]
pub struct ProductsResponse {
    pub products: Vec<Item>,
    /// Relevance of each product, present for text sorting only.
    #[serde(rename = "textScore", skip_serializing_if = "Option::is_none")]
    pub text_score: Option<Vec<f64>>,
}

pub async fn products_handler(
    State(state): State<Arc<AppState>>,
    Query(params): Query<ProductQuery>,
) -> Result<Json<ProductsResponse>, ApiError> {
    let categories = state.repository.categories().await?;
    let request = validate(params, &categories)?;

    let page = state.repository.paginate(&request).await?;
    let text_score = (request.sort_method == SortMethod::Text).then_some(page.ordering_keys);

    Ok(Json(ProductsResponse {
        products: page.items,
        text_score,
    }))
}

pub async fn scale_handler() -> impl IntoResponse {
    (StatusCode::OK, "Pinged").into_response()
}
