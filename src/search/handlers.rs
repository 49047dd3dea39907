//! HTTP handler for product search

use axum::{
    Json,
    extract::{Query, State},
};
use serde::Deserialize;

use crate::core::Product;
use crate::core::error::ApiResult;
use crate::server::AppState;

/// Query parameters for `GET /api/search`.
#[derive(Debug, Deserialize)]
pub struct SearchParams {
    pub query: String,
}

/// Search products
///
/// GET /api/search?query=STR
///
/// Matches products whose `name`, `description` or `category` contains the
/// query as a case-insensitive substring. The empty query matches every
/// product; no ranking is applied.
pub async fn search_products(
    State(state): State<AppState>,
    Query(params): Query<SearchParams>,
) -> ApiResult<Json<Vec<Product>>> {
    let products = state.products.search(&params.query, state.list_limit).await?;
    Ok(Json(products))
}
