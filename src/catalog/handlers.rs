//! HTTP handlers for the product catalog

use axum::{
    Json,
    extract::{Path, State},
};
use serde::Serialize;

use crate::catalog::seed;
use crate::core::error::{ApiError, ApiResult};
use crate::core::policy;
use crate::core::{Product, ProductCreate};
use crate::server::AppState;

/// List all products
///
/// GET /api/products
pub async fn list_products(State(state): State<AppState>) -> ApiResult<Json<Vec<Product>>> {
    let products = state.products.list(state.list_limit).await?;
    Ok(Json(products))
}

/// Get a single product by id
///
/// GET /api/products/{id}
pub async fn get_product(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> ApiResult<Json<Product>> {
    state
        .products
        .get(&id)
        .await?
        .map(Json)
        .ok_or(ApiError::NotFound("Product not found"))
}

/// List products in one category (exact match, possibly empty)
///
/// GET /api/products/category/{category}
pub async fn list_by_category(
    State(state): State<AppState>,
    Path(category): Path<String>,
) -> ApiResult<Json<Vec<Product>>> {
    let products = state
        .products
        .list_by_category(&category, state.list_limit)
        .await?;

    Ok(Json(products))
}

/// Create a product
///
/// POST /api/products
///
/// The server assigns `id` and `created_at` and returns the full created
/// document.
pub async fn create_product(
    State(state): State<AppState>,
    Json(payload): Json<ProductCreate>,
) -> ApiResult<Json<Product>> {
    policy::check(&payload)?;

    let product = state.products.create(Product::new(payload)).await?;
    Ok(Json(product))
}

/// Response body for `POST /api/init-data`.
#[derive(Debug, Serialize)]
pub struct InitDataResponse {
    pub message: &'static str,
}

/// Seed the sample catalog
///
/// POST /api/init-data
///
/// One-time bootstrap: writes nothing when any product already exists.
pub async fn init_data(State(state): State<AppState>) -> ApiResult<Json<InitDataResponse>> {
    if state.products.count().await? > 0 {
        return Ok(Json(InitDataResponse {
            message: "Sample data already exists",
        }));
    }

    let products = seed::sample_products();
    let seeded = products.len();
    state.products.create_many(products).await?;

    tracing::info!("Seeded sample catalog with {seeded} products");

    Ok(Json(InitDataResponse {
        message: "Sample data initialized successfully",
    }))
}
