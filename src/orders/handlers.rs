//! HTTP handlers for order intake and lookup

use axum::{
    Json,
    extract::{Path, State},
};

use crate::core::error::{ApiError, ApiResult};
use crate::core::policy;
use crate::core::{Order, OrderCreate};
use crate::server::AppState;

/// Create an order
///
/// POST /api/orders
///
/// The server assigns `id`, the `"pending"` status and `created_at`, and
/// returns the full created document. Items and total are stored as
/// submitted.
pub async fn create_order(
    State(state): State<AppState>,
    Json(payload): Json<OrderCreate>,
) -> ApiResult<Json<Order>> {
    policy::check(&payload)?;

    let order = state.orders.create(Order::new(payload)).await?;
    Ok(Json(order))
}

/// List all orders
///
/// GET /api/orders
pub async fn list_orders(State(state): State<AppState>) -> ApiResult<Json<Vec<Order>>> {
    let orders = state.orders.list(state.list_limit).await?;
    Ok(Json(orders))
}

/// Get a single order by id
///
/// GET /api/orders/{id}
pub async fn get_order(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> ApiResult<Json<Order>> {
    state
        .orders
        .get(&id)
        .await?
        .map(Json)
        .ok_or(ApiError::NotFound("Order not found"))
}
