//! Order entity, embedded order items and the creation payload

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

/// Line item embedded in an order.
///
/// `product_name`, `price` and `image_url` are denormalized copies captured
/// at order time, so later catalog changes don't rewrite order history.
/// `product_id` is not checked against the catalog; dangling references
/// are permitted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OrderItem {
    pub product_id: String,
    pub product_name: String,
    pub quantity: i64,
    pub price: f64,
    pub image_url: String,
}

/// An order as stored and served.
///
/// `total_amount` is client-supplied and stored as-is, not recomputed from
/// the items. `status` starts at `"pending"` and is never transitioned by
/// any endpoint.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Order {
    pub id: String,
    pub items: Vec<OrderItem>,
    pub total_amount: f64,
    pub customer_name: String,
    pub customer_phone: String,
    pub customer_address: String,
    pub status: String,
    pub created_at: DateTime<Utc>,
}

/// Payload accepted by `POST /api/orders`.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct OrderCreate {
    pub items: Vec<OrderItem>,
    pub total_amount: f64,
    pub customer_name: String,
    pub customer_phone: String,
    pub customer_address: String,
}

impl Order {
    /// Build an order from its creation payload, assigning the id, the
    /// `"pending"` status and the creation timestamp server-side.
    pub fn new(payload: OrderCreate) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            items: payload.items,
            total_amount: payload.total_amount,
            customer_name: payload.customer_name,
            customer_phone: payload.customer_phone,
            customer_address: payload.customer_address,
            status: "pending".to_string(),
            created_at: Utc::now(),
        }
    }
}
