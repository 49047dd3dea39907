//! Product entity and its creation payload

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

/// A catalog product as stored and served.
///
/// `id` and `created_at` are assigned server-side at creation and never
/// change afterwards; there are no update or delete endpoints.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    pub id: String,
    pub name: String,
    pub description: String,
    pub price: f64,
    pub category: String,
    pub image_url: String,
    pub in_stock: bool,
    pub created_at: DateTime<Utc>,
}

/// Payload accepted by `POST /api/products`.
///
/// Field presence and types are enforced by deserialization; value
/// constraints are the validation policy's concern (see
/// [`crate::core::policy`]).
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct ProductCreate {
    pub name: String,
    pub description: String,
    pub price: f64,
    pub category: String,
    pub image_url: String,
    #[serde(default = "default_in_stock")]
    pub in_stock: bool,
}

fn default_in_stock() -> bool {
    true
}

impl Product {
    /// Build a product from its creation payload, assigning the id and
    /// creation timestamp server-side.
    pub fn new(payload: ProductCreate) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            name: payload.name,
            description: payload.description,
            price: payload.price,
            category: payload.category,
            image_url: payload.image_url,
            in_stock: payload.in_stock,
            created_at: Utc::now(),
        }
    }
}
