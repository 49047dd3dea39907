//! Application state shared across handlers

use std::sync::Arc;

use crate::core::{OrderService, ProductService};

/// Handler state: the injected store handles plus the list-result ceiling.
///
/// The stores are trait objects so handlers stay testable in isolation:
/// tests swap the in-memory backend in for the MongoDB one.
#[derive(Clone)]
pub struct AppState {
    pub products: Arc<dyn ProductService>,
    pub orders: Arc<dyn OrderService>,
    /// Maximum number of documents returned by any list or search call.
    pub list_limit: usize,
}

impl AppState {
    pub fn new(
        products: Arc<dyn ProductService>,
        orders: Arc<dyn OrderService>,
        list_limit: usize,
    ) -> Self {
        Self {
            products,
            orders,
            list_limit,
        }
    }
}
