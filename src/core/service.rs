//! Store service traits for the two collections
//!
//! Implementations provide the document-store operations the handlers
//! need. The handlers are agnostic to the underlying storage mechanism:
//! production uses MongoDB, tests use the in-memory backend.

use crate::core::{Order, Product};
use anyhow::Result;
use async_trait::async_trait;

/// Store operations over the `products` collection.
#[async_trait]
pub trait ProductService: Send + Sync {
    /// Insert a new product.
    async fn create(&self, product: Product) -> Result<Product>;

    /// Get a product by id.
    ///
    /// Returns `Ok(None)` when no document has that id.
    async fn get(&self, id: &str) -> Result<Option<Product>>;

    /// List products in the store's natural retrieval order, up to `limit`.
    async fn list(&self, limit: usize) -> Result<Vec<Product>>;

    /// List products whose category matches exactly (case-sensitive as
    /// stored), up to `limit`.
    async fn list_by_category(&self, category: &str, limit: usize) -> Result<Vec<Product>>;

    /// List products where `name`, `description` or `category` contains
    /// `query` as a case-insensitive substring, up to `limit`.
    ///
    /// The empty query matches every product.
    async fn search(&self, query: &str, limit: usize) -> Result<Vec<Product>>;

    /// Number of products in the collection.
    async fn count(&self) -> Result<u64>;

    /// Insert a batch of products.
    async fn create_many(&self, products: Vec<Product>) -> Result<()>;
}

/// Store operations over the `orders` collection.
#[async_trait]
pub trait OrderService: Send + Sync {
    /// Insert a new order.
    async fn create(&self, order: Order) -> Result<Order>;

    /// Get an order by id.
    ///
    /// Returns `Ok(None)` when no document has that id.
    async fn get(&self, id: &str) -> Result<Option<Order>>;

    /// List orders in the store's natural retrieval order, up to `limit`.
    async fn list(&self, limit: usize) -> Result<Vec<Order>>;
}
