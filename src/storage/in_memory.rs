//! In-memory store backends for testing and local development
//!
//! Both services keep documents in an `IndexMap`, so the "natural
//! retrieval order" of the store is deterministic insertion order. Uses
//! RwLock for thread-safe access.

use crate::core::{Order, OrderService, Product, ProductService};
use anyhow::{Result, anyhow};
use async_trait::async_trait;
use indexmap::IndexMap;
use std::sync::{Arc, RwLock};

/// In-memory product store.
#[derive(Clone)]
pub struct InMemoryProductService {
    products: Arc<RwLock<IndexMap<String, Product>>>,
}

impl InMemoryProductService {
    /// Create a new, empty in-memory product store
    pub fn new() -> Self {
        Self {
            products: Arc::new(RwLock::new(IndexMap::new())),
        }
    }
}

impl Default for InMemoryProductService {
    fn default() -> Self {
        Self::new()
    }
}

/// Case-insensitive substring match over the three searchable fields.
///
/// The empty query is a substring of every string, so it matches all.
fn matches_query(product: &Product, query: &str) -> bool {
    product.name.to_lowercase().contains(query)
        || product.description.to_lowercase().contains(query)
        || product.category.to_lowercase().contains(query)
}

#[async_trait]
impl ProductService for InMemoryProductService {
    async fn create(&self, product: Product) -> Result<Product> {
        let mut products = self
            .products
            .write()
            .map_err(|e| anyhow!("Failed to acquire write lock: {}", e))?;

        products.insert(product.id.clone(), product.clone());

        Ok(product)
    }

    async fn get(&self, id: &str) -> Result<Option<Product>> {
        let products = self
            .products
            .read()
            .map_err(|e| anyhow!("Failed to acquire read lock: {}", e))?;

        Ok(products.get(id).cloned())
    }

    async fn list(&self, limit: usize) -> Result<Vec<Product>> {
        let products = self
            .products
            .read()
            .map_err(|e| anyhow!("Failed to acquire read lock: {}", e))?;

        Ok(products.values().take(limit).cloned().collect())
    }

    async fn list_by_category(&self, category: &str, limit: usize) -> Result<Vec<Product>> {
        let products = self
            .products
            .read()
            .map_err(|e| anyhow!("Failed to acquire read lock: {}", e))?;

        Ok(products
            .values()
            .filter(|p| p.category == category)
            .take(limit)
            .cloned()
            .collect())
    }

    async fn search(&self, query: &str, limit: usize) -> Result<Vec<Product>> {
        let products = self
            .products
            .read()
            .map_err(|e| anyhow!("Failed to acquire read lock: {}", e))?;

        let query = query.to_lowercase();

        Ok(products
            .values()
            .filter(|p| matches_query(p, &query))
            .take(limit)
            .cloned()
            .collect())
    }

    async fn count(&self) -> Result<u64> {
        let products = self
            .products
            .read()
            .map_err(|e| anyhow!("Failed to acquire read lock: {}", e))?;

        Ok(products.len() as u64)
    }

    async fn create_many(&self, batch: Vec<Product>) -> Result<()> {
        let mut products = self
            .products
            .write()
            .map_err(|e| anyhow!("Failed to acquire write lock: {}", e))?;

        for product in batch {
            products.insert(product.id.clone(), product);
        }

        Ok(())
    }
}

/// In-memory order store.
#[derive(Clone)]
pub struct InMemoryOrderService {
    orders: Arc<RwLock<IndexMap<String, Order>>>,
}

impl InMemoryOrderService {
    /// Create a new, empty in-memory order store
    pub fn new() -> Self {
        Self {
            orders: Arc::new(RwLock::new(IndexMap::new())),
        }
    }
}

impl Default for InMemoryOrderService {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl OrderService for InMemoryOrderService {
    async fn create(&self, order: Order) -> Result<Order> {
        let mut orders = self
            .orders
            .write()
            .map_err(|e| anyhow!("Failed to acquire write lock: {}", e))?;

        orders.insert(order.id.clone(), order.clone());

        Ok(order)
    }

    async fn get(&self, id: &str) -> Result<Option<Order>> {
        let orders = self
            .orders
            .read()
            .map_err(|e| anyhow!("Failed to acquire read lock: {}", e))?;

        Ok(orders.get(id).cloned())
    }

    async fn list(&self, limit: usize) -> Result<Vec<Order>> {
        let orders = self
            .orders
            .read()
            .map_err(|e| anyhow!("Failed to acquire read lock: {}", e))?;

        Ok(orders.values().take(limit).cloned().collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{OrderCreate, OrderItem, ProductCreate};

    fn product(name: &str, description: &str, category: &str) -> Product {
        Product::new(ProductCreate {
            name: name.to_string(),
            description: description.to_string(),
            price: 9.99,
            category: category.to_string(),
            image_url: format!("https://example.com/{category}.jpg"),
            in_stock: true,
        })
    }

    #[tokio::test]
    async fn create_then_get_returns_the_product() {
        let service = InMemoryProductService::new();
        let created = service
            .create(product("Margherita Pizza", "Classic pizza", "pizza"))
            .await
            .unwrap();

        let fetched = service.get(&created.id).await.unwrap();
        assert_eq!(fetched, Some(created));
    }

    #[tokio::test]
    async fn get_unknown_id_returns_none() {
        let service = InMemoryProductService::new();
        assert!(service.get("no-such-id").await.unwrap().is_none());
    }

    #[tokio::test]
    async fn list_preserves_insertion_order_and_caps_at_limit() {
        let service = InMemoryProductService::new();
        for name in ["first", "second", "third"] {
            service
                .create(product(name, "d", "snacks"))
                .await
                .unwrap();
        }

        let all = service.list(1000).await.unwrap();
        let names: Vec<&str> = all.iter().map(|p| p.name.as_str()).collect();
        assert_eq!(names, ["first", "second", "third"]);

        let capped = service.list(2).await.unwrap();
        assert_eq!(capped.len(), 2);
        assert_eq!(capped[0].name, "first");
    }

    #[tokio::test]
    async fn category_filter_is_exact_and_case_sensitive() {
        let service = InMemoryProductService::new();
        service
            .create(product("Margherita Pizza", "d", "pizza"))
            .await
            .unwrap();
        service
            .create(product("Classic Burger", "d", "burger"))
            .await
            .unwrap();

        let pizzas = service.list_by_category("pizza", 1000).await.unwrap();
        assert_eq!(pizzas.len(), 1);
        assert_eq!(pizzas[0].category, "pizza");

        assert!(
            service
                .list_by_category("Pizza", 1000)
                .await
                .unwrap()
                .is_empty()
        );
    }

    #[tokio::test]
    async fn search_is_case_insensitive_across_fields() {
        let service = InMemoryProductService::new();
        service
            .create(product("Margherita Pizza", "with basil", "pizza"))
            .await
            .unwrap();
        service
            .create(product("Classic Burger", "juicy PIZZA-sized patty", "burger"))
            .await
            .unwrap();
        service
            .create(product("Fresh Bananas", "ripe", "groceries"))
            .await
            .unwrap();

        for query in ["pizza", "PIZZA", "Pizza"] {
            let hits = service.search(query, 1000).await.unwrap();
            assert_eq!(hits.len(), 2, "query {query:?}");
        }
    }

    #[tokio::test]
    async fn empty_query_matches_every_product() {
        let service = InMemoryProductService::new();
        service.create(product("a", "b", "c")).await.unwrap();
        service.create(product("d", "e", "f")).await.unwrap();

        assert_eq!(service.search("", 1000).await.unwrap().len(), 2);
    }

    #[tokio::test]
    async fn search_without_matches_returns_empty() {
        let service = InMemoryProductService::new();
        service
            .create(product("Margherita Pizza", "d", "pizza"))
            .await
            .unwrap();

        assert!(
            service
                .search("nonexistentfood123", 1000)
                .await
                .unwrap()
                .is_empty()
        );
    }

    #[tokio::test]
    async fn create_many_is_counted() {
        let service = InMemoryProductService::new();
        assert_eq!(service.count().await.unwrap(), 0);

        service
            .create_many(vec![
                product("a", "d", "snacks"),
                product("b", "d", "snacks"),
            ])
            .await
            .unwrap();

        assert_eq!(service.count().await.unwrap(), 2);
    }

    #[tokio::test]
    async fn order_create_then_get_and_list() {
        let service = InMemoryOrderService::new();
        let created = service
            .create(Order::new(OrderCreate {
                items: vec![OrderItem {
                    product_id: "p-1".to_string(),
                    product_name: "Chicken Biryani".to_string(),
                    quantity: 1,
                    price: 12.99,
                    image_url: "https://example.com/biryani.jpg".to_string(),
                }],
                total_amount: 12.99,
                customer_name: "Asha".to_string(),
                customer_phone: "555-0100".to_string(),
                customer_address: "12 Spice Lane".to_string(),
            }))
            .await
            .unwrap();

        let fetched = service.get(&created.id).await.unwrap();
        assert_eq!(fetched, Some(created));

        assert!(service.get("no-such-id").await.unwrap().is_none());
        assert_eq!(service.list(1000).await.unwrap().len(), 1);
    }
}
