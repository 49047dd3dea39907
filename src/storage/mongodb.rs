//! MongoDB storage backend using the official MongoDB async driver.
//!
//! Provides `MongoProductService` and `MongoOrderService` backed by a
//! MongoDB database via `mongodb::Database`, with a collection per entity
//! type (`products`, `orders`).
//!
//! # Serialization strategy
//!
//! Entities are serialized via `serde_json::Value` as an intermediate
//! format, then converted to BSON documents. This ensures consistent
//! handling of UUID (stored as strings) and DateTime (stored as ISO 8601
//! strings) types. The `id` field is mapped to MongoDB's `_id` convention,
//! so the store's primary-key index enforces id uniqueness.
//!
//! # Search
//!
//! Substring search builds a case-insensitive `$regex` from the
//! regex-escaped query, so metacharacters in user input match literally.

use crate::core::{Order, OrderService, Product, ProductService};
use anyhow::{Result, anyhow};
use async_trait::async_trait;
use futures::TryStreamExt;
use mongodb::Database;
use mongodb::bson::{Bson, Document, Regex, doc};
use serde::Serialize;
use serde::de::DeserializeOwned;

const PRODUCTS: &str = "products";
const ORDERS: &str = "orders";

// ---------------------------------------------------------------------------
// Conversion helpers
// ---------------------------------------------------------------------------

/// Convert an entity into a BSON Document via serde_json,
/// renaming `id` → `_id` for MongoDB convention.
fn to_document<T: Serialize>(entity: &T) -> Result<Document> {
    let json =
        serde_json::to_value(entity).map_err(|e| anyhow!("Failed to serialize entity: {}", e))?;

    let bson_val = mongodb::bson::to_bson(&json)
        .map_err(|e| anyhow!("Failed to convert JSON to BSON: {}", e))?;

    let mut doc = match bson_val {
        Bson::Document(d) => d,
        _ => return Err(anyhow!("Expected BSON document, got non-object")),
    };

    if let Some(id) = doc.remove("id") {
        doc.insert("_id", id);
    }

    Ok(doc)
}

/// Convert a BSON Document back into an entity,
/// renaming `_id` → `id` for domain convention.
fn from_document<T: DeserializeOwned>(mut doc: Document) -> Result<T> {
    if let Some(id) = doc.remove("_id") {
        doc.insert("id", id);
    }

    let json = Bson::Document(doc).into_relaxed_extjson();
    serde_json::from_value(json)
        .map_err(|e| anyhow!("Failed to deserialize entity from document: {}", e))
}

/// Case-insensitive literal-substring regex for a user query.
fn contains_ci(query: &str) -> Bson {
    Bson::RegularExpression(Regex {
        pattern: regex::escape(query),
        options: String::from("i"),
    })
}

// ---------------------------------------------------------------------------
// MongoProductService
// ---------------------------------------------------------------------------

/// Product store backed by the `products` collection.
#[derive(Clone, Debug)]
pub struct MongoProductService {
    database: Database,
}

impl MongoProductService {
    /// Create a new `MongoProductService` with the given database handle.
    pub fn new(database: Database) -> Self {
        Self { database }
    }

    fn collection(&self) -> mongodb::Collection<Document> {
        self.database.collection(PRODUCTS)
    }

    /// Run a filtered find in the store's natural order, capped at `limit`.
    async fn find_with(&self, filter: Document, limit: usize) -> Result<Vec<Product>> {
        let cursor = self
            .collection()
            .find(filter)
            .limit(limit as i64)
            .await
            .map_err(|e| anyhow!("Failed to query products: {}", e))?;

        let docs: Vec<Document> = cursor
            .try_collect()
            .await
            .map_err(|e| anyhow!("Failed to collect products: {}", e))?;

        docs.into_iter().map(from_document).collect()
    }
}

#[async_trait]
impl ProductService for MongoProductService {
    /// Insert a new product and read it back to return the stored version.
    async fn create(&self, product: Product) -> Result<Product> {
        let doc = to_document(&product)?;

        self.collection()
            .insert_one(doc)
            .await
            .map_err(|e| anyhow!("Failed to create product: {}", e))?;

        let stored = self
            .collection()
            .find_one(doc! { "_id": &product.id })
            .await
            .map_err(|e| anyhow!("Failed to read back created product: {}", e))?
            .ok_or_else(|| anyhow!("Product not found after insert"))?;

        from_document(stored)
    }

    async fn get(&self, id: &str) -> Result<Option<Product>> {
        let doc = self
            .collection()
            .find_one(doc! { "_id": id })
            .await
            .map_err(|e| anyhow!("Failed to get product: {}", e))?;

        match doc {
            Some(d) => Ok(Some(from_document(d)?)),
            None => Ok(None),
        }
    }

    async fn list(&self, limit: usize) -> Result<Vec<Product>> {
        self.find_with(doc! {}, limit).await
    }

    async fn list_by_category(&self, category: &str, limit: usize) -> Result<Vec<Product>> {
        self.find_with(doc! { "category": category }, limit).await
    }

    async fn search(&self, query: &str, limit: usize) -> Result<Vec<Product>> {
        let filter = doc! {
            "$or": [
                { "name": contains_ci(query) },
                { "description": contains_ci(query) },
                { "category": contains_ci(query) },
            ]
        };

        self.find_with(filter, limit).await
    }

    async fn count(&self) -> Result<u64> {
        self.collection()
            .count_documents(doc! {})
            .await
            .map_err(|e| anyhow!("Failed to count products: {}", e))
    }

    async fn create_many(&self, products: Vec<Product>) -> Result<()> {
        let docs = products
            .iter()
            .map(to_document)
            .collect::<Result<Vec<_>>>()?;

        self.collection()
            .insert_many(docs)
            .await
            .map_err(|e| anyhow!("Failed to insert products: {}", e))?;

        Ok(())
    }
}

// ---------------------------------------------------------------------------
// MongoOrderService
// ---------------------------------------------------------------------------

/// Order store backed by the `orders` collection.
#[derive(Clone, Debug)]
pub struct MongoOrderService {
    database: Database,
}

impl MongoOrderService {
    /// Create a new `MongoOrderService` with the given database handle.
    pub fn new(database: Database) -> Self {
        Self { database }
    }

    fn collection(&self) -> mongodb::Collection<Document> {
        self.database.collection(ORDERS)
    }
}

#[async_trait]
impl OrderService for MongoOrderService {
    /// Insert a new order and read it back to return the stored version.
    async fn create(&self, order: Order) -> Result<Order> {
        let doc = to_document(&order)?;

        self.collection()
            .insert_one(doc)
            .await
            .map_err(|e| anyhow!("Failed to create order: {}", e))?;

        let stored = self
            .collection()
            .find_one(doc! { "_id": &order.id })
            .await
            .map_err(|e| anyhow!("Failed to read back created order: {}", e))?
            .ok_or_else(|| anyhow!("Order not found after insert"))?;

        from_document(stored)
    }

    async fn get(&self, id: &str) -> Result<Option<Order>> {
        let doc = self
            .collection()
            .find_one(doc! { "_id": id })
            .await
            .map_err(|e| anyhow!("Failed to get order: {}", e))?;

        match doc {
            Some(d) => Ok(Some(from_document(d)?)),
            None => Ok(None),
        }
    }

    async fn list(&self, limit: usize) -> Result<Vec<Order>> {
        let cursor = self
            .collection()
            .find(doc! {})
            .limit(limit as i64)
            .await
            .map_err(|e| anyhow!("Failed to list orders: {}", e))?;

        let docs: Vec<Document> = cursor
            .try_collect()
            .await
            .map_err(|e| anyhow!("Failed to collect orders: {}", e))?;

        docs.into_iter().map(from_document).collect()
    }
}
