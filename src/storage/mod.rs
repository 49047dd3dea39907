//! Store backends for the product and order collections

pub mod in_memory;
pub mod mongodb;

pub use in_memory::{InMemoryOrderService, InMemoryProductService};
pub use mongodb::{MongoOrderService, MongoProductService};
