//! # Spicecart
//!
//! Product catalog and order-taking backend for a food e-commerce
//! storefront: a JSON API over a MongoDB document store.
//!
//! ## Architecture
//!
//! - **Store traits**: [`core::ProductService`] and [`core::OrderService`]
//!   abstract the document store. Handlers only see trait objects, so the
//!   MongoDB backend and the in-memory test backend are interchangeable.
//! - **Handlers**: [`catalog`], [`orders`] and [`search`] hold the axum
//!   handlers for their endpoint group.
//! - **Server**: [`server`] assembles the `/api` router, the permissive
//!   CORS layer and the serve loop with graceful shutdown.
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use std::sync::Arc;
//! use spicecart::prelude::*;
//!
//! let state = AppState::new(
//!     Arc::new(InMemoryProductService::new()),
//!     Arc::new(InMemoryOrderService::new()),
//!     1000,
//! );
//!
//! spicecart::server::serve(api_router(state), "127.0.0.1:8000").await?;
//! ```

pub mod catalog;
pub mod config;
pub mod core;
pub mod orders;
pub mod search;
pub mod server;
pub mod storage;

/// Re-exports of commonly used types and traits
pub mod prelude {
    // === Domain ===
    pub use crate::core::{
        error::{ApiError, ApiResult},
        order::{Order, OrderCreate, OrderItem},
        product::{Product, ProductCreate},
        service::{OrderService, ProductService},
    };

    // === Server ===
    pub use crate::server::{AppState, api_router};

    // === Storage ===
    pub use crate::storage::{
        InMemoryOrderService, InMemoryProductService, MongoOrderService, MongoProductService,
    };

    // === External dependencies ===
    pub use anyhow::Result;
    pub use async_trait::async_trait;
    pub use chrono::{DateTime, Utc};
    pub use serde::{Deserialize, Serialize};
}
