//! Server binary: configuration, store connection, serve loop

use std::sync::Arc;

use anyhow::Result;
use mongodb::Client;
use tracing_subscriber::EnvFilter;

use spicecart::config::Config;
use spicecart::server::{AppState, api_router, serve};
use spicecart::storage::{MongoOrderService, MongoProductService};

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let config = Config::load();

    let client = Client::with_uri_str(&config.mongo_url).await?;
    let database = client.database(&config.db_name);

    let state = AppState::new(
        Arc::new(MongoProductService::new(database.clone())),
        Arc::new(MongoOrderService::new(database)),
        config.list_limit,
    );

    serve(api_router(state), &config.bind_addr).await?;

    // Close the store connection once the serve loop has drained.
    client.shutdown().await;

    Ok(())
}
