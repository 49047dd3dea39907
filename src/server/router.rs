//! Router assembly and the serve loop

use anyhow::Result;
use axum::{
    Router,
    routing::{get, post},
};
use tokio::net::TcpListener;
use tower_http::{cors::CorsLayer, trace::TraceLayer};

use crate::catalog::handlers::{
    create_product, get_product, init_data, list_by_category, list_products,
};
use crate::orders::handlers::{create_order, get_order, list_orders};
use crate::search::handlers::search_products;
use crate::server::AppState;

/// Build the application router
///
/// All routes live under the `/api` prefix:
/// - GET  /api/products - List all products
/// - GET  /api/products/{id} - Get a product by id
/// - GET  /api/products/category/{category} - List products in a category
/// - POST /api/products - Create a product
/// - POST /api/orders - Create an order
/// - GET  /api/orders - List all orders
/// - GET  /api/orders/{id} - Get an order by id
/// - POST /api/init-data - Seed the sample catalog (one-time)
/// - GET  /api/search?query=STR - Substring search over products
///
/// The router carries a permissive CORS layer (mirrored origin, any method,
/// any header, credentials allowed) and HTTP request tracing.
pub fn api_router(state: AppState) -> Router {
    let api = Router::new()
        .route("/products", get(list_products).post(create_product))
        .route("/products/{id}", get(get_product))
        .route("/products/category/{category}", get(list_by_category))
        .route("/orders", get(list_orders).post(create_order))
        .route("/orders/{id}", get(get_order))
        .route("/init-data", post(init_data))
        .route("/search", get(search_products))
        .with_state(state);

    Router::new()
        .nest("/api", api)
        .layer(CorsLayer::very_permissive())
        .layer(TraceLayer::new_for_http())
}

/// Serve the application with graceful shutdown
///
/// Binds to the provided address, starts serving requests, and handles
/// SIGTERM and SIGINT (Ctrl+C) for graceful shutdown.
pub async fn serve(app: Router, addr: &str) -> Result<()> {
    let listener = TcpListener::bind(addr).await?;

    tracing::info!("Server listening on {}", addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("Server shutdown complete");
    Ok(())
}

async fn shutdown_signal() {
    use tokio::signal;

    let ctrl_c = async {
        signal::ctrl_c()
            .await
            .expect("failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        signal::unix::signal(signal::unix::SignalKind::terminate())
            .expect("failed to install SIGTERM handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            tracing::info!("Received Ctrl+C signal, initiating graceful shutdown...");
        },
        _ = terminate => {
            tracing::info!("Received SIGTERM signal, initiating graceful shutdown...");
        },
    }
}
