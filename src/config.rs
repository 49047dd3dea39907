//! Environment-backed configuration

use std::{env, fmt::Display, str::FromStr};

use tracing::{info, warn};

/// Process configuration, loaded once at startup.
pub struct Config {
    /// Address the HTTP server binds to.
    pub bind_addr: String,
    /// MongoDB connection string.
    pub mongo_url: String,
    /// Database holding the `products` and `orders` collections.
    pub db_name: String,
    /// Ceiling on documents returned by any list or search endpoint.
    pub list_limit: usize,
}

impl Config {
    pub fn load() -> Self {
        Self {
            bind_addr: load_or("BIND_ADDR", "0.0.0.0:8000"),
            mongo_url: load_or("MONGO_URL", "mongodb://localhost:27017"),
            db_name: load_or("DB_NAME", "spicecart"),
            list_limit: load_or("LIST_LIMIT", "1000"),
        }
    }
}

fn load_or<T: FromStr>(key: &str, default: &str) -> T
where
    T::Err: Display,
{
    env::var(key)
        .unwrap_or_else(|_| {
            info!("{key} not set, using default: {default}");
            default.to_string()
        })
        .parse()
        .map_err(|e| {
            warn!("Invalid {key} value: {e}");
        })
        .expect("Environment misconfigured!")
}
