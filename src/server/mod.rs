//! HTTP server assembly: shared state, routing and the serve loop

pub mod router;
pub mod state;

pub use router::{api_router, serve};
pub use state::AppState;
