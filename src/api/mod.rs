//! Web API module for Counsel
//!
//! REST endpoints behind the single-page front end:
//! - `/health` — liveness + version
//! - `/api/personas` — the selectable expert list
//! - `/api/ask` — question in, answer out

pub mod ask;
pub mod health;

use axum::Router;

pub use ask::ask_routes;
pub use health::health_routes;

/// Create the API router with all endpoints
pub fn api_router() -> Router {
    Router::new().merge(health_routes()).merge(ask_routes())
}
