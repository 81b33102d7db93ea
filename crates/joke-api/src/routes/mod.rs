//! Route definitions
//!
//! All API routes mounted under /api, with health probes kept separate.

use axum::{
    routing::{delete, get, post},
    Router,
};

use crate::handlers::{health, jokes};
use crate::state::AppState;

/// Create the main API router with all routes (excluding health probes)
pub fn create_router() -> Router<AppState> {
    Router::new().nest("/api", api_routes())
}

/// Health check routes (exported separately so probes skip the API middleware)
pub fn health_routes() -> Router<AppState> {
    Router::new()
        .route("/health", get(health::health_check))
        .route("/health/ready", get(health::readiness_check))
}

/// Joke API routes
fn api_routes() -> Router<AppState> {
    Router::new()
        .route("/joke", get(jokes::get_random_joke))
        .route("/joke", post(jokes::create_joke))
        .route("/joke/:id/vote", post(jokes::vote_joke))
        .route("/joke/:id", delete(jokes::delete_joke))
}
