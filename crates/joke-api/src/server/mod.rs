//! Server setup and initialization
//!
//! Provides the main application builder and server runner.

use std::path::PathBuf;
use std::sync::Arc;

use axum::Router;
use joke_common::{AppConfig, AppError};
use joke_db::{create_pool, PgJokeRepository};
use joke_service::{HttpJokeSource, ServiceContextBuilder};
use tokio::net::TcpListener;
use tower_http::services::ServeDir;
use tracing::info;

use crate::middleware::apply_middleware_with_config;
use crate::routes::{create_router, health_routes};
use crate::state::AppState;

/// Default location of the static client, relative to the workspace root
const DEFAULT_STATIC_DIR: &str = "crates/joke-api/static";

/// Build the complete Axum application with all routes and middleware
pub fn create_app(state: AppState) -> Router {
    let router = create_router();
    let router = apply_middleware_with_config(
        router,
        &state.config().cors,
        state.config().app.env.is_production(),
    );

    // Static single-page client, served for anything outside /api
    let static_dir = static_dir();
    info!(dir = %static_dir.display(), "Serving static client");

    router
        .merge(health_routes())
        .fallback_service(ServeDir::new(static_dir))
        .with_state(state)
}

fn static_dir() -> PathBuf {
    std::env::var("STATIC_DIR")
        .map(PathBuf::from)
        .unwrap_or_else(|_| PathBuf::from(DEFAULT_STATIC_DIR))
}

/// Initialize all dependencies and create AppState
pub async fn create_app_state(config: AppConfig) -> Result<AppState, AppError> {
    // Create database pool
    info!("Connecting to PostgreSQL...");
    let db_config = joke_db::DatabaseConfig::new(config.database.url.clone())
        .with_connections(config.database.max_connections, config.database.min_connections);
    let pool = create_pool(&db_config)
        .await
        .map_err(|e| AppError::Database(e.to_string()))?;
    info!("PostgreSQL connection established");

    // Create repository and upstream source
    let joke_repo = Arc::new(PgJokeRepository::new(pool.clone()));
    let joke_source = Arc::new(HttpJokeSource::new(config.upstream.url.clone()));

    // Build service context
    let service_context = ServiceContextBuilder::new()
        .pool(pool)
        .joke_repo(joke_repo)
        .joke_source(joke_source)
        .build()
        .map_err(|e| AppError::Config(e.to_string()))?;

    Ok(AppState::new(service_context, config))
}

/// Run the HTTP server on the given `host:port` address
pub async fn run_server(app: Router, addr: &str) -> Result<(), AppError> {
    info!("Starting HTTP server on {}", addr);

    let listener = TcpListener::bind(addr)
        .await
        .map_err(|e| AppError::Config(format!("Failed to bind to {}: {}", addr, e)))?;

    info!("Server listening on http://{}", addr);

    axum::serve(listener, app)
        .await
        .map_err(|e| AppError::Config(format!("Server error: {}", e)))?;

    Ok(())
}

/// Run the complete server with configuration
pub async fn run(config: AppConfig) -> Result<(), AppError> {
    let addr = config.api.address();

    // Create app state
    let state = create_app_state(config).await?;

    // Build application
    let app = create_app(state);

    // Run server
    run_server(app, &addr).await
}
