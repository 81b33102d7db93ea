//! Service context - dependency container for services
//!
//! Holds the repository, upstream source, and database pool needed by services.

use std::sync::Arc;

use joke_core::traits::{JokeRepository, JokeSource};
use joke_db::PgPool;

/// Service context containing all dependencies
///
/// This is the dependency container that gets passed to all services.
/// It provides access to:
/// - The joke repository
/// - The upstream joke source
/// - The database pool (for health probes)
#[derive(Clone)]
pub struct ServiceContext {
    pool: PgPool,
    joke_repo: Arc<dyn JokeRepository>,
    joke_source: Arc<dyn JokeSource>,
}

impl ServiceContext {
    /// Create a new service context with all dependencies
    pub fn new(
        pool: PgPool,
        joke_repo: Arc<dyn JokeRepository>,
        joke_source: Arc<dyn JokeSource>,
    ) -> Self {
        Self {
            pool,
            joke_repo,
            joke_source,
        }
    }

    /// Get the PostgreSQL connection pool
    pub fn pool(&self) -> &PgPool {
        &self.pool
    }

    /// Get the joke repository
    pub fn joke_repo(&self) -> &dyn JokeRepository {
        self.joke_repo.as_ref()
    }

    /// Get the upstream joke source
    pub fn joke_source(&self) -> &dyn JokeSource {
        self.joke_source.as_ref()
    }
}

impl std::fmt::Debug for ServiceContext {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ServiceContext")
            .field("pool", &"PgPool")
            .field("joke_repo", &"JokeRepository")
            .field("joke_source", &"JokeSource")
            .finish()
    }
}

/// Builder for creating ServiceContext
pub struct ServiceContextBuilder {
    pool: Option<PgPool>,
    joke_repo: Option<Arc<dyn JokeRepository>>,
    joke_source: Option<Arc<dyn JokeSource>>,
}

impl ServiceContextBuilder {
    pub fn new() -> Self {
        Self {
            pool: None,
            joke_repo: None,
            joke_source: None,
        }
    }

    pub fn pool(mut self, pool: PgPool) -> Self {
        self.pool = Some(pool);
        self
    }

    pub fn joke_repo(mut self, repo: Arc<dyn JokeRepository>) -> Self {
        self.joke_repo = Some(repo);
        self
    }

    pub fn joke_source(mut self, source: Arc<dyn JokeSource>) -> Self {
        self.joke_source = Some(source);
        self
    }

    /// Build the ServiceContext
    ///
    /// # Errors
    /// Returns `ServiceError::Validation` if any required dependency is missing
    pub fn build(self) -> super::error::ServiceResult<ServiceContext> {
        Ok(ServiceContext::new(
            self.pool
                .ok_or_else(|| super::error::ServiceError::validation("pool is required"))?,
            self.joke_repo
                .ok_or_else(|| super::error::ServiceError::validation("joke_repo is required"))?,
            self.joke_source
                .ok_or_else(|| super::error::ServiceError::validation("joke_source is required"))?,
        ))
    }
}

impl Default for ServiceContextBuilder {
    fn default() -> Self {
        Self::new()
    }
}
