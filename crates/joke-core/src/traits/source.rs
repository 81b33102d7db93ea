//! Upstream joke source trait (port)

use async_trait::async_trait;

use crate::entities::Joke;
use crate::error::DomainError;

/// Result type for upstream source operations
pub type SourceResult<T> = Result<T, DomainError>;

/// A remote source returning one random joke on demand.
///
/// Treated as unreliable: implementations surface any transport error or
/// non-success status as `DomainError::UpstreamUnavailable` and never retry.
#[async_trait]
pub trait JokeSource: Send + Sync {
    /// Fetch one random joke (id, question, answer) from the source
    async fn fetch_random(&self) -> SourceResult<Joke>;
}
