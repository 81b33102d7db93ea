//! Repository traits (ports) - define the interface for data access
//!
//! The domain layer defines what it needs, and the infrastructure layer
//! provides the implementation.

use async_trait::async_trait;

use crate::entities::{Joke, VoteMap};
use crate::error::DomainError;

/// Result type for repository operations
pub type RepoResult<T> = Result<T, DomainError>;

#[async_trait]
pub trait JokeRepository: Send + Sync {
    /// Pick one joke uniformly at random, None when the table is empty
    async fn find_random(&self) -> RepoResult<Option<Joke>>;

    /// Find a joke by ID
    async fn find_by_id(&self, id: i64) -> RepoResult<Option<Joke>>;

    /// Insert a new joke with a generated ID and empty votes,
    /// returning the stored record
    async fn insert(&self, question: &str, answer: &str) -> RepoResult<Joke>;

    /// Insert a joke carrying its own ID (backfill); a no-op when a row
    /// with that ID already exists
    async fn insert_if_absent(&self, joke: &Joke) -> RepoResult<()>;

    /// Load the current vote map for a joke, None when the ID is unknown
    async fn get_votes(&self, id: i64) -> RepoResult<Option<VoteMap>>;

    /// Replace the whole vote map for a joke
    ///
    /// Not an atomic increment: callers doing read-modify-write can lose
    /// concurrent updates.
    async fn update_votes(&self, id: i64, votes: &VoteMap) -> RepoResult<()>;

    /// Delete a joke by ID, returning whether a row was removed
    async fn delete(&self, id: i64) -> RepoResult<bool>;
}
