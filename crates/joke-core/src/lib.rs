//! # joke-core
//!
//! Domain layer containing the joke entity, domain errors, and the ports
//! (repository and upstream-source traits). This crate has zero dependencies
//! on infrastructure (database, web framework, etc.).

pub mod entities;
pub mod error;
pub mod traits;

// Re-export commonly used types at crate root
pub use entities::{Joke, VoteMap};
pub use error::DomainError;
pub use traits::{JokeRepository, JokeSource, RepoResult, SourceResult};
