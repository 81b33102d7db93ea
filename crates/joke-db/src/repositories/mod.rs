//! Repository implementations
//!
//! PostgreSQL implementation of the repository trait defined in joke-core.

mod error;
mod joke;

pub use joke::PgJokeRepository;
