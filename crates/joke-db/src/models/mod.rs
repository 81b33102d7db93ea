//! Database models - SQLx-compatible structs for PostgreSQL tables

mod joke;

pub use joke::{JokeModel, JokeVotesModel};
