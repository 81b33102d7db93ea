//! Ports - traits the infrastructure layers implement

mod repositories;
mod source;

pub use repositories::{JokeRepository, RepoResult};
pub use source::{JokeSource, SourceResult};
