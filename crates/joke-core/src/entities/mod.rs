//! Domain entities - core business objects

mod joke;

pub use joke::{Joke, VoteMap};
