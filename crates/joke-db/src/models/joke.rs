//! Joke database model

use joke_core::VoteMap;
use sqlx::types::Json;
use sqlx::FromRow;

/// Database model for the jokes table
#[derive(Debug, Clone, FromRow)]
pub struct JokeModel {
    pub id: i64,
    pub question: String,
    pub answer: String,
    pub votes: Json<VoteMap>,
}

/// Votes-only projection (vote read-modify-write path)
#[derive(Debug, Clone, FromRow)]
pub struct JokeVotesModel {
    pub votes: Json<VoteMap>,
}
