//! Response DTOs for API endpoints
//!
//! All response DTOs implement `Serialize` for JSON output. Field names match
//! the wire format the client expects (`availableVotes` is camelCase).

use serde::Serialize;

use joke_core::VoteMap;

/// Joke returned from the random endpoint, annotated with the fixed
/// available-vote list
#[derive(Debug, Clone, Serialize)]
pub struct JokeResponse {
    pub id: i64,
    pub question: String,
    pub answer: String,
    pub votes: VoteMap,
    #[serde(rename = "availableVotes")]
    pub available_votes: Vec<String>,
}

/// Stored joke record (create endpoint), without the available-vote list
#[derive(Debug, Clone, Serialize)]
pub struct JokeRecordResponse {
    pub id: i64,
    pub question: String,
    pub answer: String,
    pub votes: VoteMap,
}

/// Vote confirmation with the updated vote map
#[derive(Debug, Clone, Serialize)]
pub struct VoteResponse {
    pub message: String,
    pub votes: VoteMap,
}

impl VoteResponse {
    pub fn new(votes: VoteMap) -> Self {
        Self {
            message: "Vote added".to_string(),
            votes,
        }
    }
}

/// Simple confirmation message
#[derive(Debug, Clone, Serialize)]
pub struct MessageResponse {
    pub message: String,
}

impl MessageResponse {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

/// Liveness probe response
#[derive(Debug, Clone, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
}

impl HealthResponse {
    pub fn healthy() -> Self {
        Self { status: "ok" }
    }
}

/// Readiness probe response with dependency health
#[derive(Debug, Clone, Serialize)]
pub struct ReadinessResponse {
    pub status: &'static str,
    pub database: bool,
}

impl ReadinessResponse {
    pub fn ready(database: bool) -> Self {
        Self {
            status: if database { "ready" } else { "not_ready" },
            database,
        }
    }
}
