//! Test fixtures and data generators
//!
//! Provides reusable test data for integration tests.

use std::collections::BTreeMap;
use std::sync::atomic::{AtomicU64, Ordering};

use serde::{Deserialize, Serialize};

/// Counter for unique test data
static COUNTER: AtomicU64 = AtomicU64::new(1);

/// Get a unique suffix for test data
pub fn unique_suffix() -> u64 {
    COUNTER.fetch_add(1, Ordering::SeqCst)
}

/// Create joke request
#[derive(Debug, Serialize)]
pub struct CreateJokeRequest {
    pub question: String,
    pub answer: String,
}

impl CreateJokeRequest {
    pub fn unique() -> Self {
        let suffix = unique_suffix();
        Self {
            question: format!("Why did test joke {suffix} cross the road?"),
            answer: format!("To get to assertion {suffix}."),
        }
    }
}

/// Vote request
#[derive(Debug, Serialize)]
pub struct VoteRequest {
    pub emoji: String,
}

impl VoteRequest {
    pub fn thumbs_up() -> Self {
        Self {
            emoji: "👍".to_string(),
        }
    }
}

/// Stored joke record (create endpoint)
#[derive(Debug, Deserialize)]
pub struct JokeRecordResponse {
    pub id: i64,
    pub question: String,
    pub answer: String,
    pub votes: BTreeMap<String, i64>,
}

/// Random joke response with the available-vote list
#[derive(Debug, Deserialize)]
pub struct JokeResponse {
    pub id: i64,
    pub question: String,
    pub answer: String,
    pub votes: BTreeMap<String, i64>,
    #[serde(rename = "availableVotes")]
    pub available_votes: Vec<String>,
}

/// Vote confirmation response
#[derive(Debug, Deserialize)]
pub struct VoteResponse {
    pub message: String,
    pub votes: BTreeMap<String, i64>,
}

/// Simple confirmation message
#[derive(Debug, Deserialize)]
pub struct MessageResponse {
    pub message: String,
}

/// Error response
#[derive(Debug, Deserialize)]
pub struct ErrorResponse {
    pub error: ErrorBody,
}

#[derive(Debug, Deserialize)]
pub struct ErrorBody {
    pub code: String,
    pub message: String,
}
