//! Request DTOs for API endpoints
//!
//! All request DTOs implement `Deserialize`; inputs with length constraints
//! also implement `Validate`.

use serde::Deserialize;
use validator::Validate;

/// Create joke request
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreateJokeRequest {
    #[validate(length(min = 1, message = "Question is required"))]
    pub question: String,

    #[validate(length(min = 1, message = "Answer is required"))]
    pub answer: String,
}

/// Vote request
///
/// The emoji carries no content rules: any string is accepted, not just
/// the advertised vote set.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct VoteRequest {
    pub emoji: String,
}
