//! Joke entity - a question/answer pair with per-emoji vote counts

use std::collections::BTreeMap;

/// Per-emoji vote counts for a joke.
///
/// Keys are arbitrary emoji strings (not restricted to the advertised vote
/// set), values are non-negative counts. A freshly created or backfilled
/// joke starts with an empty map.
pub type VoteMap = BTreeMap<String, i64>;

/// Joke entity
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Joke {
    pub id: i64,
    pub question: String,
    pub answer: String,
    pub votes: VoteMap,
}

impl Joke {
    /// Create a new Joke with no votes
    pub fn new(id: i64, question: impl Into<String>, answer: impl Into<String>) -> Self {
        Self {
            id,
            question: question.into(),
            answer: answer.into(),
            votes: VoteMap::new(),
        }
    }
}
