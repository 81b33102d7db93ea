//! Entity → DTO mappers

use joke_core::Joke;

use super::responses::{JokeRecordResponse, JokeResponse};
use crate::services::joke::AVAILABLE_VOTES;

/// Convert a joke entity into the annotated random-joke response
impl From<Joke> for JokeResponse {
    fn from(joke: Joke) -> Self {
        Self {
            id: joke.id,
            question: joke.question,
            answer: joke.answer,
            votes: joke.votes,
            available_votes: AVAILABLE_VOTES.iter().map(ToString::to_string).collect(),
        }
    }
}

/// Convert a joke entity into the bare stored-record response
impl From<Joke> for JokeRecordResponse {
    fn from(joke: Joke) -> Self {
        Self {
            id: joke.id,
            question: joke.question,
            answer: joke.answer,
            votes: joke.votes,
        }
    }
}
