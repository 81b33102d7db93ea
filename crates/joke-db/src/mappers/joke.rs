//! Joke entity <-> model mapper

use joke_core::Joke;
use sqlx::types::Json;

use crate::models::JokeModel;

/// Convert JokeModel to Joke entity
impl From<JokeModel> for Joke {
    fn from(model: JokeModel) -> Self {
        Joke {
            id: model.id,
            question: model.question,
            answer: model.answer,
            votes: model.votes.0,
        }
    }
}

/// Convert Joke entity reference to values for database insertion
pub struct JokeInsert<'a> {
    pub id: i64,
    pub question: &'a str,
    pub answer: &'a str,
    pub votes: Json<&'a joke_core::VoteMap>,
}

impl<'a> JokeInsert<'a> {
    pub fn new(joke: &'a Joke) -> Self {
        Self {
            id: joke.id,
            question: &joke.question,
            answer: &joke.answer,
            votes: Json(&joke.votes),
        }
    }
}
