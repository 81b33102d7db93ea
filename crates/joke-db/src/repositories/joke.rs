//! PostgreSQL implementation of JokeRepository

use async_trait::async_trait;
use sqlx::types::Json;
use sqlx::PgPool;
use tracing::instrument;

use joke_core::entities::{Joke, VoteMap};
use joke_core::traits::{JokeRepository, RepoResult};

use crate::mappers::JokeInsert;
use crate::models::{JokeModel, JokeVotesModel};

use super::error::map_db_error;

/// PostgreSQL implementation of JokeRepository
#[derive(Clone)]
pub struct PgJokeRepository {
    pool: PgPool,
}

impl PgJokeRepository {
    /// Create a new PgJokeRepository
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl JokeRepository for PgJokeRepository {
    #[instrument(skip(self))]
    async fn find_random(&self) -> RepoResult<Option<Joke>> {
        let result = sqlx::query_as::<_, JokeModel>(
            r#"
            SELECT id, question, answer, votes
            FROM jokes
            ORDER BY RANDOM()
            LIMIT 1
            "#,
        )
        .fetch_optional(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(result.map(Joke::from))
    }

    #[instrument(skip(self))]
    async fn find_by_id(&self, id: i64) -> RepoResult<Option<Joke>> {
        let result = sqlx::query_as::<_, JokeModel>(
            r#"
            SELECT id, question, answer, votes
            FROM jokes
            WHERE id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(result.map(Joke::from))
    }

    #[instrument(skip(self))]
    async fn insert(&self, question: &str, answer: &str) -> RepoResult<Joke> {
        let model = sqlx::query_as::<_, JokeModel>(
            r#"
            INSERT INTO jokes (question, answer, votes)
            VALUES ($1, $2, '{}'::jsonb)
            RETURNING id, question, answer, votes
            "#,
        )
        .bind(question)
        .bind(answer)
        .fetch_one(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(Joke::from(model))
    }

    #[instrument(skip(self, joke), fields(id = joke.id))]
    async fn insert_if_absent(&self, joke: &Joke) -> RepoResult<()> {
        let insert = JokeInsert::new(joke);

        sqlx::query(
            r#"
            INSERT INTO jokes (id, question, answer, votes)
            VALUES ($1, $2, $3, $4)
            ON CONFLICT (id) DO NOTHING
            "#,
        )
        .bind(insert.id)
        .bind(insert.question)
        .bind(insert.answer)
        .bind(insert.votes)
        .execute(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(())
    }

    #[instrument(skip(self))]
    async fn get_votes(&self, id: i64) -> RepoResult<Option<VoteMap>> {
        let result = sqlx::query_as::<_, JokeVotesModel>(
            r#"
            SELECT votes FROM jokes WHERE id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(result.map(|m| m.votes.0))
    }

    #[instrument(skip(self, votes))]
    async fn update_votes(&self, id: i64, votes: &VoteMap) -> RepoResult<()> {
        // Full-map replace, matching the documented read-modify-write semantics
        sqlx::query(
            r#"
            UPDATE jokes SET votes = $1 WHERE id = $2
            "#,
        )
        .bind(Json(votes))
        .bind(id)
        .execute(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(())
    }

    #[instrument(skip(self))]
    async fn delete(&self, id: i64) -> RepoResult<bool> {
        let result = sqlx::query(
            r#"
            DELETE FROM jokes WHERE id = $1
            "#,
        )
        .bind(id)
        .execute(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(result.rows_affected() > 0)
    }
}
