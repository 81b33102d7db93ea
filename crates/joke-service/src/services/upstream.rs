//! Upstream joke source adapter
//!
//! HTTP implementation of the `JokeSource` port. The remote endpoint returns
//! `{ id, question, answer }` for a single random joke.

use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;
use tracing::{debug, instrument};

use joke_core::entities::Joke;
use joke_core::error::DomainError;
use joke_core::traits::{JokeSource, SourceResult};

/// Wire format of the upstream joke endpoint
#[derive(Debug, Deserialize)]
struct UpstreamJoke {
    id: i64,
    question: String,
    answer: String,
}

/// HTTP implementation of JokeSource
///
/// Any transport error, non-success status, or malformed body is surfaced as
/// `DomainError::UpstreamUnavailable`. Calls are not retried.
#[derive(Clone)]
pub struct HttpJokeSource {
    client: Client,
    url: String,
}

impl HttpJokeSource {
    /// Create a new HttpJokeSource for the given endpoint URL
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            client: Client::new(),
            url: url.into(),
        }
    }
}

#[async_trait]
impl JokeSource for HttpJokeSource {
    #[instrument(skip(self), fields(url = %self.url))]
    async fn fetch_random(&self) -> SourceResult<Joke> {
        let response = self
            .client
            .get(&self.url)
            .send()
            .await
            .map_err(|e| DomainError::UpstreamUnavailable(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            return Err(DomainError::UpstreamUnavailable(format!(
                "unexpected status {status}"
            )));
        }

        let joke: UpstreamJoke = response
            .json()
            .await
            .map_err(|e| DomainError::UpstreamUnavailable(format!("malformed response: {e}")))?;

        debug!(id = joke.id, "Fetched joke from upstream source");

        Ok(Joke::new(joke.id, joke.question, joke.answer))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_source_is_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<HttpJokeSource>();
    }

    #[test]
    fn test_upstream_wire_format() {
        let joke: UpstreamJoke =
            serde_json::from_str(r#"{"id":42,"question":"Q","answer":"A"}"#).unwrap();
        assert_eq!(joke.id, 42);
        assert_eq!(joke.question, "Q");
        assert_eq!(joke.answer, "A");
    }
}
