//! Joke handlers
//!
//! Endpoints for fetching, creating, voting on, and deleting jokes.

use axum::{
    extract::{Path, State},
    Json,
};
use joke_service::{
    CreateJokeRequest, JokeRecordResponse, JokeResponse, JokeService, MessageResponse,
    VoteRequest, VoteResponse,
};

use crate::extractors::ValidatedJson;
use crate::response::{ApiError, ApiResult};
use crate::state::AppState;

/// Get a random joke
///
/// GET /api/joke
pub async fn get_random_joke(State(state): State<AppState>) -> ApiResult<Json<JokeResponse>> {
    let service = JokeService::new(state.service_context());
    let response = service.get_random_joke().await?;
    Ok(Json(response))
}

/// Create a joke
///
/// POST /api/joke
pub async fn create_joke(
    State(state): State<AppState>,
    ValidatedJson(request): ValidatedJson<CreateJokeRequest>,
) -> ApiResult<Json<JokeRecordResponse>> {
    let service = JokeService::new(state.service_context());
    let joke = service.create(&request.question, &request.answer).await?;
    Ok(Json(JokeRecordResponse::from(joke)))
}

/// Vote on a joke
///
/// POST /api/joke/{id}/vote
pub async fn vote_joke(
    State(state): State<AppState>,
    Path(id): Path<String>,
    ValidatedJson(request): ValidatedJson<VoteRequest>,
) -> ApiResult<Json<VoteResponse>> {
    let id = id
        .parse()
        .map_err(|_| ApiError::invalid_path("Invalid joke id format"))?;

    let service = JokeService::new(state.service_context());
    let votes = service.vote(id, &request.emoji).await?;
    Ok(Json(VoteResponse::new(votes)))
}

/// Delete a joke
///
/// DELETE /api/joke/{id}
pub async fn delete_joke(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> ApiResult<Json<MessageResponse>> {
    let id = id
        .parse()
        .map_err(|_| ApiError::invalid_path("Invalid joke id format"))?;

    let service = JokeService::new(state.service_context());
    service.delete(id).await?;
    Ok(Json(MessageResponse::new("Joke deleted")))
}
