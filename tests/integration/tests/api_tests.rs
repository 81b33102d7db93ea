//! API Integration Tests
//!
//! These tests require:
//! - Running PostgreSQL instance with the schema applied
//! - Environment variable: DATABASE_URL
//!
//! Run with: cargo test -p integration-tests --test api_tests

use integration_tests::{assert_json, assert_status, check_test_env, fixtures::*, TestServer};
use reqwest::StatusCode;
use serde_json::json;

// ============================================================================
// Health Check Tests
// ============================================================================

#[tokio::test]
async fn test_health_check() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let response = server.get("/health").await.expect("Request failed");
    assert_status(response, StatusCode::OK).await.unwrap();
}

#[tokio::test]
async fn test_health_ready() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let response = server.get("/health/ready").await.expect("Request failed");
    assert_status(response, StatusCode::OK).await.unwrap();
}

// ============================================================================
// Joke CRUD Tests
// ============================================================================

#[tokio::test]
async fn test_create_joke() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let request = CreateJokeRequest::unique();

    let response = server.post("/api/joke", &request).await.unwrap();
    let joke: JokeRecordResponse = assert_json(response, StatusCode::OK).await.unwrap();

    assert!(joke.id > 0);
    assert_eq!(joke.question, request.question);
    assert_eq!(joke.answer, request.answer);
    assert!(joke.votes.is_empty());

    // Cleanup
    server.delete(&format!("/api/joke/{}", joke.id)).await.unwrap();
}

#[tokio::test]
async fn test_create_joke_missing_fields() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");

    let response = server
        .post("/api/joke", &json!({ "question": "Only a question" }))
        .await
        .unwrap();
    assert_status(response, StatusCode::BAD_REQUEST).await.unwrap();

    let response = server
        .post("/api/joke", &json!({ "question": "", "answer": "" }))
        .await
        .unwrap();
    assert_status(response, StatusCode::BAD_REQUEST).await.unwrap();
}

#[tokio::test]
async fn test_get_random_joke() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");

    // Seed one joke so the store is not empty
    let request = CreateJokeRequest::unique();
    let response = server.post("/api/joke", &request).await.unwrap();
    let created: JokeRecordResponse = assert_json(response, StatusCode::OK).await.unwrap();

    let response = server.get("/api/joke").await.unwrap();
    let joke: JokeResponse = assert_json(response, StatusCode::OK).await.unwrap();

    assert!(joke.id > 0);
    assert!(!joke.question.is_empty());
    assert_eq!(joke.available_votes.len(), 5);
    assert!(joke.available_votes.contains(&"😂".to_string()));

    // Cleanup
    server
        .delete(&format!("/api/joke/{}", created.id))
        .await
        .unwrap();
}

#[tokio::test]
async fn test_delete_joke() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");

    let request = CreateJokeRequest::unique();
    let response = server.post("/api/joke", &request).await.unwrap();
    let joke: JokeRecordResponse = assert_json(response, StatusCode::OK).await.unwrap();

    let response = server.delete(&format!("/api/joke/{}", joke.id)).await.unwrap();
    let message: MessageResponse = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(message.message, "Joke deleted");

    // Second delete is a 404
    let response = server.delete(&format!("/api/joke/{}", joke.id)).await.unwrap();
    assert_status(response, StatusCode::NOT_FOUND).await.unwrap();

    // Voting on the deleted joke is a 404 too
    let response = server
        .post(&format!("/api/joke/{}/vote", joke.id), &VoteRequest::thumbs_up())
        .await
        .unwrap();
    assert_status(response, StatusCode::NOT_FOUND).await.unwrap();
}

#[tokio::test]
async fn test_delete_unknown_joke() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");

    let response = server.delete("/api/joke/999999999").await.unwrap();
    let error: ErrorResponse = assert_json(response, StatusCode::NOT_FOUND).await.unwrap();
    assert_eq!(error.error.code, "UNKNOWN_JOKE");
}

// ============================================================================
// Vote Tests
// ============================================================================

#[tokio::test]
async fn test_vote_joke() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");

    let request = CreateJokeRequest::unique();
    let response = server.post("/api/joke", &request).await.unwrap();
    let joke: JokeRecordResponse = assert_json(response, StatusCode::OK).await.unwrap();

    let vote_path = format!("/api/joke/{}/vote", joke.id);

    let response = server.post(&vote_path, &VoteRequest::thumbs_up()).await.unwrap();
    let vote: VoteResponse = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(vote.message, "Vote added");
    assert_eq!(vote.votes.get("👍"), Some(&1));

    // Second vote increments
    let response = server.post(&vote_path, &VoteRequest::thumbs_up()).await.unwrap();
    let vote: VoteResponse = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(vote.votes.get("👍"), Some(&2));

    // Any emoji string is accepted, not just the advertised set
    let response = server
        .post(&vote_path, &json!({ "emoji": "🥸" }))
        .await
        .unwrap();
    let vote: VoteResponse = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(vote.votes.get("🥸"), Some(&1));
    assert_eq!(vote.votes.get("👍"), Some(&2));

    // Cleanup
    server.delete(&format!("/api/joke/{}", joke.id)).await.unwrap();
}

#[tokio::test]
async fn test_vote_unknown_joke() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");

    let response = server
        .post("/api/joke/999999999/vote", &VoteRequest::thumbs_up())
        .await
        .unwrap();
    let error: ErrorResponse = assert_json(response, StatusCode::NOT_FOUND).await.unwrap();
    assert_eq!(error.error.code, "UNKNOWN_JOKE");
}

#[tokio::test]
async fn test_vote_missing_emoji() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");

    let request = CreateJokeRequest::unique();
    let response = server.post("/api/joke", &request).await.unwrap();
    let joke: JokeRecordResponse = assert_json(response, StatusCode::OK).await.unwrap();

    let response = server
        .post(&format!("/api/joke/{}/vote", joke.id), &json!({}))
        .await
        .unwrap();
    assert_status(response, StatusCode::BAD_REQUEST).await.unwrap();

    // Cleanup
    server.delete(&format!("/api/joke/{}", joke.id)).await.unwrap();
}

#[tokio::test]
async fn test_vote_invalid_id() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");

    let response = server
        .post("/api/joke/not-a-number/vote", &VoteRequest::thumbs_up())
        .await
        .unwrap();
    assert_status(response, StatusCode::BAD_REQUEST).await.unwrap();
}
