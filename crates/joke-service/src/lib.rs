//! # joke-service
//!
//! Application layer containing business logic, the upstream source adapter,
//! and DTOs.

pub mod dto;
pub mod services;

// Re-export commonly used types at crate root
pub use dto::{
    CreateJokeRequest, HealthResponse, JokeRecordResponse, JokeResponse, MessageResponse,
    ReadinessResponse, VoteRequest, VoteResponse,
};
pub use services::{
    HttpJokeSource, JokeService, ServiceContext, ServiceContextBuilder, ServiceError,
    ServiceResult, AVAILABLE_VOTES,
};
