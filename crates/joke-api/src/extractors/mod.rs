//! Axum extractors for request handling
//!
//! Custom extractors for request body validation.

mod validated;

pub use validated::ValidatedJson;
