//! Request handlers
//!
//! Handlers organized by domain.

pub mod health;
pub mod jokes;
