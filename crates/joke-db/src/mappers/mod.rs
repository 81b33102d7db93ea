//! Entity to model mappers
//!
//! Conversions between domain entities (joke-core) and database models.
//! - `From<Model> for Entity`: Convert database rows to domain objects
//! - `JokeInsert`: Prepare entity data for database operations

mod joke;

pub use joke::JokeInsert;
