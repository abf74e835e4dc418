//! Domain models for the card API

pub mod card;
pub mod validation;

pub use card::{Card, CardResponse, CardSnapshot, HealthResponse};
pub use validation::ValidationError;
