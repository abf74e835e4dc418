//! cardbox-server: HTTP API for card snapshots
//!
//! Persists positioned, templated cards in PostgreSQL and exposes
//! create/read/update/delete endpoints as JSON over HTTP.

pub mod config;
pub mod db;
pub mod http;
pub mod models;

pub use config::{ConfigError, ServerConfig};
pub use http::{build_router, run_server, ApiError, AppState};
