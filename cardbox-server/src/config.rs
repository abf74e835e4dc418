//! Server configuration
//!
//! Defaults match the compose deployment; the CLI layers flags and
//! environment variables over them.

use std::net::SocketAddr;

pub use axum::http::HeaderValue;

pub use crate::db::pool::DEFAULT_MAX_CONNECTIONS;

/// Listen address used when none is given
pub const DEFAULT_BIND: &str = "127.0.0.1:8000";

/// Connection target used when `DATABASE_URL` is not set
pub const DEFAULT_DATABASE_URL: &str = "postgres://card_user:card_pass@db:5432/card_db";

/// Frontend origin used when `CORS_ORIGIN` is not set
pub const DEFAULT_CORS_ORIGIN: &str = "http://localhost:3000";

/// Configuration value errors
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("invalid CORS origin '{value}'")]
    InvalidOrigin { value: String },
}

/// Server configuration
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Address to bind to (default: 127.0.0.1:8000)
    pub bind_addr: SocketAddr,

    /// PostgreSQL connection string
    pub database_url: String,

    /// Origin allowed by CORS, with credentials
    pub cors_origin: HeaderValue,

    /// Maximum number of pooled connections
    pub max_connections: u32,

    /// Log every statement at INFO instead of DEBUG
    pub echo_sql: bool,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind_addr: SocketAddr::from(([127, 0, 0, 1], 8000)),
            database_url: DEFAULT_DATABASE_URL.to_string(),
            cors_origin: HeaderValue::from_static(DEFAULT_CORS_ORIGIN),
            max_connections: DEFAULT_MAX_CONNECTIONS,
            echo_sql: false,
        }
    }
}

/// Parse an origin into a header value; a trailing slash is dropped.
pub fn parse_origin(value: &str) -> Result<HeaderValue, ConfigError> {
    let trimmed = value.trim().trim_end_matches('/');
    if trimmed.is_empty() {
        return Err(ConfigError::InvalidOrigin {
            value: value.to_string(),
        });
    }

    HeaderValue::from_str(trimmed).map_err(|_| ConfigError::InvalidOrigin {
        value: value.to_string(),
    })
}
