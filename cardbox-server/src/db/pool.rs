//! Database connection pool management
//!
//! Uses sqlx PgPool with explicit connection limits.

use std::str::FromStr;

use log::LevelFilter;
use sqlx::postgres::{PgConnectOptions, PgPoolOptions};
use sqlx::{ConnectOptions, PgPool};

/// Default maximum connections for the pool.
pub const DEFAULT_MAX_CONNECTIONS: u32 = 5;

/// Pool tuning knobs
#[derive(Debug, Clone, Copy)]
pub struct PoolOptions {
    pub max_connections: u32,
    /// Log statements at INFO instead of DEBUG
    pub echo_sql: bool,
}

impl Default for PoolOptions {
    fn default() -> Self {
        Self {
            max_connections: DEFAULT_MAX_CONNECTIONS,
            echo_sql: false,
        }
    }
}

/// Create a PostgreSQL connection pool.
///
/// # Errors
///
/// Returns an error if the URL is malformed or the first connection fails.
///
/// # Example
///
/// ```ignore
/// let pool = create_pool("postgres://localhost/card_db", PoolOptions::default()).await?;
/// ```
pub async fn create_pool(database_url: &str, options: PoolOptions) -> Result<PgPool, sqlx::Error> {
    let statement_level = if options.echo_sql {
        LevelFilter::Info
    } else {
        LevelFilter::Debug
    };

    let connect_options = PgConnectOptions::from_str(database_url)?.log_statements(statement_level);

    PgPoolOptions::new()
        .max_connections(options.max_connections)
        .connect_with(connect_options)
        .await
}

#[cfg(test)]
mod tests {
    use super::*;

    // Integration tests require a real database
    // Run with: DATABASE_URL=postgres://... cargo test -p cardbox-server -- --ignored

    #[tokio::test]
    async fn malformed_url_is_rejected() {
        let result = create_pool("not a url", PoolOptions::default()).await;
        assert!(result.is_err());
    }

    #[tokio::test]
    #[ignore = "requires database"]
    async fn pool_acquires_connection() {
        let url = std::env::var("DATABASE_URL").expect("DATABASE_URL required");
        let pool = create_pool(&url, PoolOptions::default())
            .await
            .expect("pool creation failed");

        let result: (i32,) = sqlx::query_as("SELECT 1")
            .fetch_one(&pool)
            .await
            .expect("query failed");

        assert_eq!(result.0, 1);
    }
}
