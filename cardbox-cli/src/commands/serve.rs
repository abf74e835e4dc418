//! HTTP server command for the cardbox API

use std::net::SocketAddr;

use anyhow::{Context, Result};
use clap::builder::BoolishValueParser;
use clap::{ArgAction, Parser};

use cardbox_server::config::{
    parse_origin, HeaderValue, ServerConfig, DEFAULT_BIND, DEFAULT_CORS_ORIGIN, DEFAULT_DATABASE_URL,
    DEFAULT_MAX_CONNECTIONS,
};
use cardbox_server::run_server;

/// Arguments for the serve command.
///
/// Precedence: flag, then environment variable, then default.
#[derive(Parser, Debug)]
pub struct ServeArgs {
    /// Address to bind to
    #[arg(long, short = 'b', env = "CARDBOX_BIND", default_value = DEFAULT_BIND)]
    pub bind: SocketAddr,

    /// PostgreSQL connection string
    #[arg(long, env = "DATABASE_URL", default_value = DEFAULT_DATABASE_URL, hide_env_values = true)]
    pub database_url: String,

    /// Origin allowed to call the API with credentials
    #[arg(long, env = "CORS_ORIGIN", default_value = DEFAULT_CORS_ORIGIN, value_parser = parse_origin)]
    pub cors_origin: HeaderValue,

    /// Maximum pooled database connections
    #[arg(
        long,
        env = "DATABASE_MAX_CONNECTIONS",
        default_value_t = DEFAULT_MAX_CONNECTIONS,
        value_parser = clap::value_parser!(u32).range(1..)
    )]
    pub max_connections: u32,

    /// Log every SQL statement at INFO (`--echo-sql=false` turns it off)
    #[arg(
        long,
        env = "DATABASE_ECHO",
        action = ArgAction::Set,
        num_args = 0..=1,
        require_equals = true,
        default_value_t = false,
        default_missing_value = "true",
        value_parser = BoolishValueParser::new()
    )]
    pub echo_sql: bool,
}

impl From<ServeArgs> for ServerConfig {
    fn from(args: ServeArgs) -> Self {
        Self {
            bind_addr: args.bind,
            database_url: args.database_url,
            cors_origin: args.cors_origin,
            max_connections: args.max_connections,
            echo_sql: args.echo_sql,
        }
    }
}

/// Run the HTTP server
pub async fn run_serve(args: ServeArgs) -> Result<()> {
    let config = ServerConfig::from(args);

    tracing::info!("Starting cardbox server on {}", config.bind_addr);

    // Run server (blocks until shutdown)
    run_server(config).await.context("Server error")?;

    Ok(())
}
