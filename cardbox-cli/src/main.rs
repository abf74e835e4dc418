//! cardbox CLI - card snapshot storage server
//!
//! Entry point for the `cardbox` binary. Loads `.env`, initialises tracing
//! and dispatches to the subcommand.

use anyhow::Result;
use clap::{Parser, Subcommand};

mod commands;
mod tracing_setup;

#[derive(Parser, Debug)]
#[command(
    name = "cardbox",
    author,
    version,
    about = "Card snapshot storage backend (HTTP + PostgreSQL)"
)]
struct Cli {
    /// Enable debug logging (overridden by RUST_LOG)
    #[arg(long, global = true)]
    debug: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Run the HTTP API server
    Serve(commands::serve::ServeArgs),
}

#[tokio::main]
async fn main() -> Result<()> {
    // A missing .env is fine; the environment may already be populated
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    tracing_setup::init(cli.debug)?;

    match cli.command {
        Commands::Serve(args) => commands::run_serve(args).await?,
    }

    Ok(())
}
