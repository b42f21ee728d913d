//! Bicpath CLI — fastest and cheapest interbank transfer routes.
//!
//! Subcommands: init, status, upload, fastest, cheapest, route.

mod commands;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

/// Bicpath — find the fastest or cheapest chain of banks for a transfer.
#[derive(Parser, Debug)]
#[command(name = "bicpath", version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Write a default node configuration.
    Init(commands::init::InitArgs),
    /// Query the status of a running node.
    Status(commands::status::StatusArgs),
    /// Ask a running node to reload its CSV files.
    Upload(commands::upload::UploadArgs),
    /// Query a running node for the fastest route.
    Fastest(commands::query::QueryArgs),
    /// Query a running node for the cheapest route.
    Cheapest(commands::query::QueryArgs),
    /// Search local CSV files without a node.
    Route(commands::route::RouteArgs),
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Library diagnostics go to stderr; RUST_LOG=debug shows each search.
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    match &cli.command {
        Commands::Init(args) => commands::init::run(args),
        Commands::Status(args) => commands::status::run(args).await,
        Commands::Upload(args) => commands::upload::run(args).await,
        Commands::Fastest(args) => commands::query::run_fastest(args).await,
        Commands::Cheapest(args) => commands::query::run_cheapest(args).await,
        Commands::Route(args) => commands::route::run(args).await,
    }
}
