//! Bicpath Node — entry point.
//!
//! Serves fastest/cheapest interbank routes with configuration from a TOML
//! file or defaults.

use clap::Parser;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

use bicpath_node::{BicpathNode, NodeConfig};

/// Bicpath Node
#[derive(Parser, Debug)]
#[command(name = "bicpath-node", version, about = "Bicpath routing node")]
struct Args {
    /// Path to the configuration file (TOML).
    #[arg(short, long, default_value = "bicpath.toml")]
    config: PathBuf,

    /// Override the API port.
    #[arg(long)]
    port: Option<u16>,

    /// Override the data directory.
    #[arg(long)]
    data_dir: Option<PathBuf>,

    /// Override the log level (trace, debug, info, warn, error).
    #[arg(long)]
    log_level: Option<String>,

    /// Generate a default config file and exit.
    #[arg(long)]
    init: bool,

    /// Load the configured CSV files before serving.
    #[arg(long)]
    upload_on_start: bool,
}

fn init_tracing(config: &NodeConfig) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&config.logging.level));

    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true);

    if config.json_logs() {
        builder.json().init();
    } else {
        builder.init();
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    // Handle --init flag
    if args.init {
        let config = NodeConfig::default();
        config.save(&args.config)?;
        println!("Wrote default config to {}", args.config.display());
        return Ok(());
    }

    // Load configuration
    let mut config = NodeConfig::load(&args.config)?;

    // Apply CLI overrides
    if let Some(port) = args.port {
        config.api.port = port;
    }
    if let Some(ref data_dir) = args.data_dir {
        config.storage.data_dir = data_dir.clone();
    }
    if let Some(level) = args.log_level {
        config.logging.level = level;
    }

    init_tracing(&config);
    tracing::info!("Bicpath node v{}", env!("CARGO_PKG_VERSION"));

    // Create and start the node
    let mut node = BicpathNode::new(config)?;
    node.start().await?;
    if let Some(addr) = node.local_addr() {
        tracing::info!(%addr, "accepting path queries");
    }

    if args.upload_on_start {
        match node.upload().await {
            Ok(summary) => tracing::info!(
                banks = summary.banks,
                links = summary.links,
                "initial upload complete"
            ),
            Err(e) => tracing::warn!(error = %e, "initial upload failed; serving stored dataset"),
        }
    }

    // Set up graceful shutdown on SIGINT
    let shutdown = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!(error = %e, "failed to listen for ctrl-c");
            std::future::pending::<()>().await;
        }
        tracing::info!("received shutdown signal");
    };

    tokio::select! {
        result = node.run() => {
            if let Err(e) = result {
                tracing::error!(error = %e, "API server error");
            }
        }
        _ = shutdown => {
            tracing::info!("initiating graceful shutdown");
        }
    }

    node.shutdown().await?;
    tracing::info!("Bicpath node exited cleanly");
    Ok(())
}
