//! `bicpath status` — Query the status of a running Bicpath node.

use clap::Args;
use serde::Deserialize;

use super::DEFAULT_ENDPOINT;

#[derive(Args, Debug)]
pub struct StatusArgs {
    /// API endpoint of the node.
    #[arg(short, long, default_value = DEFAULT_ENDPOINT)]
    pub endpoint: String,
}

#[derive(Deserialize)]
struct StatusResponse {
    version: String,
    store: String,
    uptime_secs: u64,
    banks: usize,
    links: usize,
    loaded_at: Option<String>,
}

pub async fn run(args: &StatusArgs) -> anyhow::Result<()> {
    let url = format!("{}/api/v1/status", args.endpoint);
    let resp = reqwest::get(&url).await;

    match resp {
        Ok(r) if r.status().is_success() => {
            let status: StatusResponse = r.json().await?;
            println!("Node Status:");
            println!("  Version:    {}", status.version);
            println!("  Store:      {}", status.store);
            println!("  Uptime:     {}s", status.uptime_secs);
            match status.loaded_at {
                Some(loaded_at) => {
                    println!("  Banks:      {}", status.banks);
                    println!("  Links:      {}", status.links);
                    println!("  Loaded at:  {}", loaded_at);
                }
                None => println!("  Dataset:    (not loaded, run 'bicpath upload')"),
            }
        }
        Ok(r) => {
            anyhow::bail!("node returned HTTP {}", r.status());
        }
        Err(e) => {
            println!("Could not reach node at {}", args.endpoint);
            println!("  Error: {}", e);
            println!();
            println!("Is the node running? Start it with: bicpath-node");
        }
    }

    Ok(())
}
