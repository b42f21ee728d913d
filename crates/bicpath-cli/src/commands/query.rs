//! `bicpath fastest` / `bicpath cheapest` — Ask a running node for a route.

use clap::Args;
use serde::de::DeserializeOwned;
use serde::Deserialize;

use bicpath_routing::{CheapestPath, FastestPath};

use super::{format_path, format_weight, DEFAULT_ENDPOINT};

#[derive(Args, Debug)]
pub struct QueryArgs {
    /// BIC of the sending bank.
    #[arg(short, long)]
    pub from: String,

    /// BIC of the receiving bank.
    #[arg(short, long)]
    pub to: String,

    /// API endpoint of the node.
    #[arg(short, long, default_value = DEFAULT_ENDPOINT)]
    pub endpoint: String,

    /// Print the raw JSON response.
    #[arg(long)]
    pub json: bool,
}

#[derive(Deserialize)]
struct ErrorResponse {
    error: String,
}

/// GET `{endpoint}{route}?from=..&to=..`; `None` when the node is unreachable.
async fn fetch<T: DeserializeOwned>(args: &QueryArgs, route: &str) -> anyhow::Result<Option<T>> {
    let url = format!("{}{}", args.endpoint, route);
    let client = reqwest::Client::new();
    let resp = client
        .get(&url)
        .query(&[("from", args.from.as_str()), ("to", args.to.as_str())])
        .send()
        .await;

    match resp {
        Ok(r) if r.status().is_success() => Ok(Some(r.json().await?)),
        Ok(r) => {
            let status = r.status();
            if let Ok(err) = r.json::<ErrorResponse>().await {
                anyhow::bail!("query failed (HTTP {}): {}", status, err.error);
            } else {
                anyhow::bail!("query failed (HTTP {})", status);
            }
        }
        Err(e) => {
            println!("Could not reach node at {}", args.endpoint);
            println!("  Error: {}", e);
            println!();
            println!("Is the node running? Start it with: bicpath-node");
            Ok(None)
        }
    }
}

pub async fn run_fastest(args: &QueryArgs) -> anyhow::Result<()> {
    let Some(fastest) = fetch::<FastestPath>(args, "/api/fastest-path").await? else {
        return Ok(());
    };

    if args.json {
        println!("{}", serde_json::to_string_pretty(&fastest)?);
    } else {
        println!("Fastest route {} -> {}:", args.from, args.to);
        println!("  Path:     {}", format_path(&fastest.path));
        println!("  Time:     {} min", format_weight(fastest.time));
    }
    Ok(())
}

pub async fn run_cheapest(args: &QueryArgs) -> anyhow::Result<()> {
    let Some(cheapest) = fetch::<CheapestPath>(args, "/api/cheapest-path").await? else {
        return Ok(());
    };

    if args.json {
        println!("{}", serde_json::to_string_pretty(&cheapest)?);
    } else {
        println!("Cheapest route {} -> {}:", args.from, args.to);
        println!("  Path:     {}", format_path(&cheapest.path));
        println!("  Cost:     {}", format_weight(cheapest.cost));
    }
    Ok(())
}
