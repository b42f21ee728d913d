//! `bicpath route` — Search local CSV files without a running node.

use clap::{Args, ValueEnum};
use serde::Serialize;
use std::path::PathBuf;
use std::sync::Arc;

use bicpath_core::Bic;
use bicpath_routing::{CheapestPath, FastestPath, RouteService};
use bicpath_store::{load_dataset, MemoryStore};

use super::{format_path, format_weight};

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum Metric {
    /// Minimum total transfer time.
    Time,
    /// Minimum total receiving-bank charge.
    Charge,
}

#[derive(Args, Debug)]
pub struct RouteArgs {
    /// Bank table (`BIC,Charge`).
    #[arg(long, default_value = "./banks.csv")]
    pub banks: PathBuf,

    /// Link table (`FromBIC,ToBIC,TimeTakenInMinutes`).
    #[arg(long, default_value = "./links.csv")]
    pub links: PathBuf,

    /// BIC of the sending bank.
    #[arg(short, long)]
    pub from: String,

    /// BIC of the receiving bank.
    #[arg(short, long)]
    pub to: String,

    /// What to minimize.
    #[arg(short, long, value_enum, default_value_t = Metric::Time)]
    pub metric: Metric,

    /// Print the result as JSON.
    #[arg(long)]
    pub json: bool,
}

/// Outcome of one local search, shaped like the node's API responses.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum RouteOutcome {
    Fastest(FastestPath),
    Cheapest(CheapestPath),
}

/// Load both tables into a [`MemoryStore`] and run one search.
pub async fn search(args: &RouteArgs) -> anyhow::Result<RouteOutcome> {
    let dataset = load_dataset(&args.banks, &args.links)?;
    let service = RouteService::new(Arc::new(MemoryStore::with_dataset(dataset)));

    let from = Bic::new(args.from.as_str())?;
    let to = Bic::new(args.to.as_str())?;

    let outcome = match args.metric {
        Metric::Time => RouteOutcome::Fastest(service.find_fastest_path(&from, &to).await?),
        Metric::Charge => RouteOutcome::Cheapest(service.find_cheapest_path(&from, &to).await?),
    };
    Ok(outcome)
}

pub async fn run(args: &RouteArgs) -> anyhow::Result<()> {
    let outcome = search(args).await?;

    if args.json {
        println!("{}", serde_json::to_string_pretty(&outcome)?);
        return Ok(());
    }

    let (path, label, weight) = match &outcome {
        RouteOutcome::Fastest(fastest) => (&fastest.path, "Time", fastest.time),
        RouteOutcome::Cheapest(cheapest) => (&cheapest.path, "Cost", cheapest.cost),
    };

    println!("Route {} -> {} by {:?}:", args.from, args.to, args.metric);
    println!("  Path:     {}", format_path(path));
    println!("  {}:     {}", label, format_weight(weight));
    Ok(())
}
