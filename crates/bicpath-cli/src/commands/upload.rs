//! `bicpath upload` — Ask a running node to reload its CSV files.

use clap::Args;
use serde::Deserialize;

use super::DEFAULT_ENDPOINT;

#[derive(Args, Debug)]
pub struct UploadArgs {
    /// API endpoint of the node.
    #[arg(short, long, default_value = DEFAULT_ENDPOINT)]
    pub endpoint: String,
}

#[derive(Deserialize)]
struct UploadResponse {
    message: String,
    #[serde(default)]
    banks: usize,
    #[serde(default)]
    links: usize,
}

pub async fn run(args: &UploadArgs) -> anyhow::Result<()> {
    let url = format!("{}/api/upload", args.endpoint);

    let client = reqwest::Client::new();
    let resp = client.post(&url).send().await;

    match resp {
        Ok(r) if r.status().is_success() => {
            let data: UploadResponse = r.json().await?;
            println!("{}", data.message);
            println!("  Banks:    {}", data.banks);
            println!("  Links:    {}", data.links);
        }
        Ok(r) => {
            let status = r.status();
            if let Ok(err) = r.json::<UploadResponse>().await {
                anyhow::bail!("upload failed (HTTP {}): {}", status, err.message);
            } else {
                anyhow::bail!("upload failed (HTTP {})", status);
            }
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
