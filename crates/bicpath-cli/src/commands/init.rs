//! `bicpath init` — Write a default node configuration.

use clap::Args;
use std::path::PathBuf;

use bicpath_node::NodeConfig;

#[derive(Args, Debug)]
pub struct InitArgs {
    /// Directory to initialize (defaults to current directory).
    #[arg(default_value = ".")]
    pub dir: PathBuf,
}

pub fn run(args: &InitArgs) -> anyhow::Result<()> {
    let config_path = args.dir.join("bicpath.toml");

    if config_path.exists() {
        anyhow::bail!("configuration file already exists at {}", config_path.display());
    }

    let config = NodeConfig::default();
    config.save(&config_path)?;
    println!("Initialized Bicpath node at {}", config_path.display());
    println!("Put banks.csv and links.csv next to it, or edit [ingest].");
    println!("Run 'bicpath-node --upload-on-start' to serve routes.");

    // Create the data directory, relative to the config file.
    std::fs::create_dir_all(args.dir.join(&config.storage.data_dir))?;

    Ok(())
}
