//! Operations endpoint host binary
//!
//! Loads configuration, assembles the service through the composition
//! root, and hosts it until interrupted.

use anyhow::Context;
use clap::Parser;

/// Command line interface for the operations endpoint host
#[derive(Parser, Debug)]
#[command(name = "ophost")]
#[command(about = "Hosts the dependency-injected operations service over HTTP")]
#[command(version)]
pub struct Cli {
    /// Path to configuration file
    #[arg(short, long)]
    pub config: Option<std::path::PathBuf>,

    /// Override the configured listener port
    #[arg(long)]
    pub port: Option<u16>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    ophost_server::run(cli.config.as_deref(), cli.port)
        .await
        .context("endpoint host exited with an error")
}
