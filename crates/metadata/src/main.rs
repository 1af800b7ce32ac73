//! Eight Clans metadata CLI
//!
//! Generates the full metadata set for the collection as one JSON file per
//! token id.

use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;
use tracing_subscriber::EnvFilter;

use eightclans_metadata::Generator;

#[derive(Parser)]
#[command(name = "eightclans-meta")]
#[command(version = "1.0.0")]
#[command(about = "Generate the Eight Clans token metadata set", long_about = None)]
struct Cli {
    /// Output directory for the generated JSON files
    #[arg(short, long, default_value = "metadata")]
    output: PathBuf,

    /// Content-addressed base URI of the token images, without a trailing
    /// slash; point this at the pinned image directory before publishing
    #[arg(short, long, default_value = "ipfs://eightclans")]
    base_uri: String,

    /// Verbose logging
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let default_level = if cli.verbose { "debug" } else { "info" };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level)),
        )
        .init();

    tracing::info!(base_uri = %cli.base_uri, "generating collection metadata");

    let generator = Generator::new(cli.base_uri);
    let written = generator
        .write_collection(&cli.output)
        .with_context(|| format!("writing metadata into {}", cli.output.display()))?;

    tracing::info!(
        count = written,
        dir = %cli.output.display(),
        "metadata generation complete"
    );

    Ok(())
}
