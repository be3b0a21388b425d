use anyhow::Result;
use clap::Parser;
use persona_store::{StoreConfig, CLI};
use std::path::PathBuf;

/// Write a sample batch of records to a binary file, read it back and count matches.
#[derive(Parser, Debug)]
#[command(name = "persona_store", version)]
struct Args {
    /// Data file to write and read back
    #[arg(short, long)]
    path: Option<PathBuf>,

    /// Name to count in the loaded batch
    #[arg(short, long)]
    name: Option<String>,

    /// JSON config file; flags take precedence over it
    #[arg(short, long)]
    config: Option<PathBuf>,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse();

    let config = match &args.config {
        Some(path) => StoreConfig::from_json_file(path)?,
        None => StoreConfig::default(),
    }
    .with_overrides(args.path, args.name);
    tracing::debug!("using config {:?}", config);

    let cli = CLI::new(config);
    if cli.run().is_err() {
        // Already reported on stdout.
        std::process::exit(1);
    }
    Ok(())
}
