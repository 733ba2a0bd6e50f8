// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use clap::Parser;
use random_reader_core::{DynReader, ReaderConfig};
use std::path::PathBuf;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(author, version, about = "Print pseudo-random device readings")]
struct Args {
    /// Reader configuration (JSON). Defaults are used if it cannot be loaded.
    #[arg(long, default_value = "reader.json")]
    config: PathBuf,

    #[arg(long, default_value_t = 1, allow_negative_numbers = true)]
    device: i32,

    #[arg(long)]
    model: Option<String>,

    /// Number of readings to print
    #[arg(long, default_value_t = 1)]
    count: usize,
}

fn init_logging() {
    // Quiet by default, overridable via RUST_LOG.
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_writer(std::io::stderr)
        .init();
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    init_logging();
    let args = Args::parse();

    let config = match ReaderConfig::load(&args.config) {
        Ok(config) => config,
        Err(e) => {
            warn!(error = %e, "Using default reader configuration");
            ReaderConfig::default()
        }
    };
    info!(?config, "Reader configured");

    let mut reader = DynReader::from_config(&config)?;
    for _ in 0..args.count {
        println!("{}", reader.read(args.device, args.model.as_deref()));
    }
    Ok(())
}
