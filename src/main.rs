//! Main application entry point (CLI binary).
//!
//! This is a thin wrapper around the `domain_axfr` library that handles:
//! - Command-line argument parsing
//! - Logger initialization
//!
//! Hostnames go to stdout, everything else to stderr. The exit status is 0
//! whenever the input could be read, however many lookups failed.

use anyhow::{Context, Result};
use clap::Parser;
use std::process;

use domain_axfr::initialization::init_logger_with;
use domain_axfr::{run_axfr, Config};

#[tokio::main]
async fn main() -> Result<()> {
    let config = Config::parse();

    init_logger_with(config.log_level.clone().into(), config.log_format.clone())
        .context("Failed to initialize logger")?;

    if let Err(e) = run_axfr(config).await {
        eprintln!("domain_axfr error: {:#}", e);
        process::exit(1);
    }
    Ok(())
}
