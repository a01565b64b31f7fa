//! Run input initialization.

use anyhow::{Context, Result};
use log::info;
use tokio::io::{AsyncBufRead, BufReader};

use crate::config::Config;

/// Boxed line source, either stdin or a file.
pub type DomainInput = Box<dyn AsyncBufRead + Unpin + Send>;

/// Opens the domain list named by the configuration (`-` for stdin).
///
/// # Errors
///
/// Returns an error if the input file cannot be opened.
pub async fn open_domain_input(config: &Config) -> Result<DomainInput> {
    if config.reads_stdin() {
        info!("Reading domains from stdin");
        return Ok(Box::new(BufReader::new(tokio::io::stdin())));
    }

    let file = tokio::fs::File::open(&config.file)
        .await
        .with_context(|| format!("Failed to open input file {}", config.file.display()))?;
    info!("Reading domains from {}", config.file.display());
    Ok(Box::new(BufReader::new(file)))
}
