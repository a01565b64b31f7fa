//! domain_axfr library: hostname enumeration through DNS zone transfers
//!
//! For every input domain the library looks up the authoritative name servers,
//! asks each of them for a full zone transfer (AXFR), and turns the records it
//! receives into hostnames. Address and pointer records are trusted as they
//! are; NS, CNAME and SRV records are only reported once the name they point
//! to resolves to an IPv4 address.
//!
//! # Example
//!
//! ```no_run
//! use domain_axfr::{run_axfr, Config};
//! use std::path::PathBuf;
//!
//! # #[tokio::main]
//! # async fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let config = Config {
//!     file: PathBuf::from("domains.txt"),
//!     threads: 16,
//!     ..Default::default()
//! };
//!
//! let report = run_axfr(config).await?;
//! eprintln!("{} hostnames from {} domains", report.hostnames, report.domains);
//! # Ok(())
//! # }
//! ```
//!
//! # Requirements
//!
//! This library requires a Tokio runtime. Use `#[tokio::main]` in your application
//! or ensure you're calling library functions within an async context.

#![warn(missing_docs)]

mod app;
pub mod config;
pub mod dns;
pub mod error_handling;
pub mod initialization;
pub mod output;
mod run;

// Re-export public API
pub use config::{Config, LogFormat, LogLevel};
pub use initialization::init_context;
pub use run::{
    dispatch, open_domain_input, process_domain, run_axfr, DomainInput, RunReport, TransferContext,
};
