//! Main application modules.
//!
//! This module provides input line handling, progress logging, shutdown
//! handling, and statistics printing used by the run loop.

pub mod domain;
pub mod logging;
pub mod shutdown;
pub mod statistics;

// Re-export public API
pub use domain::parse_domain_line;
pub use logging::log_progress;
pub use shutdown::shutdown_gracefully;
pub use statistics::{print_error_statistics, print_simple_summary};
