//! Error handling and processing statistics.
//!
//! This module provides:
//! - Error types for DNS lookups, zone transfers and initialization
//! - Processing statistics tracking (errors and info metrics)
//!
//! Nothing here aborts a run: lookup and transfer errors are returned to the
//! worker, which decides whether to log them or drop them silently, and the
//! counters below record what happened.

mod stats;
mod types;

// Re-export public API
pub use stats::ProcessingStats;
pub use types::{ErrorType, InfoType, InitializationError, LookupError, TransferError};
