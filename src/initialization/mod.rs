//! Application initialization and resource setup.
//!
//! This module provides functions to initialize the shared resources of a run:
//! - Logger
//! - DNS resolver
//! - Query and transfer clients, bundled into the worker context

mod logger;
mod resolver;

use std::sync::Arc;
use std::time::Duration;

use crate::config::Config;
use crate::dns::{AxfrClient, ResolverExchange};
use crate::error_handling::ProcessingStats;
use crate::output::HostnameSink;
use crate::run::TransferContext;

// Re-export public API
pub use logger::init_logger_with;
pub use resolver::init_resolver;

/// Builds the context shared by all workers from the configuration.
///
/// One resolver serves both the query client and the name-server address
/// lookups of the transfer client.
pub fn init_context(config: &Config, sink: Arc<dyn HostnameSink>) -> Arc<TransferContext> {
    let timeout = Duration::from_secs(config.timeout_seconds);
    let resolver = init_resolver(config.nameserver, timeout);

    Arc::new(TransferContext::new(
        Arc::new(ResolverExchange::new(Arc::clone(&resolver))),
        Arc::new(AxfrClient::new(resolver, timeout)),
        sink,
        Arc::new(ProcessingStats::new()),
    ))
}
