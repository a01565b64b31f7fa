//! Shared worker context.
//!
//! `TransferContext` holds everything a transfer worker needs. One instance is
//! built per run and shared by all workers through an `Arc`.

use std::sync::Arc;

use crate::dns::{trim_root_dot, DnsExchange, ZoneTransfer};
use crate::error_handling::{ErrorType, InfoType, ProcessingStats};
use crate::output::HostnameSink;

/// Clients, output and counters shared by all transfer workers.
pub struct TransferContext {
    /// Query client for NS discovery and secondary validation
    pub exchange: Arc<dyn DnsExchange>,
    /// Zone transfer client
    pub transfer: Arc<dyn ZoneTransfer>,
    /// Where accepted hostnames are written
    pub sink: Arc<dyn HostnameSink>,
    /// Run counters
    pub stats: Arc<ProcessingStats>,
}

impl TransferContext {
    /// Bundles the clients, the output sink and the shared counters.
    pub fn new(
        exchange: Arc<dyn DnsExchange>,
        transfer: Arc<dyn ZoneTransfer>,
        sink: Arc<dyn HostnameSink>,
        stats: Arc<ProcessingStats>,
    ) -> Self {
        Self {
            exchange,
            transfer,
            sink,
            stats,
        }
    }

    /// Writes an accepted hostname without its trailing root dot.
    ///
    /// A write failure is logged and counted; it does not stop the worker.
    pub fn emit(&self, hostname: &str) {
        match self.sink.emit(trim_root_dot(hostname)) {
            Ok(()) => self.stats.increment_info(InfoType::HostnameEmitted),
            Err(e) => {
                log::warn!("Failed to write hostname {hostname}: {e}");
                self.stats.increment_error(ErrorType::OutputWriteError);
            }
        }
    }
}
