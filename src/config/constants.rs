//! Configuration constants.
//!
//! This module defines the defaults and operational limits used throughout the
//! application.

use std::time::Duration;

/// Default resolver used for NS lookups, secondary validation and for
/// resolving name-server hostnames before a transfer.
pub const DEFAULT_NAMESERVER: &str = "8.8.8.8";

/// Default number of transfer workers.
pub const DEFAULT_WORKERS: usize = 8;

/// Port used for every query and every zone transfer.
pub const DNS_PORT: u16 = 53;

/// Default DNS query / zone transfer timeout in seconds.
///
/// Transfers of large zones stream many messages; the timeout applies to the
/// session setup and to each message, not to the whole transfer.
pub const DNS_TIMEOUT_SECS: u64 = 10;

/// Capacity of the work queue between the input reader and the workers.
///
/// Large enough that the reader is rarely the one waiting; correctness does not
/// depend on it.
pub const WORK_QUEUE_CAPACITY: usize = 1024;

/// Interval between progress log lines while domains are being processed.
pub const LOGGING_INTERVAL: Duration = Duration::from_secs(5);
