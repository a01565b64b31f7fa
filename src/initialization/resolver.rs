//! DNS resolver initialization.
//!
//! This module provides functions to initialize the DNS resolver with proper
//! timeout configuration.

use std::net::IpAddr;
use std::sync::Arc;
use std::time::Duration;

use hickory_resolver::config::{NameServerConfigGroup, ResolverConfig, ResolverOpts};
use hickory_resolver::TokioAsyncResolver;

use crate::config::DNS_PORT;

/// Initializes the DNS resolver used for every NS and A lookup.
///
/// The resolver talks only to `nameserver` on port 53 (UDP with TCP
/// fallback). Caching is disabled so each lookup is a fresh exchange, and the
/// hosts file and search domains are ignored.
///
/// # Arguments
///
/// * `nameserver` - Address of the DNS server to query
/// * `timeout` - Per-query timeout
///
/// # Returns
///
/// A configured `TokioAsyncResolver` wrapped in `Arc` for sharing across tasks.
pub fn init_resolver(nameserver: IpAddr, timeout: Duration) -> Arc<TokioAsyncResolver> {
    let servers = NameServerConfigGroup::from_ips_clear(&[nameserver], DNS_PORT, true);
    let config = ResolverConfig::from_parts(None, vec![], servers);

    let mut opts = ResolverOpts::default();
    opts.timeout = timeout;
    opts.attempts = 1; // No retries: a failed lookup is simply logged or skipped
    opts.ndots = 0;
    opts.cache_size = 0;
    opts.use_hosts_file = false;

    Arc::new(TokioAsyncResolver::tokio(config, opts))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_init_resolver_builds_without_network() {
        let resolver = init_resolver(IpAddr::from([127, 0, 0, 1]), Duration::from_secs(1));
        assert_eq!(Arc::strong_count(&resolver), 1);
    }
}
