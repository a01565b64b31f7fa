//! Per-domain processing.
//!
//! A transfer worker takes domains off the shared queue until it is closed
//! and drained. For each domain it discovers the name servers, asks every one
//! of them for a zone transfer, and emits the hostnames found. Every failure
//! stays inside the smallest scope it affects: one domain, one server, or one
//! record.

use std::sync::Arc;

use futures::StreamExt;
use log::{debug, trace, warn};

use crate::dns::{accept_record, lookup_ns, Skipped};
use crate::error_handling::{ErrorType, InfoType, TransferError};

use super::resources::TransferContext;
use super::WorkQueue;

/// Consumes domains from `queue` until it is closed and empty.
pub async fn transfer_worker(id: usize, queue: WorkQueue, ctx: Arc<TransferContext>) {
    loop {
        // The lock is only held while waiting for the next item.
        let next = queue.lock().await.recv().await;
        let Some(domain) = next else {
            break;
        };
        process_domain(&domain, &ctx).await;
        ctx.stats.domain_done();
    }
    debug!("Transfer worker {id} finished");
}

/// Runs discovery and transfers for one domain.
///
/// Discovery and transfer failures are logged at `warn` and counted.
pub async fn process_domain(domain: &str, ctx: &TransferContext) {
    let servers = match lookup_ns(domain, ctx.exchange.as_ref()).await {
        Ok(servers) => servers,
        Err(e) => {
            warn!("Error looking up NS records for {domain}: {e}");
            ctx.stats.increment_error(e.into());
            return;
        }
    };

    for server in &servers {
        match transfer_from(domain, server, ctx).await {
            Ok(()) => ctx.stats.increment_info(InfoType::TransferSucceeded),
            Err(e) => {
                warn!("Error transferring {domain}: {e}");
                ctx.stats.increment_error(ErrorType::ZoneTransferError);
            }
        }
    }
}

/// Transfers `domain` from one server and emits hostnames in record order.
///
/// Hostnames emitted before a mid-transfer failure stay emitted.
async fn transfer_from(
    domain: &str,
    server: &str,
    ctx: &TransferContext,
) -> Result<(), TransferError> {
    let mut batches = ctx.transfer.transfer(domain, server).await?;

    while let Some(batch) = batches.next().await {
        for record in batch? {
            match accept_record(&record, ctx.exchange.as_ref()).await {
                Ok(hostname) => ctx.emit(&hostname),
                Err(Skipped::Unconfirmed(reason)) => {
                    debug!("Discarding candidate from {server}: {reason}");
                    ctx.stats.increment_info(InfoType::CandidateDiscarded);
                }
                Err(Skipped::Unclassified) => {
                    trace!("Skipping record for {} from {server}", record.owner());
                    ctx.stats.increment_info(InfoType::RecordSkipped);
                }
            }
        }
    }

    Ok(())
}
