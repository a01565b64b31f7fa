//! Run finalization.
//!
//! Stops the progress logger, prints the statistics and builds the report.

use crate::app::{log_progress, print_error_statistics, print_simple_summary, shutdown_gracefully};
use crate::error_handling::{ErrorType, InfoType, ProcessingStats};

use super::{ProgressLogger, RunReport};

/// Finalize a run and produce the report.
///
/// # Arguments
///
/// * `stats` - Counters filled in by the workers, which have all exited
/// * `domains` - Number of domains queued by the dispatcher
/// * `progress` - The progress logging task to stop
/// * `start_time` - When dispatching started
pub async fn finalize_run(
    stats: &ProcessingStats,
    domains: usize,
    progress: ProgressLogger,
    start_time: std::time::Instant,
) -> RunReport {
    shutdown_gracefully(progress.cancel, progress.task).await;
    log_progress(start_time, stats);

    let report = RunReport {
        domains,
        hostnames: stats.get_info_count(InfoType::HostnameEmitted),
        discovery_failures: stats.get_error_count(ErrorType::NsLookupError)
            + stats.get_error_count(ErrorType::NsNoAnswer),
        transfer_failures: stats.get_error_count(ErrorType::ZoneTransferError),
        elapsed_seconds: start_time.elapsed().as_secs_f64(),
    };

    print_error_statistics(stats);
    print_simple_summary(
        report.domains,
        report.hostnames,
        report.discovery_failures + report.transfer_failures,
        report.elapsed_seconds,
    );

    report
}
