//! Progress logging utilities.

use log::info;

use crate::error_handling::{InfoType, ProcessingStats};

/// Logs how many domains have been processed so far.
///
/// # Arguments
///
/// * `start_time` - The start time of processing
/// * `stats` - Shared run statistics
pub fn log_progress(start_time: std::time::Instant, stats: &ProcessingStats) {
    let elapsed_secs = start_time.elapsed().as_secs_f64();
    let completed = stats.domains_done();
    let rate = if elapsed_secs > 0.0 {
        completed as f64 / elapsed_secs
    } else {
        0.0
    };
    info!(
        "Processed {} domains in {:.2} seconds (~{:.2} domains/sec), {} hostnames so far",
        completed,
        elapsed_secs,
        rate,
        stats.get_info_count(InfoType::HostnameEmitted)
    );
}
