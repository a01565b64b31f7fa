//! Run orchestration.
//!
//! The dispatcher reads domains line by line and feeds them into one queue
//! shared by a fixed pool of transfer workers. Once the input is exhausted the
//! queue is closed, the workers drain it, and the dispatcher joins them all
//! before producing the report.

mod finalize;
mod init;
mod resources;
mod task;

use std::sync::Arc;

use anyhow::{Context, Result};
use log::{error, info, warn};
use tokio::io::{AsyncBufRead, AsyncBufReadExt};
use tokio::sync::{mpsc, Mutex};
use tokio_util::sync::CancellationToken;

use crate::app::{log_progress, parse_domain_line};
use crate::config::{Config, LOGGING_INTERVAL, WORK_QUEUE_CAPACITY};
use crate::error_handling::{InitializationError, ProcessingStats};
use crate::initialization::init_context;
use crate::output::stdout_sink;

pub use init::{open_domain_input, DomainInput};
pub use resources::TransferContext;
pub use task::{process_domain, transfer_worker};

/// Receiving end of the work queue, shared by all workers.
pub type WorkQueue = Arc<Mutex<mpsc::Receiver<String>>>;

/// Summary of a completed run.
#[derive(Debug, Clone)]
pub struct RunReport {
    /// Number of domains read from the input
    pub domains: usize,
    /// Number of hostnames written to the output
    pub hostnames: usize,
    /// Domains whose NS lookup failed or returned nothing
    pub discovery_failures: usize,
    /// Failed zone transfers, counted per server
    pub transfer_failures: usize,
    /// Elapsed time in seconds
    pub elapsed_seconds: f64,
}

/// Handle on the background progress logger.
pub struct ProgressLogger {
    cancel: CancellationToken,
    task: Option<tokio::task::JoinHandle<()>>,
}

fn start_progress_logger(stats: Arc<ProcessingStats>, start_time: std::time::Instant) -> ProgressLogger {
    let cancel = CancellationToken::new();
    let token = cancel.clone();
    let task = tokio::spawn(async move {
        let mut interval = tokio::time::interval_at(
            tokio::time::Instant::now() + LOGGING_INTERVAL,
            LOGGING_INTERVAL,
        );
        loop {
            tokio::select! {
                _ = token.cancelled() => break,
                _ = interval.tick() => log_progress(start_time, &stats),
            }
        }
    });
    ProgressLogger {
        cancel,
        task: Some(task),
    }
}

/// Reads domains from `input` and processes them with `concurrency` workers.
///
/// Returns once the input is exhausted and every worker has exited. Failures
/// of individual domains, servers or records never end the run early; they
/// are logged and counted in the report.
///
/// # Example
///
/// ```no_run
/// use domain_axfr::{dispatch, init_context, Config};
/// use domain_axfr::output::stdout_sink;
/// use std::sync::Arc;
///
/// # async fn example() {
/// let config = Config::default();
/// let ctx = init_context(&config, Arc::new(stdout_sink()));
/// let input: &[u8] = b"example.com\nexample.org\n";
/// let report = dispatch(input, ctx, 4).await;
/// println!("{} hostnames", report.hostnames);
/// # }
/// ```
pub async fn dispatch<R>(input: R, ctx: Arc<TransferContext>, concurrency: usize) -> RunReport
where
    R: AsyncBufRead + Unpin,
{
    let start_time = std::time::Instant::now();
    let progress = start_progress_logger(Arc::clone(&ctx.stats), start_time);

    let (sender, receiver) = mpsc::channel::<String>(WORK_QUEUE_CAPACITY);
    let queue: WorkQueue = Arc::new(Mutex::new(receiver));

    let workers: Vec<_> = (0..concurrency.max(1))
        .map(|id| tokio::spawn(transfer_worker(id, Arc::clone(&queue), Arc::clone(&ctx))))
        .collect();
    info!("Started {} transfer workers", workers.len());

    let mut domains = 0usize;
    let mut lines = input.lines();
    loop {
        let line = match lines.next_line().await {
            Ok(Some(line)) => line,
            Ok(None) => break,
            // Invalid UTF-8 only spoils the one line; anything else ends the input.
            Err(e) if e.kind() == std::io::ErrorKind::InvalidData => {
                warn!("Skipping unreadable input line: {e}");
                continue;
            }
            Err(e) => {
                warn!("Failed to read input, stopping: {e}");
                break;
            }
        };

        let Some(domain) = parse_domain_line(&line) else {
            continue;
        };

        if sender.send(domain.to_string()).await.is_err() {
            error!("All transfer workers have exited; ignoring remaining input");
            break;
        }
        domains += 1;
    }

    // Closing the sender lets the workers drain the queue and exit.
    drop(sender);
    for (id, worker) in workers.into_iter().enumerate() {
        if let Err(e) = worker.await {
            error!("Transfer worker {id} terminated abnormally: {e}");
        }
    }

    finalize::finalize_run(&ctx.stats, domains, progress, start_time).await
}

/// Runs a full enumeration with the given configuration.
///
/// Reads domains from the configured file or stdin and writes hostnames to
/// stdout.
///
/// # Errors
///
/// Returns an error if the configuration is invalid or the input cannot be
/// opened. Lookup and transfer failures are not errors.
pub async fn run_axfr(config: Config) -> Result<RunReport> {
    config
        .validate()
        .map_err(InitializationError::ConfigError)
        .context("Configuration validation failed")?;

    let input = open_domain_input(&config)
        .await
        .context("Failed to open domain input")?;

    info!(
        "Using nameserver {} with {} workers",
        config.nameserver, config.threads
    );
    let ctx = init_context(&config, Arc::new(stdout_sink()));

    Ok(dispatch(input, ctx, config.threads).await)
}
