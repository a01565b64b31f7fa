//! Hostname output.
//!
//! Workers share one sink. Each hostname is written as a whole line under a
//! lock, so concurrent writers never interleave partial lines; no other
//! ordering is imposed.

use std::io::{self, Write};
use std::sync::Mutex;

/// Destination for accepted hostnames.
pub trait HostnameSink: Send + Sync {
    /// Writes one hostname as a single line.
    fn emit(&self, hostname: &str) -> io::Result<()>;
}

/// Line-atomic sink over any writer.
pub struct LineSink<W: Write + Send> {
    writer: Mutex<W>,
}

impl<W: Write + Send> LineSink<W> {
    /// Wraps `writer`.
    pub fn new(writer: W) -> Self {
        Self {
            writer: Mutex::new(writer),
        }
    }

    /// Returns the writer, for inspecting what was written.
    pub fn into_inner(self) -> W {
        self.writer
            .into_inner()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}

impl<W: Write + Send> HostnameSink for LineSink<W> {
    fn emit(&self, hostname: &str) -> io::Result<()> {
        // A panic while holding the lock cannot leave a partial line behind,
        // since the line goes out in a single write.
        let mut writer = self
            .writer
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner());
        writer.write_all(format!("{hostname}\n").as_bytes())?;
        writer.flush()
    }
}

/// Sink writing to the process's standard output.
pub fn stdout_sink() -> LineSink<io::Stdout> {
    LineSink::new(io::stdout())
}
