//! Configuration types and CLI options.
//!
//! This module defines enums and structs used for command-line argument parsing
//! and configuration.

use std::net::IpAddr;
use std::path::PathBuf;

use clap::{Parser, ValueEnum};

use crate::config::constants::{DEFAULT_NAMESERVER, DEFAULT_WORKERS, DNS_TIMEOUT_SECS};

/// Logging level for the application.
///
/// Controls the verbosity of log output, from most restrictive (Error) to most
/// verbose (Trace).
#[derive(Clone, Debug, ValueEnum)]
pub enum LogLevel {
    /// Only error messages
    Error,
    /// Error and warning messages
    Warn,
    /// Error, warning, and informational messages
    Info,
    /// All messages except trace
    Debug,
    /// All messages including trace
    Trace,
}

impl From<LogLevel> for log::LevelFilter {
    fn from(l: LogLevel) -> Self {
        match l {
            LogLevel::Error => log::LevelFilter::Error,
            LogLevel::Warn => log::LevelFilter::Warn,
            LogLevel::Info => log::LevelFilter::Info,
            LogLevel::Debug => log::LevelFilter::Debug,
            LogLevel::Trace => log::LevelFilter::Trace,
        }
    }
}

/// Log output format.
///
/// - `Plain`: Human-readable format with colors (default)
/// - `Json`: Structured JSON format for machine parsing
#[derive(Clone, Debug, ValueEnum)]
pub enum LogFormat {
    /// Human-readable format with colors (default)
    Plain,
    /// Structured JSON format for machine parsing
    Json,
}

/// Application configuration.
///
/// Parsed from the command line by the binary, or constructed directly when the
/// crate is used as a library.
///
/// # Examples
///
/// ```no_run
/// use domain_axfr::Config;
/// use std::path::PathBuf;
///
/// let config = Config {
///     file: PathBuf::from("domains.txt"),
///     threads: 16,
///     ..Default::default()
/// };
/// ```
#[derive(Debug, Clone, Parser)]
#[command(
    name = "domain_axfr",
    version,
    about = "Attempts zone transfers for each input domain and prints the hostnames found"
)]
pub struct Config {
    /// File to read domains from, one per line (`-` reads stdin)
    #[arg(value_parser, default_value = "-")]
    pub file: PathBuf,

    /// Nameserver used for DNS lookups
    #[arg(long = "ns", default_value = DEFAULT_NAMESERVER)]
    pub nameserver: IpAddr,

    /// Number of transfer workers
    #[arg(short = 't', long, default_value_t = DEFAULT_WORKERS)]
    pub threads: usize,

    /// Timeout in seconds for each DNS query and zone transfer message
    #[arg(long, default_value_t = DNS_TIMEOUT_SECS)]
    pub timeout_seconds: u64,

    /// Log level
    #[arg(long, value_enum, default_value_t = LogLevel::Info)]
    pub log_level: LogLevel,

    /// Log format
    #[arg(long, value_enum, default_value_t = LogFormat::Plain)]
    pub log_format: LogFormat,
}

impl Config {
    /// Checks the values clap cannot express as types.
    ///
    /// # Errors
    ///
    /// Returns a description of the first invalid setting.
    pub fn validate(&self) -> Result<(), String> {
        if self.threads == 0 {
            return Err("--threads must be at least 1".to_string());
        }
        if self.timeout_seconds == 0 {
            return Err("--timeout-seconds must be at least 1".to_string());
        }
        Ok(())
    }

    /// Whether domains are read from stdin rather than a file.
    pub fn reads_stdin(&self) -> bool {
        self.file.as_os_str() == "-"
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            file: PathBuf::from("-"),
            nameserver: IpAddr::from([8, 8, 8, 8]),
            threads: DEFAULT_WORKERS,
            timeout_seconds: DNS_TIMEOUT_SECS,
            log_level: LogLevel::Info,
            log_format: LogFormat::Plain,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_log_level_conversion() {
        assert_eq!(
            log::LevelFilter::from(LogLevel::Error),
            log::LevelFilter::Error
        );
        assert_eq!(
            log::LevelFilter::from(LogLevel::Warn),
            log::LevelFilter::Warn
        );
        assert_eq!(
            log::LevelFilter::from(LogLevel::Info),
            log::LevelFilter::Info
        );
        assert_eq!(
            log::LevelFilter::from(LogLevel::Debug),
            log::LevelFilter::Debug
        );
        assert_eq!(
            log::LevelFilter::from(LogLevel::Trace),
            log::LevelFilter::Trace
        );
    }

    #[test]
    fn test_config_default() {
        let config = Config::default();
        assert_eq!(config.threads, 8);
        assert_eq!(config.timeout_seconds, 10);
        assert_eq!(config.nameserver.to_string(), DEFAULT_NAMESERVER);
        assert!(config.reads_stdin());
    }

    #[test]
    fn test_default_matches_cli_defaults() {
        let parsed = Config::try_parse_from(["domain_axfr"]).unwrap();
        let default = Config::default();
        assert_eq!(parsed.file, default.file);
        assert_eq!(parsed.nameserver, default.nameserver);
        assert_eq!(parsed.threads, default.threads);
        assert_eq!(parsed.timeout_seconds, default.timeout_seconds);
    }

    #[test]
    fn test_validate_rejects_zero_threads() {
        let config = Config {
            threads: 0,
            ..Default::default()
        };
        let err = config.validate().unwrap_err();
        assert!(err.contains("--threads"));
    }

    #[test]
    fn test_validate_rejects_zero_timeout() {
        let config = Config {
            timeout_seconds: 0,
            ..Default::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validate_accepts_defaults() {
        assert!(Config::default().validate().is_ok());
    }
}
