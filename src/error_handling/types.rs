//! Error type definitions.
//!
//! This module defines the error types returned by the DNS layer and by
//! initialization, plus the counter categories tracked during a run.

use log::SetLoggerError;
use strum_macros::EnumIter as EnumIterMacro;
use thiserror::Error;

/// Error types for initialization failures.
#[derive(Error, Debug)]
#[allow(clippy::enum_variant_names)] // All variants end with "Error" by convention
pub enum InitializationError {
    /// Error initializing the logger.
    #[error("Logger initialization error: {0}")]
    LoggerError(#[from] SetLoggerError),

    /// Invalid configuration value.
    #[error("Configuration error: {0}")]
    ConfigError(String),
}

/// Failure of a single request/response DNS lookup.
///
/// Callers treat every variant the same way for validation (the candidate is
/// dropped); they are kept apart so the cause shows up in debug logs.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum LookupError {
    /// The answer section was empty.
    #[error("no answer")]
    NoAnswer,

    /// The answer section had records, but none of them were A records.
    #[error("no A record returned")]
    NoAddressRecord,

    /// The exchange itself failed (timeout, refused, network error, ...).
    #[error("query failed: {0}")]
    Query(String),
}

/// Failure of a zone transfer against one name server.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TransferError {
    /// The domain could not be turned into a DNS name.
    #[error("invalid zone name {0}: {1}")]
    InvalidName(String, String),

    /// The name server's own address could not be resolved.
    #[error("could not resolve name server {0}: {1}")]
    Resolve(String, String),

    /// TCP connection or client setup failed.
    #[error("connection to {0} failed: {1}")]
    Connect(String, String),

    /// The server refused the transfer or the session broke mid-stream.
    #[error("transfer from {0} failed: {1}")]
    Session(String, String),

    /// No response within the configured timeout.
    #[error("transfer from {0} timed out")]
    Timeout(String),
}

/// Failures counted during a run.
///
/// Each of these produces a `warn` log line when it happens.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumIterMacro)]
#[allow(clippy::enum_variant_names)]
pub enum ErrorType {
    /// NS query exchange failed.
    NsLookupError,
    /// NS query returned an empty answer section.
    NsNoAnswer,
    /// Zone transfer against one server failed.
    ZoneTransferError,
    /// Writing a hostname to the output failed.
    OutputWriteError,
}

/// Informational counters.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumIterMacro)]
pub enum InfoType {
    /// A hostname was written to the output.
    HostnameEmitted,
    /// A candidate failed secondary validation and was dropped.
    CandidateDiscarded,
    /// A record of a kind that never yields a hostname.
    RecordSkipped,
    /// A zone transfer completed without error.
    TransferSucceeded,
}

impl std::fmt::Display for ErrorType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl ErrorType {
    pub fn as_str(&self) -> &'static str {
        match self {
            ErrorType::NsLookupError => "NS lookup error",
            ErrorType::NsNoAnswer => "NS lookup returned no answer",
            ErrorType::ZoneTransferError => "Zone transfer error",
            ErrorType::OutputWriteError => "Output write error",
        }
    }
}

impl std::fmt::Display for InfoType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl InfoType {
    pub fn as_str(&self) -> &'static str {
        match self {
            InfoType::HostnameEmitted => "Hostnames emitted",
            InfoType::CandidateDiscarded => "Candidates discarded by validation",
            InfoType::RecordSkipped => "Records of unsupported type",
            InfoType::TransferSucceeded => "Successful zone transfers",
        }
    }
}

impl From<LookupError> for ErrorType {
    /// Maps a failed NS discovery to the counter it increments.
    fn from(e: LookupError) -> Self {
        match e {
            LookupError::NoAnswer | LookupError::NoAddressRecord => ErrorType::NsNoAnswer,
            LookupError::Query(_) => ErrorType::NsLookupError,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use strum::IntoEnumIterator;

    #[test]
    fn test_error_type_labels_are_unique() {
        let labels: Vec<&str> = ErrorType::iter().map(|e| e.as_str()).collect();
        let mut deduped = labels.clone();
        deduped.sort();
        deduped.dedup();
        assert_eq!(labels.len(), deduped.len());
    }

    #[test]
    fn test_lookup_error_messages() {
        assert_eq!(LookupError::NoAnswer.to_string(), "no answer");
        assert_eq!(
            LookupError::NoAddressRecord.to_string(),
            "no A record returned"
        );
        assert_eq!(
            LookupError::Query("timed out".into()).to_string(),
            "query failed: timed out"
        );
    }

    #[test]
    fn test_transfer_error_names_server() {
        let err = TransferError::Session("ns1.example.com.".into(), "Refused".into());
        assert!(err.to_string().contains("ns1.example.com."));
        assert!(err.to_string().contains("Refused"));
    }

    #[test]
    fn test_lookup_error_to_error_type() {
        assert_eq!(ErrorType::from(LookupError::NoAnswer), ErrorType::NsNoAnswer);
        assert_eq!(
            ErrorType::from(LookupError::Query("x".into())),
            ErrorType::NsLookupError
        );
    }
}
