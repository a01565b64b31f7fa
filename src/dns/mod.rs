//! DNS lookups, zone transfers and record classification.
//!
//! This module provides:
//! - `DnsExchange` / `ZoneTransfer`: the query and transfer clients, with
//!   hickory-backed implementations
//! - Name server discovery (`lookup_ns`) and A-record validation (`resolve_a`)
//! - `AnswerRecord` and the rules deciding which records yield a hostname

mod classify;
mod exchange;
mod lookup;
mod records;
mod transfer;

// Re-export public API
pub use classify::{accept_record, classify, Classification, Skipped};
pub use exchange::{DnsExchange, QueryType, ResolverExchange};
pub use lookup::{lookup_ns, resolve_a};
pub use records::{fqdn, trim_root_dot, AnswerRecord};
pub use transfer::{AxfrClient, RecordBatches, ZoneTransfer};
