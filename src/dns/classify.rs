//! Record classification.
//!
//! Address and pointer records carry their own resolution and are accepted
//! as they are. NS, CNAME and SRV records point at another name, which must
//! resolve to at least one IPv4 address before the candidate is trusted;
//! otherwise a transferred zone would leak dangling names.

use super::exchange::DnsExchange;
use super::lookup::resolve_a;
use super::records::AnswerRecord;

/// Outcome of classifying one answer record.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Classification {
    /// Emit `hostname` as is.
    Accept(String),
    /// Emit `hostname` only if `target` resolves to an address.
    Confirm { hostname: String, target: String },
    /// The record never yields a hostname.
    Reject,
}

/// Decides which hostname, if any, a record yields.
pub fn classify(record: &AnswerRecord) -> Classification {
    match record {
        AnswerRecord::A { owner, .. } | AnswerRecord::Aaaa { owner, .. } => {
            Classification::Accept(owner.clone())
        }
        AnswerRecord::Ptr { target, .. } => Classification::Accept(target.clone()),
        AnswerRecord::Ns { nameserver, .. } => Classification::Confirm {
            hostname: nameserver.clone(),
            target: nameserver.clone(),
        },
        // The alias is what gets emitted; the canonical name only proves it is live.
        AnswerRecord::Cname { owner, target } => Classification::Confirm {
            hostname: owner.clone(),
            target: target.clone(),
        },
        AnswerRecord::Srv { target, .. } => Classification::Confirm {
            hostname: target.clone(),
            target: target.clone(),
        },
        AnswerRecord::Other { .. } => Classification::Reject,
    }
}

/// Why a record produced no hostname.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Skipped {
    /// Record kind never yields a hostname.
    Unclassified,
    /// Confirmation lookup returned no address or failed.
    Unconfirmed(String),
}

/// Classifies `record` and runs the confirmation lookup when one is needed.
///
/// # Returns
///
/// The hostname to emit (still fully qualified), or why there is none.
/// Validation failures are ordinary negatives here, never errors.
pub async fn accept_record(
    record: &AnswerRecord,
    exchange: &dyn DnsExchange,
) -> Result<String, Skipped> {
    match classify(record) {
        Classification::Accept(hostname) => Ok(hostname),
        Classification::Confirm { hostname, target } => match resolve_a(&target, exchange).await {
            Ok(addresses) if !addresses.is_empty() => Ok(hostname),
            Ok(_) => Err(Skipped::Unconfirmed(format!("{target}: no addresses"))),
            Err(e) => Err(Skipped::Unconfirmed(format!("{target}: {e}"))),
        },
        Classification::Reject => Err(Skipped::Unclassified),
    }
}
