//! Name server discovery and A-record validation.

use super::exchange::{DnsExchange, QueryType};
use super::records::{fqdn, AnswerRecord};
use crate::error_handling::LookupError;

/// Queries the NS records of a domain.
///
/// # Returns
///
/// The name-server names in the order the resolver returned them. Records of
/// other types in the answer section are ignored.
///
/// # Errors
///
/// `LookupError::NoAnswer` if the answer section is empty, or
/// `LookupError::Query` if the exchange failed.
pub async fn lookup_ns(domain: &str, exchange: &dyn DnsExchange) -> Result<Vec<String>, LookupError> {
    let answers = exchange.query(&fqdn(domain), QueryType::Ns).await?;
    if answers.is_empty() {
        return Err(LookupError::NoAnswer);
    }

    Ok(answers
        .into_iter()
        .filter_map(|record| match record {
            AnswerRecord::Ns { nameserver, .. } => Some(nameserver),
            _ => None,
        })
        .collect())
}

/// Resolves a name to its IPv4 addresses.
///
/// Only A records are collected; anything else in the answer section (for
/// example the CNAME links of an alias chain) is ignored. Addresses are
/// returned sorted by their string form so results are reproducible.
///
/// # Errors
///
/// - `LookupError::NoAnswer` if the answer section is empty
/// - `LookupError::NoAddressRecord` if it holds no A records
/// - `LookupError::Query` if the exchange failed
pub async fn resolve_a(name: &str, exchange: &dyn DnsExchange) -> Result<Vec<String>, LookupError> {
    let answers = exchange.query(&fqdn(name), QueryType::A).await?;
    if answers.is_empty() {
        return Err(LookupError::NoAnswer);
    }

    let mut addresses: Vec<String> = answers
        .iter()
        .filter_map(|record| match record {
            AnswerRecord::A { address, .. } => Some(address.to_string()),
            _ => None,
        })
        .collect();

    if addresses.is_empty() {
        return Err(LookupError::NoAddressRecord);
    }
    addresses.sort();
    Ok(addresses)
}
