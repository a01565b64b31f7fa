//! Single request/response DNS queries.
//!
//! `DnsExchange` is the seam between the pipeline and the resolver library.
//! The production implementation wraps a hickory resolver pinned to the
//! configured nameserver.

use std::sync::Arc;

use async_trait::async_trait;
use hickory_resolver::error::ResolveErrorKind;
use hickory_resolver::proto::rr::RecordType;
use hickory_resolver::TokioAsyncResolver;

use super::records::AnswerRecord;
use crate::error_handling::LookupError;

/// Query types the pipeline issues.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum QueryType {
    /// Authoritative name servers of a zone.
    Ns,
    /// IPv4 addresses of a host.
    A,
}

impl From<QueryType> for RecordType {
    fn from(q: QueryType) -> Self {
        match q {
            QueryType::Ns => RecordType::NS,
            QueryType::A => RecordType::A,
        }
    }
}

/// Performs one DNS query and returns the answer section.
///
/// An empty answer section is `Ok(vec![])`; interpreting it is up to the
/// caller. `Err` is reserved for failures of the exchange itself.
#[async_trait]
pub trait DnsExchange: Send + Sync {
    async fn query(&self, name: &str, query_type: QueryType)
        -> Result<Vec<AnswerRecord>, LookupError>;
}

/// `DnsExchange` backed by a hickory resolver.
pub struct ResolverExchange {
    resolver: Arc<TokioAsyncResolver>,
}

impl ResolverExchange {
    /// Wraps a shared resolver.
    pub fn new(resolver: Arc<TokioAsyncResolver>) -> Self {
        Self { resolver }
    }
}

#[async_trait]
impl DnsExchange for ResolverExchange {
    async fn query(
        &self,
        name: &str,
        query_type: QueryType,
    ) -> Result<Vec<AnswerRecord>, LookupError> {
        match self.resolver.lookup(name, query_type.into()).await {
            Ok(lookup) => Ok(lookup
                .records()
                .iter()
                .map(AnswerRecord::from_record)
                .collect()),
            // NXDOMAIN and NODATA both arrive here; the answer section was empty.
            Err(e) if matches!(e.kind(), ResolveErrorKind::NoRecordsFound { .. }) => {
                Ok(Vec::new())
            }
            Err(e) => Err(LookupError::Query(e.to_string())),
        }
    }
}
