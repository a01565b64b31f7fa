// Shared test helpers: in-memory DNS clients and a collecting output sink.
//
// The fakes answer from fixed tables so the pipeline can be exercised without
// any network access.

use async_trait::async_trait;
use futures::stream::{self, StreamExt};
use std::collections::HashMap;
use std::io;
use std::net::Ipv4Addr;
use std::sync::{Arc, Mutex};

use domain_axfr::dns::{AnswerRecord, DnsExchange, QueryType, RecordBatches, ZoneTransfer};
use domain_axfr::error_handling::{LookupError, ProcessingStats, TransferError};
use domain_axfr::output::HostnameSink;
use domain_axfr::TransferContext;

/// Query client answering from a table keyed by (fully-qualified name, type).
///
/// Unknown queries get an empty answer section.
#[derive(Default)]
pub struct FakeExchange {
    answers: HashMap<(String, QueryType), Result<Vec<AnswerRecord>, LookupError>>,
}

#[allow(dead_code)]
impl FakeExchange {
    pub fn ns(mut self, domain: &str, servers: &[&str]) -> Self {
        let records = servers
            .iter()
            .map(|s| AnswerRecord::Ns {
                owner: domain.to_string(),
                nameserver: s.to_string(),
            })
            .collect();
        self.answers
            .insert((domain.to_string(), QueryType::Ns), Ok(records));
        self
    }

    pub fn a(mut self, name: &str, addresses: &[[u8; 4]]) -> Self {
        let records = addresses
            .iter()
            .map(|ip| AnswerRecord::A {
                owner: name.to_string(),
                address: Ipv4Addr::from(*ip),
            })
            .collect();
        self.answers.insert((name.to_string(), QueryType::A), Ok(records));
        self
    }

    pub fn fail(mut self, name: &str, query_type: QueryType, reason: &str) -> Self {
        self.answers.insert(
            (name.to_string(), query_type),
            Err(LookupError::Query(reason.to_string())),
        );
        self
    }
}

#[async_trait]
impl DnsExchange for FakeExchange {
    async fn query(
        &self,
        name: &str,
        query_type: QueryType,
    ) -> Result<Vec<AnswerRecord>, LookupError> {
        self.answers
            .get(&(name.to_string(), query_type))
            .cloned()
            .unwrap_or(Ok(Vec::new()))
    }
}

type Batches = Vec<Result<Vec<AnswerRecord>, TransferError>>;

/// Transfer client answering from a table keyed by (domain, server).
///
/// Unknown pairs fail as refused. Every attempt is recorded.
#[derive(Default)]
pub struct FakeTransfer {
    zones: HashMap<(String, String), Result<Batches, TransferError>>,
    pub attempts: Mutex<Vec<(String, String)>>,
}

#[allow(dead_code)]
impl FakeTransfer {
    pub fn zone(mut self, domain: &str, server: &str, batches: Vec<Vec<AnswerRecord>>) -> Self {
        self.zones.insert(
            (domain.to_string(), server.to_string()),
            Ok(batches.into_iter().map(Ok).collect()),
        );
        self
    }

    pub fn batches(mut self, domain: &str, server: &str, batches: Batches) -> Self {
        self.zones
            .insert((domain.to_string(), server.to_string()), Ok(batches));
        self
    }

    pub fn refuse(mut self, domain: &str, server: &str) -> Self {
        self.zones.insert(
            (domain.to_string(), server.to_string()),
            Err(TransferError::Session(server.to_string(), "REFUSED".into())),
        );
        self
    }
}

#[async_trait]
impl ZoneTransfer for FakeTransfer {
    async fn transfer(&self, domain: &str, server: &str) -> Result<RecordBatches, TransferError> {
        self.attempts
            .lock()
            .unwrap()
            .push((domain.to_string(), server.to_string()));
        match self.zones.get(&(domain.to_string(), server.to_string())) {
            Some(Ok(batches)) => Ok(stream::iter(batches.clone()).boxed()),
            Some(Err(e)) => Err(e.clone()),
            None => Err(TransferError::Connect(
                server.to_string(),
                "connection refused".into(),
            )),
        }
    }
}

/// Sink keeping every emitted line in memory.
#[derive(Default)]
pub struct CollectingSink {
    lines: Mutex<Vec<String>>,
}

#[allow(dead_code)]
impl CollectingSink {
    pub fn lines(&self) -> Vec<String> {
        self.lines.lock().unwrap().clone()
    }
}

impl HostnameSink for CollectingSink {
    fn emit(&self, hostname: &str) -> io::Result<()> {
        self.lines.lock().unwrap().push(hostname.to_string());
        Ok(())
    }
}

/// Builds a context from the fakes, returning the sink for inspection.
#[allow(dead_code)]
pub fn context(
    exchange: FakeExchange,
    transfer: Arc<FakeTransfer>,
) -> (Arc<TransferContext>, Arc<CollectingSink>) {
    let sink = Arc::new(CollectingSink::default());
    let ctx = Arc::new(TransferContext::new(
        Arc::new(exchange),
        transfer,
        sink.clone(),
        Arc::new(ProcessingStats::new()),
    ));
    (ctx, sink)
}

#[allow(dead_code)]
pub fn a(owner: &str, ip: [u8; 4]) -> AnswerRecord {
    AnswerRecord::A {
        owner: owner.to_string(),
        address: Ipv4Addr::from(ip),
    }
}

#[allow(dead_code)]
pub fn cname(owner: &str, target: &str) -> AnswerRecord {
    AnswerRecord::Cname {
        owner: owner.to_string(),
        target: target.to_string(),
    }
}

#[allow(dead_code)]
pub fn srv(owner: &str, target: &str) -> AnswerRecord {
    AnswerRecord::Srv {
        owner: owner.to_string(),
        target: target.to_string(),
    }
}

#[allow(dead_code)]
pub fn ns(owner: &str, nameserver: &str) -> AnswerRecord {
    AnswerRecord::Ns {
        owner: owner.to_string(),
        nameserver: nameserver.to_string(),
    }
}

#[allow(dead_code)]
pub fn other(owner: &str, record_type: &str) -> AnswerRecord {
    AnswerRecord::Other {
        owner: owner.to_string(),
        record_type: record_type.to_string(),
    }
}
