//! Answer records and name helpers.
//!
//! `AnswerRecord` is the only record representation the pipeline sees. The
//! hickory types stop at `AnswerRecord::from_record`.

use std::net::{Ipv4Addr, Ipv6Addr};

use hickory_resolver::proto::rr::{RData, Record};

/// One answer record, reduced to the fields classification needs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AnswerRecord {
    /// IPv4 address record.
    A { owner: String, address: Ipv4Addr },
    /// IPv6 address record.
    Aaaa { owner: String, address: Ipv6Addr },
    /// Pointer record; `target` is the name pointed to.
    Ptr { owner: String, target: String },
    /// Name-server record; `nameserver` is the authoritative host.
    Ns { owner: String, nameserver: String },
    /// Alias record; `owner` is the alias, `target` the canonical name.
    Cname { owner: String, target: String },
    /// Service record; `target` is the host providing the service.
    Srv { owner: String, target: String },
    /// Any other record type (SOA, MX, TXT, ...).
    Other { owner: String, record_type: String },
}

impl AnswerRecord {
    /// Converts a hickory record.
    ///
    /// Record types the pipeline does not classify, and records without
    /// parsed data, become `Other`.
    pub fn from_record(record: &Record) -> Self {
        let owner = record.name().to_utf8();
        match record.data() {
            Some(RData::A(a)) => AnswerRecord::A {
                owner,
                address: a.0,
            },
            Some(RData::AAAA(aaaa)) => AnswerRecord::Aaaa {
                owner,
                address: aaaa.0,
            },
            Some(RData::PTR(ptr)) => AnswerRecord::Ptr {
                owner,
                target: ptr.0.to_utf8(),
            },
            Some(RData::NS(ns)) => AnswerRecord::Ns {
                owner,
                nameserver: ns.0.to_utf8(),
            },
            Some(RData::CNAME(cname)) => AnswerRecord::Cname {
                owner,
                target: cname.0.to_utf8(),
            },
            Some(RData::SRV(srv)) => AnswerRecord::Srv {
                owner,
                target: srv.target().to_utf8(),
            },
            _ => AnswerRecord::Other {
                owner,
                record_type: record.record_type().to_string(),
            },
        }
    }

    /// The owner name of the record.
    pub fn owner(&self) -> &str {
        match self {
            AnswerRecord::A { owner, .. }
            | AnswerRecord::Aaaa { owner, .. }
            | AnswerRecord::Ptr { owner, .. }
            | AnswerRecord::Ns { owner, .. }
            | AnswerRecord::Cname { owner, .. }
            | AnswerRecord::Srv { owner, .. }
            | AnswerRecord::Other { owner, .. } => owner,
        }
    }
}

/// Returns the fully-qualified form of `name` (with a trailing dot).
///
/// No other validation is done; a malformed name fails later in the query.
pub fn fqdn(name: &str) -> String {
    if name.ends_with('.') {
        name.to_string()
    } else {
        format!("{name}.")
    }
}

/// Strips trailing root dots for output.
pub fn trim_root_dot(name: &str) -> &str {
    name.trim_end_matches('.')
}
