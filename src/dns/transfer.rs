//! AXFR zone transfers.
//!
//! `ZoneTransfer` hands back a lazy stream of record batches, one batch per
//! DNS message of the transfer. `AxfrClient` runs the session over TCP with
//! hickory's client.

use std::net::{IpAddr, SocketAddr};
use std::str::FromStr;
use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use futures::stream::{self, BoxStream, StreamExt};
use hickory_client::client::{AsyncClient, ClientHandle};
use hickory_proto::iocompat::AsyncIoTokioAsStd;
use hickory_proto::op::ResponseCode;
use hickory_proto::rr::Name;
use hickory_proto::tcp::TcpClientStream;
use hickory_resolver::TokioAsyncResolver;
use tokio::net::TcpStream as TokioTcpStream;

use super::records::{fqdn, AnswerRecord};
use crate::config::DNS_PORT;
use crate::error_handling::TransferError;

/// Record batches of one transfer, in the order the server sent them.
///
/// An `Err` item ends the transfer; consumers stop reading at the first one.
pub type RecordBatches = BoxStream<'static, Result<Vec<AnswerRecord>, TransferError>>;

/// Starts a zone transfer of `domain` from `server`.
#[async_trait]
pub trait ZoneTransfer: Send + Sync {
    /// # Errors
    ///
    /// Returns an error if the session could not be set up. Failures after
    /// setup arrive as `Err` items in the stream.
    async fn transfer(&self, domain: &str, server: &str) -> Result<RecordBatches, TransferError>;
}

/// AXFR over TCP on port 53.
///
/// Name-server hostnames are resolved with the same resolver used for every
/// other lookup, so all DNS traffic except the transfer itself goes to the
/// configured nameserver.
pub struct AxfrClient {
    resolver: Arc<TokioAsyncResolver>,
    timeout: Duration,
}

impl AxfrClient {
    /// `timeout` bounds the connection and each message of the transfer.
    pub fn new(resolver: Arc<TokioAsyncResolver>, timeout: Duration) -> Self {
        Self { resolver, timeout }
    }

    async fn server_addr(&self, server: &str) -> Result<SocketAddr, TransferError> {
        if let Ok(ip) = IpAddr::from_str(server.trim_end_matches('.')) {
            return Ok(SocketAddr::new(ip, DNS_PORT));
        }

        let lookup = self
            .resolver
            .lookup_ip(server)
            .await
            .map_err(|e| TransferError::Resolve(server.to_string(), e.to_string()))?;
        lookup
            .iter()
            .next()
            .map(|ip| SocketAddr::new(ip, DNS_PORT))
            .ok_or_else(|| TransferError::Resolve(server.to_string(), "no addresses".into()))
    }
}

#[async_trait]
impl ZoneTransfer for AxfrClient {
    async fn transfer(&self, domain: &str, server: &str) -> Result<RecordBatches, TransferError> {
        let zone = Name::from_str(&fqdn(domain))
            .map_err(|e| TransferError::InvalidName(domain.to_string(), e.to_string()))?;
        let addr = self.server_addr(server).await?;
        log::debug!("Requesting AXFR of {zone} from {server} ({addr})");

        let (tcp, sender) =
            TcpClientStream::<AsyncIoTokioAsStd<TokioTcpStream>>::with_timeout(addr, self.timeout);
        let connect = AsyncClient::with_timeout(tcp, sender, self.timeout, None);
        let (mut client, background) = tokio::time::timeout(self.timeout, connect)
            .await
            .map_err(|_| TransferError::Timeout(server.to_string()))?
            .map_err(|e| TransferError::Connect(server.to_string(), e.to_string()))?;
        tokio::spawn(background);

        let xfr = Box::pin(client.zone_transfer(zone, None));
        let server = server.to_string();
        let timeout = self.timeout;

        // The client handle travels with the stream so the session stays open
        // until the consumer is done with it.
        let batches = stream::unfold(
            Some((xfr, client)),
            move |state| {
                let server = server.clone();
                async move {
                    let (mut xfr, client) = state?;
                    let item = match tokio::time::timeout(timeout, xfr.next()).await {
                        Ok(Some(Ok(response))) => {
                            if response.response_code() != ResponseCode::NoError {
                                Err(TransferError::Session(
                                    server,
                                    response.response_code().to_string(),
                                ))
                            } else {
                                Ok(response
                                    .answers()
                                    .iter()
                                    .map(AnswerRecord::from_record)
                                    .collect())
                            }
                        }
                        Ok(Some(Err(e))) => Err(TransferError::Session(server, e.to_string())),
                        Ok(None) => return None,
                        Err(_) => Err(TransferError::Timeout(server)),
                    };
                    let next = if item.is_ok() { Some((xfr, client)) } else { None };
                    Some((item, next))
                }
            },
        );

        Ok(batches.boxed())
    }
}
