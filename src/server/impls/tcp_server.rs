use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;
use log::{debug, error, info, warn};
use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::{TcpListener, TcpStream};
use tokio::sync::Semaphore;
use crate::server::structs::tcp_server::TcpServer;
use crate::stats::enums::stats_event::StatsEvent;
use crate::tracker::structs::swarm_tracker::SwarmTracker;

impl TcpServer {
    #[tracing::instrument(level = "debug", skip(tracker))]
    pub async fn new(tracker: Arc<SwarmTracker>, bind_address: SocketAddr) -> tokio::io::Result<TcpServer>
    {
        let listener = TcpListener::bind(bind_address).await?;
        let max_connections = tracker.config.tracker.max_connections.max(1) as usize;
        let request_timeout = tracker.config.tracker.request_timeout();
        let max_request_size = tracker.config.tracker.max_request_size;

        Ok(TcpServer {
            listener,
            tracker,
            semaphore: Arc::new(Semaphore::new(max_connections)),
            request_timeout,
            max_request_size,
        })
    }

    pub fn local_addr(&self) -> tokio::io::Result<SocketAddr>
    {
        self.listener.local_addr()
    }

    /// Accepts connections until the shutdown flag flips.
    #[tracing::instrument(level = "debug", skip_all)]
    pub async fn start(self, mut rx: tokio::sync::watch::Receiver<bool>)
    {
        let local_addr = self.local_addr().ok();
        loop {
            let permit = tokio::select! {
                _ = rx.changed() => {
                    info!("[TRACKER] Stopping TCP server {local_addr:?}...");
                    break;
                }
                permit = self.semaphore.clone().acquire_owned() => match permit {
                    Ok(permit) => permit,
                    Err(_) => break,
                }
            };

            let (stream, remote_addr) = tokio::select! {
                _ = rx.changed() => {
                    info!("[TRACKER] Stopping TCP server {local_addr:?}...");
                    break;
                }
                accepted = self.listener.accept() => match accepted {
                    Ok(accepted) => accepted,
                    Err(e) => {
                        error!("[TRACKER] Accept failed: {e}");
                        continue;
                    }
                }
            };

            let tracker = self.tracker.clone();
            let request_timeout = self.request_timeout;
            let max_request_size = self.max_request_size;
            tokio::spawn(async move {
                TcpServer::handle_connection(tracker, stream, remote_addr, request_timeout, max_request_size).await;
                drop(permit);
            });
        }
    }

    #[tracing::instrument(level = "debug", skip(tracker, stream))]
    pub async fn handle_connection(tracker: Arc<SwarmTracker>, mut stream: TcpStream, remote_addr: SocketAddr, request_timeout: Duration, max_request_size: u64)
    {
        tracker.update_stats(StatsEvent::ConnectionsHandled, 1);
        debug!("[TRACKER] Connection from {remote_addr}");

        let payload = match tokio::time::timeout(request_timeout, TcpServer::read_request(&mut stream, max_request_size)).await {
            Ok(Ok(payload)) => payload,
            Ok(Err(e)) => {
                tracker.update_stats(StatsEvent::ProtocolErrors, 1);
                warn!("[TRACKER] Could not read request from {remote_addr}: {e}");
                return;
            }
            Err(_) => {
                warn!("[TRACKER] Request from {remote_addr} timed out");
                return;
            }
        };

        if let Some(response) = tracker.handle_payload(&payload, Some(remote_addr)).await {
            match response.encode() {
                Ok(bytes) => {
                    let written = tokio::time::timeout(request_timeout, async {
                        stream.write_all(&bytes).await?;
                        stream.shutdown().await
                    }).await;
                    match written {
                        Ok(Ok(())) => {}
                        Ok(Err(e)) => warn!("[TRACKER] Could not write response to {remote_addr}: {e}"),
                        Err(_) => warn!("[TRACKER] Response to {remote_addr} timed out"),
                    }
                }
                Err(e) => error!("[TRACKER] {e}"),
            }
        }
    }

    /// Reads until EOF, failing once more than `max_request_size` bytes arrive.
    pub async fn read_request(stream: &mut TcpStream, max_request_size: u64) -> tokio::io::Result<Vec<u8>>
    {
        let mut payload = Vec::new();
        let read = stream.take(max_request_size + 1).read_to_end(&mut payload).await?;
        if read as u64 > max_request_size {
            return Err(tokio::io::Error::new(
                tokio::io::ErrorKind::InvalidData,
                format!("request exceeds {max_request_size} bytes"),
            ));
        }
        Ok(payload)
    }
}
