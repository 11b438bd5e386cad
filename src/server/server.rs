use std::net::SocketAddr;
use std::sync::Arc;
use log::info;
use tokio::task::JoinHandle;
use crate::server::structs::tcp_server::TcpServer;
use crate::tracker::structs::swarm_tracker::SwarmTracker;

/// Binds the tracker listener and spawns its accept loop.
pub async fn tracker_service(addr: SocketAddr, tracker: Arc<SwarmTracker>, rx: tokio::sync::watch::Receiver<bool>) -> tokio::io::Result<(SocketAddr, JoinHandle<()>)>
{
    let server = TcpServer::new(tracker.clone(), addr).await?;
    let local_addr = server.local_addr()?;
    info!(
        "[TRACKER] Starting a server listener on {local_addr} with {} connection slots",
        tracker.config.tracker.max_connections
    );
    Ok((local_addr, tokio::spawn(async move {
        server.start(rx).await;
    })))
}
