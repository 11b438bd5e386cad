use std::sync::Arc;
use std::time::Duration;
use tokio::net::TcpListener;
use tokio::sync::Semaphore;
use crate::tracker::structs::swarm_tracker::SwarmTracker;

#[derive(Debug)]
pub struct TcpServer {
    pub(crate) listener: TcpListener,
    pub(crate) tracker: Arc<SwarmTracker>,
    pub(crate) semaphore: Arc<Semaphore>,
    pub(crate) request_timeout: Duration,
    pub(crate) max_request_size: u64,
}
