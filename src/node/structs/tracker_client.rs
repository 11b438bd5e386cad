use std::net::SocketAddr;
use std::time::Duration;

#[derive(Debug, Clone)]
pub struct TrackerClient {
    pub(crate) tracker_address: SocketAddr,
    pub(crate) request_timeout: Duration,
}
