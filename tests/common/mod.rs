#![allow(dead_code)]
use std::collections::BTreeSet;
use std::net::SocketAddr;
use std::sync::Arc;
use tempfile::TempDir;
use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::sync::watch;
use tokio::task::JoinHandle;
use swarm_tracker::config::structs::configuration::Configuration;
use swarm_tracker::config::structs::node_config::NodeConfig;
use swarm_tracker::content::content::hash_bytes;
use swarm_tracker::content::structs::content_id::ContentId;
use swarm_tracker::node::structs::node_session::NodeSession;
use swarm_tracker::server::server::tracker_service;
use swarm_tracker::storage::structs::piece_store::PieceStore;
use swarm_tracker::tracker::structs::node_id::NodeId;
use swarm_tracker::tracker::structs::swarm_peer::SwarmPeer;
use swarm_tracker::tracker::structs::swarm_tracker::SwarmTracker;

pub type TestTracker = Arc<SwarmTracker>;
pub type TestConfig = Arc<Configuration>;

pub fn create_test_config() -> TestConfig {
    let mut config = Configuration::init();
    config.tracker.bind_address = String::from("127.0.0.1:0");
    config.tracker.request_timeout = 5;
    config.node.request_timeout = 5;
    Arc::new(config)
}

pub fn create_test_tracker() -> TestTracker {
    Arc::new(SwarmTracker::new(create_test_config(), PieceStore::memory()))
}

pub fn random_content_id() -> ContentId {
    hash_bytes(uuid::Uuid::new_v4().as_bytes())
}

pub fn create_test_peer(node_id: &str, pieces: &[u64]) -> SwarmPeer {
    SwarmPeer::new(NodeId::from(node_id), pieces.iter().copied().collect::<BTreeSet<u64>>(), String::new(), None)
}

/// A tracker listening on an ephemeral local port.
pub struct RunningTracker {
    pub tracker: TestTracker,
    pub addr: SocketAddr,
    pub shutdown: watch::Sender<bool>,
    pub handle: JoinHandle<()>,
}

pub async fn start_test_tracker() -> RunningTracker {
    let tracker = create_test_tracker();
    let (shutdown, rx) = watch::channel(false);
    let (addr, handle) = tracker_service("127.0.0.1:0".parse().unwrap(), tracker.clone(), rx)
        .await
        .expect("tracker should bind an ephemeral port");
    RunningTracker { tracker, addr, shutdown, handle }
}

pub fn node_config(addr: SocketAddr, storage: &TempDir) -> NodeConfig {
    let mut config = Configuration::init().node;
    config.tracker_address = addr.to_string();
    config.chunk_size = 1024;
    config.request_timeout = 5;
    config.storage_path = storage.path().to_string_lossy().into_owned();
    config
}

pub async fn create_test_session(addr: SocketAddr, storage: &TempDir) -> NodeSession {
    NodeSession::open(&node_config(addr, storage)).await.expect("session should open")
}

pub fn sample_bytes(len: usize) -> Vec<u8> {
    (0..len).map(|i| (i * 31 % 251) as u8).collect()
}

/// A stand-in tracker answering one connection per entry of `replies`, in
/// order. Resolves to the raw requests it received.
pub async fn serve_scripted(replies: Vec<Vec<u8>>) -> (SocketAddr, JoinHandle<Vec<Vec<u8>>>) {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    let handle = tokio::spawn(async move {
        let mut requests = Vec::new();
        for reply in replies {
            let (mut stream, _) = listener.accept().await.unwrap();
            let mut request = Vec::new();
            stream.read_to_end(&mut request).await.unwrap();
            stream.write_all(&reply).await.unwrap();
            stream.shutdown().await.unwrap();
            requests.push(request);
        }
        requests
    });
    (addr, handle)
}
