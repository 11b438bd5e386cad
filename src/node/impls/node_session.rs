use std::net::SocketAddr;
use crate::config::structs::node_config::NodeConfig;
use crate::node::errors::{SessionError, TransportError};
use crate::node::structs::node_session::NodeSession;
use crate::node::structs::tracker_client::TrackerClient;
use crate::storage::structs::piece_store::PieceStore;
use crate::tracker::structs::node_id::NodeId;

impl NodeSession {
    pub fn new(config: &NodeConfig, store: PieceStore) -> Result<NodeSession, SessionError>
    {
        let tracker_address: SocketAddr = config.tracker_address.parse()
            .map_err(|_| TransportError::InvalidAddress(config.tracker_address.clone()))?;
        Ok(NodeSession {
            config: config.clone(),
            client: TrackerClient::new(tracker_address, config.request_timeout()),
            store,
            node_id: None,
        })
    }

    /// Session backed by the filesystem store at `storage_path`.
    pub async fn open(config: &NodeConfig) -> Result<NodeSession, SessionError>
    {
        let store = PieceStore::filesystem(&config.storage_path).await?;
        Self::new(config, store)
    }

    pub fn with_node_id(mut self, node_id: NodeId) -> NodeSession
    {
        self.node_id = Some(node_id);
        self
    }

    pub fn node_id(&self) -> Option<&NodeId>
    {
        self.node_id.as_ref()
    }

    pub fn store(&self) -> &PieceStore
    {
        &self.store
    }

    pub fn client(&self) -> &TrackerClient
    {
        &self.client
    }
}
