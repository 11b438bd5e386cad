use crate::config::structs::node_config::NodeConfig;
use crate::node::structs::tracker_client::TrackerClient;
use crate::storage::structs::piece_store::PieceStore;
use crate::tracker::structs::node_id::NodeId;

#[derive(Debug)]
pub struct NodeSession {
    pub(crate) config: NodeConfig,
    pub(crate) client: TrackerClient,
    pub(crate) store: PieceStore,
    /// Assigned on the first `register`; reused for every later upload.
    pub(crate) node_id: Option<NodeId>,
}
