use std::collections::BTreeSet;
use std::net::SocketAddr;
use crate::tracker::structs::node_id::NodeId;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PeerPieces {
    pub node_id: NodeId,
    /// Only the requested ordinals this node actually holds; never empty.
    pub pieces: BTreeSet<u64>,
    pub magnet_link: String,
    pub peer_addr: Option<SocketAddr>,
}
