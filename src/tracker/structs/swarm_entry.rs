use std::collections::BTreeMap;
use crate::tracker::structs::node_id::NodeId;
use crate::tracker::structs::swarm_peer::SwarmPeer;

#[derive(Clone, Debug)]
pub struct SwarmEntry {
    pub peers: BTreeMap<NodeId, SwarmPeer>,
    /// Piece count advertised by the most recent uploader that sent one.
    pub total_pieces: Option<u64>,
    pub updated: std::time::Instant,
}
