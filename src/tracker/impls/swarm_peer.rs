use std::collections::BTreeSet;
use std::net::SocketAddr;
use crate::tracker::structs::node_id::NodeId;
use crate::tracker::structs::swarm_peer::SwarmPeer;

impl SwarmPeer {
    pub fn new(node_id: NodeId, pieces: BTreeSet<u64>, magnet_link: String, peer_addr: Option<SocketAddr>) -> SwarmPeer {
        SwarmPeer {
            node_id,
            pieces,
            magnet_link,
            peer_addr,
            updated: std::time::Instant::now(),
        }
    }
}
