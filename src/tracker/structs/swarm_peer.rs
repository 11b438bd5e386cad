use std::collections::BTreeSet;
use std::net::SocketAddr;
use crate::tracker::structs::node_id::NodeId;

#[derive(PartialEq, Eq, Debug, Clone)]
pub struct SwarmPeer {
    pub node_id: NodeId,
    pub pieces: BTreeSet<u64>,
    pub magnet_link: String,
    /// Address the registering connection came from, when the transport knows it.
    pub peer_addr: Option<SocketAddr>,
    pub updated: std::time::Instant,
}
