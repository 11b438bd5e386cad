use std::net::SocketAddr;
use serde::{Deserialize, Serialize};
use crate::tracker::structs::node_id::NodeId;

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct PeerInfo {
    pub node_id: NodeId,
    pub file_pieces: Vec<u64>,
    pub magnet_link: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub peer_addr: Option<SocketAddr>,
}
