use crate::content::structs::content_id::ContentId;
use crate::protocol::structs::peer_info::PeerInfo;
use crate::tracker::structs::node_id::NodeId;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UploadReport {
    pub content_id: ContentId,
    pub node_id: NodeId,
    pub file_name: String,
    pub pieces: u64,
    /// Other nodes already sharing the same content.
    pub peers: Vec<PeerInfo>,
}
