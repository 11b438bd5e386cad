use serde::{Deserialize, Serialize};
use crate::content::structs::content_id::ContentId;
use crate::tracker::structs::node_id::NodeId;

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct UploadRequest {
    pub node_id: NodeId,
    pub file_name: String,
    pub file_hash: ContentId,
    pub file_pieces: Vec<u64>,
    pub magnet_link: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub total_pieces: Option<u64>,
}
