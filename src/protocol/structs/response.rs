use serde::{Deserialize, Serialize};
use crate::content::structs::content_id::ContentId;
use crate::protocol::enums::response_status::ResponseStatus;
use crate::protocol::structs::peer_info::PeerInfo;
use crate::protocol::structs::piece_payload::PiecePayload;
use crate::tracker::structs::node_id::NodeId;

/// Response envelope. Absent fields are left out of the JSON object; a
/// protocol failure carries only `error`.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq, Default)]
pub struct Response {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<ResponseStatus>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub node_id: Option<NodeId>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub file_hash: Option<ContentId>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub total_pieces: Option<u64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub peers: Option<Vec<PeerInfo>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pieces: Option<Vec<PiecePayload>>,
}
