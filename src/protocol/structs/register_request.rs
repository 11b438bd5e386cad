use serde::{Deserialize, Serialize};
use crate::content::structs::content_id::ContentId;

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct RegisterRequest {
    pub file_name: String,
    pub file_hash: ContentId,
    #[serde(default)]
    pub file_pieces: Vec<u64>,
    pub magnet_link: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub total_pieces: Option<u64>,
}
