use serde::{Deserialize, Serialize};
use crate::content::structs::content_id::ContentId;

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct UploadPieceRequest {
    pub file_hash: ContentId,
    pub piece_index: u64,
    /// Base64 encoded piece bytes.
    pub piece_data: String,
}
