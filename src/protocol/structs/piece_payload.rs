use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct PiecePayload {
    pub piece_index: u64,
    /// Base64 encoded piece bytes.
    pub piece_data: String,
}
