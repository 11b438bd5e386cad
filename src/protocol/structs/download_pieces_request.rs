use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct DownloadPiecesRequest {
    pub file_name: String,
    pub missing_pieces: Vec<u64>,
}
