use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct NodeConfig {
    pub tracker_address: String,
    /// Piece length in bytes; must match between uploaders and downloaders.
    pub chunk_size: u64,
    /// Read window used while hashing files.
    pub hash_window: u64,
    /// Seconds to wait for a tracker response before giving up.
    pub request_timeout: u64,
    pub storage_path: String,
    /// Largest file in bytes a download will accept from tracker metadata.
    pub max_file_size: u64,
}
