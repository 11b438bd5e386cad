use serde::{Deserialize, Serialize};

/// Point-in-time copy of the counters.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Stats {
    pub started: i64,
    pub swarms: i64,
    pub peers: i64,
    pub nodes: i64,
    pub files: i64,
    pub pieces_stored: i64,
    pub connections_handled: i64,
    pub registers_handled: i64,
    pub uploads_handled: i64,
    pub upload_pieces_handled: i64,
    pub downloads_handled: i64,
    pub download_pieces_handled: i64,
    pub protocol_errors: i64,
    pub not_found: i64,
    pub storage_errors: i64,
}
