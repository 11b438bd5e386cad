use crate::content::structs::content_id::ContentId;
use crate::protocol::structs::peer_info::PeerInfo;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DownloadReport {
    pub content_id: ContentId,
    pub file_name: String,
    pub total_pieces: u64,
    /// Pieces fetched from the tracker in this run.
    pub fetched: u64,
    pub bytes: u64,
    pub peers: Vec<PeerInfo>,
}
