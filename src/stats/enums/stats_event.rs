//! Statistics event types.

use serde::{Deserialize, Serialize};

/// Every counter that can be moved with `SwarmTracker::update_stats()`.
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq)]
pub enum StatsEvent {
    Swarms,
    Peers,
    Nodes,
    Files,
    PiecesStored,
    ConnectionsHandled,
    RegistersHandled,
    UploadsHandled,
    UploadPiecesHandled,
    DownloadsHandled,
    DownloadPiecesHandled,
    ProtocolErrors,
    NotFound,
    StorageErrors,
}
