use std::sync::atomic::AtomicI64;

#[derive(Debug)]
pub struct StatsAtomics {
    /// Unix time the tracker was created.
    pub started: AtomicI64,
    pub swarms: AtomicI64,
    pub peers: AtomicI64,
    pub nodes: AtomicI64,
    pub files: AtomicI64,
    pub pieces_stored: AtomicI64,
    pub connections_handled: AtomicI64,
    pub registers_handled: AtomicI64,
    pub uploads_handled: AtomicI64,
    pub upload_pieces_handled: AtomicI64,
    pub downloads_handled: AtomicI64,
    pub download_pieces_handled: AtomicI64,
    pub protocol_errors: AtomicI64,
    pub not_found: AtomicI64,
    pub storage_errors: AtomicI64,
}
