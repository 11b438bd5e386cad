use std::sync::atomic::AtomicI64;
use crate::common::common::current_time;
use crate::stats::structs::stats_atomics::StatsAtomics;

impl StatsAtomics {
    pub fn new() -> StatsAtomics
    {
        StatsAtomics {
            started: AtomicI64::new(current_time() as i64),
            swarms: AtomicI64::new(0),
            peers: AtomicI64::new(0),
            nodes: AtomicI64::new(0),
            files: AtomicI64::new(0),
            pieces_stored: AtomicI64::new(0),
            connections_handled: AtomicI64::new(0),
            registers_handled: AtomicI64::new(0),
            uploads_handled: AtomicI64::new(0),
            upload_pieces_handled: AtomicI64::new(0),
            downloads_handled: AtomicI64::new(0),
            download_pieces_handled: AtomicI64::new(0),
            protocol_errors: AtomicI64::new(0),
            not_found: AtomicI64::new(0),
            storage_errors: AtomicI64::new(0),
        }
    }
}

impl Default for StatsAtomics {
    fn default() -> Self {
        Self::new()
    }
}
