use std::sync::atomic::{AtomicI64, Ordering};
use crate::stats::enums::stats_event::StatsEvent;
use crate::stats::structs::stats::Stats;
use crate::tracker::structs::swarm_tracker::SwarmTracker;

impl SwarmTracker {
    pub fn get_stats(&self) -> Stats
    {
        Stats {
            started: self.stats.started.load(Ordering::SeqCst),
            swarms: self.stats.swarms.load(Ordering::SeqCst),
            peers: self.stats.peers.load(Ordering::SeqCst),
            nodes: self.stats.nodes.load(Ordering::SeqCst),
            files: self.stats.files.load(Ordering::SeqCst),
            pieces_stored: self.stats.pieces_stored.load(Ordering::SeqCst),
            connections_handled: self.stats.connections_handled.load(Ordering::SeqCst),
            registers_handled: self.stats.registers_handled.load(Ordering::SeqCst),
            uploads_handled: self.stats.uploads_handled.load(Ordering::SeqCst),
            upload_pieces_handled: self.stats.upload_pieces_handled.load(Ordering::SeqCst),
            downloads_handled: self.stats.downloads_handled.load(Ordering::SeqCst),
            download_pieces_handled: self.stats.download_pieces_handled.load(Ordering::SeqCst),
            protocol_errors: self.stats.protocol_errors.load(Ordering::SeqCst),
            not_found: self.stats.not_found.load(Ordering::SeqCst),
            storage_errors: self.stats.storage_errors.load(Ordering::SeqCst),
        }
    }

    pub fn update_stats(&self, event: StatsEvent, value: i64)
    {
        let counter = self.counter(event);
        if value > 0 { counter.fetch_add(value, Ordering::SeqCst); }
        if value < 0 { counter.fetch_sub(-value, Ordering::SeqCst); }
    }

    fn counter(&self, event: StatsEvent) -> &AtomicI64
    {
        match event {
            StatsEvent::Swarms => &self.stats.swarms,
            StatsEvent::Peers => &self.stats.peers,
            StatsEvent::Nodes => &self.stats.nodes,
            StatsEvent::Files => &self.stats.files,
            StatsEvent::PiecesStored => &self.stats.pieces_stored,
            StatsEvent::ConnectionsHandled => &self.stats.connections_handled,
            StatsEvent::RegistersHandled => &self.stats.registers_handled,
            StatsEvent::UploadsHandled => &self.stats.uploads_handled,
            StatsEvent::UploadPiecesHandled => &self.stats.upload_pieces_handled,
            StatsEvent::DownloadsHandled => &self.stats.downloads_handled,
            StatsEvent::DownloadPiecesHandled => &self.stats.download_pieces_handled,
            StatsEvent::ProtocolErrors => &self.stats.protocol_errors,
            StatsEvent::NotFound => &self.stats.not_found,
            StatsEvent::StorageErrors => &self.stats.storage_errors,
        }
    }
}
