use std::collections::btree_map::Entry;
use std::collections::BTreeSet;
use log::debug;
use crate::content::structs::content_id::ContentId;
use crate::stats::enums::stats_event::StatsEvent;
use crate::tracker::structs::node_id::NodeId;
use crate::tracker::structs::peer_pieces::PeerPieces;
use crate::tracker::structs::swarm_entry::SwarmEntry;
use crate::tracker::structs::swarm_peer::SwarmPeer;
use crate::tracker::structs::swarm_tracker::SwarmTracker;

impl SwarmTracker {
    /// Inserts `peer` into the swarm of `content_id`, replacing the node's
    /// previous entry wholesale. Returns the replaced entry, if any.
    #[tracing::instrument(level = "debug", skip(self))]
    pub fn register_or_update(&self, content_id: ContentId, peer: SwarmPeer, total_pieces: Option<u64>) -> Option<SwarmPeer>
    {
        let shard = self.swarms_sharding.shard_for(&content_id);
        let mut lock = shard.write();

        let entry = match lock.entry(content_id) {
            Entry::Vacant(v) => {
                self.update_stats(StatsEvent::Swarms, 1);
                v.insert(SwarmEntry::new())
            }
            Entry::Occupied(o) => o.into_mut(),
        };

        if total_pieces.is_some() {
            entry.total_pieces = total_pieces;
        }
        entry.updated = std::time::Instant::now();

        debug!("[SWARM] {} holds {} pieces of {}", peer.node_id, peer.pieces.len(), content_id);
        let previous = entry.peers.insert(peer.node_id.clone(), peer);
        if previous.is_none() {
            self.update_stats(StatsEvent::Peers, 1);
        }
        previous
    }

    /// Every peer of the swarm except `exclude`.
    #[tracing::instrument(level = "debug", skip(self))]
    pub fn peers_excluding(&self, content_id: ContentId, exclude: Option<&NodeId>) -> Vec<SwarmPeer>
    {
        let shard = self.swarms_sharding.shard_for(&content_id);
        let lock = shard.read();

        lock.get(&content_id)
            .map(|entry| {
                entry.peers.values()
                    .filter(|peer| Some(&peer.node_id) != exclude)
                    .cloned()
                    .collect()
            })
            .unwrap_or_default()
    }

    /// Peers holding at least one of `requested`, each with the overlap only.
    #[tracing::instrument(level = "debug", skip(self))]
    pub fn peers_holding(&self, content_id: ContentId, requested: &BTreeSet<u64>) -> Vec<PeerPieces>
    {
        if requested.is_empty() {
            return Vec::new();
        }

        let shard = self.swarms_sharding.shard_for(&content_id);
        let lock = shard.read();

        lock.get(&content_id)
            .map(|entry| {
                entry.peers.values()
                    .filter_map(|peer| PeerPieces::intersect(peer, requested))
                    .collect()
            })
            .unwrap_or_default()
    }

    pub fn get_swarm(&self, content_id: ContentId) -> Option<SwarmEntry>
    {
        self.swarms_sharding.shard_for(&content_id).read().get(&content_id).cloned()
    }

    pub fn total_pieces(&self, content_id: ContentId) -> Option<u64>
    {
        self.swarms_sharding.shard_for(&content_id).read().get(&content_id).and_then(|entry| entry.total_pieces)
    }

    pub fn swarms_count(&self) -> usize
    {
        self.swarms_sharding.get_swarms_amount()
    }
}
