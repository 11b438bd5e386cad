use std::collections::BTreeSet;
use crate::tracker::structs::peer_pieces::PeerPieces;
use crate::tracker::structs::swarm_peer::SwarmPeer;

impl PeerPieces {
    /// Intersects the peer's pieces with `requested`; `None` when nothing overlaps.
    pub fn intersect(peer: &SwarmPeer, requested: &BTreeSet<u64>) -> Option<PeerPieces> {
        let pieces: BTreeSet<u64> = peer.pieces.intersection(requested).copied().collect();
        if pieces.is_empty() {
            return None;
        }
        Some(PeerPieces {
            node_id: peer.node_id.clone(),
            pieces,
            magnet_link: peer.magnet_link.clone(),
            peer_addr: peer.peer_addr,
        })
    }
}
