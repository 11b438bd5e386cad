use crate::protocol::structs::peer_info::PeerInfo;
use crate::tracker::structs::peer_pieces::PeerPieces;
use crate::tracker::structs::swarm_peer::SwarmPeer;

impl From<&SwarmPeer> for PeerInfo {
    fn from(peer: &SwarmPeer) -> Self {
        PeerInfo {
            node_id: peer.node_id.clone(),
            file_pieces: peer.pieces.iter().copied().collect(),
            magnet_link: peer.magnet_link.clone(),
            peer_addr: peer.peer_addr,
        }
    }
}

impl From<PeerPieces> for PeerInfo {
    fn from(peer: PeerPieces) -> Self {
        PeerInfo {
            node_id: peer.node_id,
            file_pieces: peer.pieces.into_iter().collect(),
            magnet_link: peer.magnet_link,
            peer_addr: peer.peer_addr,
        }
    }
}
