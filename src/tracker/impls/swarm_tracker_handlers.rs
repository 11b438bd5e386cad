use std::collections::BTreeSet;
use std::net::SocketAddr;
use log::{debug, warn};
use crate::content::content::magnet_link;
use crate::content::structs::content_id::ContentId;
use crate::protocol::enums::request::Request;
use crate::protocol::structs::download_pieces_request::DownloadPiecesRequest;
use crate::protocol::structs::download_request::DownloadRequest;
use crate::protocol::structs::peer_info::PeerInfo;
use crate::protocol::structs::piece_payload::PiecePayload;
use crate::protocol::structs::register_request::RegisterRequest;
use crate::protocol::structs::response::Response;
use crate::protocol::structs::upload_piece_request::UploadPieceRequest;
use crate::protocol::structs::upload_request::UploadRequest;
use crate::stats::enums::stats_event::StatsEvent;
use crate::storage::errors::StorageError;
use crate::tracker::structs::swarm_peer::SwarmPeer;
use crate::tracker::structs::swarm_tracker::SwarmTracker;

pub const MESSAGE_REGISTERED: &str = "Node registered successfully";
pub const MESSAGE_UPLOADED: &str = "File uploaded successfully";
pub const MESSAGE_PEERS_FOUND: &str = "Peers found for downloading";
pub const MESSAGE_FILE_NOT_FOUND: &str = "File not found";
pub const MESSAGE_NO_PEERS: &str = "No peers with missing pieces";

impl SwarmTracker {
    /// Decodes one request payload and handles it. `None` means nothing is
    /// written back: an empty payload, or a stored `upload_piece`.
    #[tracing::instrument(level = "debug", skip(self, payload))]
    pub async fn handle_payload(&self, payload: &[u8], remote_addr: Option<SocketAddr>) -> Option<Response>
    {
        if payload.iter().all(|byte| byte.is_ascii_whitespace()) {
            debug!("[TRACKER] Empty request from {remote_addr:?}");
            return None;
        }
        match Request::decode(payload) {
            Ok(request) => self.handle_request(request, remote_addr).await,
            Err(error) => {
                self.update_stats(StatsEvent::ProtocolErrors, 1);
                warn!("[TRACKER] Rejected request from {remote_addr:?}: {error}");
                Some(Response::from_protocol_error(&error))
            }
        }
    }

    pub async fn handle_request(&self, request: Request, remote_addr: Option<SocketAddr>) -> Option<Response>
    {
        match request {
            Request::Register(register) => Some(self.handle_register(register, remote_addr)),
            Request::Upload(upload) => Some(self.handle_upload(upload, remote_addr)),
            Request::UploadPiece(upload_piece) => self.handle_upload_piece(upload_piece).await,
            Request::Download(download) => Some(self.handle_download(download)),
            Request::DownloadPieces(download_pieces) => Some(self.handle_download_pieces(download_pieces).await),
        }
    }

    #[tracing::instrument(level = "debug", skip(self))]
    pub fn handle_register(&self, request: RegisterRequest, remote_addr: Option<SocketAddr>) -> Response
    {
        self.update_stats(StatsEvent::RegistersHandled, 1);
        if request.file_name.is_empty() {
            return Response::error("file_name must not be empty");
        }

        let node_id = self.generate_node_id();
        let magnet = Self::magnet_or_default(request.magnet_link, &request.file_hash);
        let peer = SwarmPeer::new(node_id.clone(), request.file_pieces.into_iter().collect(), magnet, remote_addr);
        self.register_or_update(request.file_hash, peer, request.total_pieces);
        self.bind_name(&request.file_name, request.file_hash);

        debug!("[TRACKER] Registered {node_id} for {} ({})", request.file_name, request.file_hash);
        Response::success(MESSAGE_REGISTERED).with_node_id(node_id)
    }

    #[tracing::instrument(level = "debug", skip(self))]
    pub fn handle_upload(&self, request: UploadRequest, remote_addr: Option<SocketAddr>) -> Response
    {
        self.update_stats(StatsEvent::UploadsHandled, 1);
        if request.file_name.is_empty() {
            return Response::error("file_name must not be empty");
        }
        if request.node_id.as_str().is_empty() {
            return Response::error("node_id must not be empty");
        }

        self.record_node(&request.node_id);
        let peer = SwarmPeer::new(
            request.node_id.clone(),
            request.file_pieces.into_iter().collect(),
            request.magnet_link,
            remote_addr,
        );
        self.register_or_update(request.file_hash, peer, request.total_pieces);
        self.bind_name(&request.file_name, request.file_hash);

        let peers: Vec<PeerInfo> = self.peers_excluding(request.file_hash, Some(&request.node_id))
            .iter()
            .map(PeerInfo::from)
            .collect();
        debug!("[TRACKER] {} uploaded {} ({} other peers)", request.node_id, request.file_name, peers.len());
        Response::success(MESSAGE_UPLOADED).with_peers(peers)
    }

    #[tracing::instrument(level = "debug", skip(self, request), fields(file_hash = %request.file_hash, piece_index = request.piece_index))]
    pub async fn handle_upload_piece(&self, request: UploadPieceRequest) -> Option<Response>
    {
        self.update_stats(StatsEvent::UploadPiecesHandled, 1);
        let data = match request.decode_data() {
            Ok(data) => data,
            Err(error) => {
                self.update_stats(StatsEvent::ProtocolErrors, 1);
                warn!("[TRACKER] Piece {}/{} rejected: {error}", request.file_hash, request.piece_index);
                return Some(Response::error(&error.to_string()));
            }
        };

        match self.storage.put(&request.file_hash, request.piece_index, &data).await {
            Ok(()) => {
                self.update_stats(StatsEvent::PiecesStored, 1);
                None
            }
            Err(error) => {
                self.update_stats(StatsEvent::StorageErrors, 1);
                warn!("[TRACKER] Piece {}/{} could not be stored: {error}", request.file_hash, request.piece_index);
                Some(Response::error(&error.to_string()))
            }
        }
    }

    #[tracing::instrument(level = "debug", skip(self))]
    pub fn handle_download(&self, request: DownloadRequest) -> Response
    {
        self.update_stats(StatsEvent::DownloadsHandled, 1);
        let content_id = match self.resolve_name(&request.file_name) {
            None => {
                self.update_stats(StatsEvent::NotFound, 1);
                return Response::error(MESSAGE_FILE_NOT_FOUND);
            }
            Some(content_id) => content_id
        };

        let peers: Vec<PeerInfo> = match request.missing_pieces {
            None => self.peers_excluding(content_id, None).iter().map(PeerInfo::from).collect(),
            Some(missing) => {
                let requested: BTreeSet<u64> = missing.into_iter().collect();
                self.peers_holding(content_id, &requested).into_iter().map(PeerInfo::from).collect()
            }
        };

        Response::success(MESSAGE_PEERS_FOUND)
            .with_file_hash(content_id)
            .with_total_pieces(self.total_pieces(content_id))
            .with_peers(peers)
    }

    #[tracing::instrument(level = "debug", skip(self))]
    pub async fn handle_download_pieces(&self, request: DownloadPiecesRequest) -> Response
    {
        self.update_stats(StatsEvent::DownloadPiecesHandled, 1);
        let content_id = match self.resolve_name(&request.file_name) {
            None => {
                self.update_stats(StatsEvent::NotFound, 1);
                return Response::error(MESSAGE_FILE_NOT_FOUND);
            }
            Some(content_id) => content_id
        };

        let requested: BTreeSet<u64> = request.missing_pieces.into_iter().collect();
        let holders = self.peers_holding(content_id, &requested);
        if holders.is_empty() {
            self.update_stats(StatsEvent::NotFound, 1);
            return Response::error(MESSAGE_NO_PEERS);
        }

        let mut pieces = Vec::with_capacity(requested.len());
        for ordinal in requested {
            match self.storage.get(&content_id, ordinal).await {
                Ok(data) => pieces.push(PiecePayload::new(ordinal, &data)),
                Err(StorageError::NotFound { .. }) => {
                    debug!("[TRACKER] Piece {content_id}/{ordinal} is not stored");
                }
                Err(error) => {
                    self.update_stats(StatsEvent::StorageErrors, 1);
                    warn!("[TRACKER] Piece {content_id}/{ordinal} could not be read: {error}");
                    return Response::error(&error.to_string());
                }
            }
        }

        Response::success(MESSAGE_PEERS_FOUND)
            .with_file_hash(content_id)
            .with_total_pieces(self.total_pieces(content_id))
            .with_peers(holders.into_iter().map(PeerInfo::from).collect())
            .with_pieces(pieces)
    }

    fn magnet_or_default(supplied: String, content_id: &ContentId) -> String
    {
        if supplied.is_empty() {
            return magnet_link(content_id);
        }
        supplied
    }
}
