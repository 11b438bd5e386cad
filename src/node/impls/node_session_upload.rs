use std::path::Path;
use log::{info, warn};
use crate::content::content::{hash_file, magnet_link};
use crate::content::structs::content_id::ContentId;
use crate::node::errors::SessionError;
use crate::node::structs::node_session::NodeSession;
use crate::node::structs::upload_report::UploadReport;
use crate::pieces::pieces::split;
use crate::protocol::enums::request::Request;
use crate::protocol::structs::register_request::RegisterRequest;
use crate::protocol::structs::upload_piece_request::UploadPieceRequest;
use crate::protocol::structs::upload_request::UploadRequest;
use crate::tracker::structs::node_id::NodeId;

impl NodeSession {
    /// Shares the file at `path` under `file_name`, or its own file name.
    #[tracing::instrument(level = "debug", skip(self))]
    pub async fn upload(&mut self, path: &Path, file_name: Option<&str>) -> Result<UploadReport, SessionError>
    {
        let file_name = match file_name {
            Some(name) => name.to_string(),
            None => path.file_name()
                .map(|name| name.to_string_lossy().into_owned())
                .unwrap_or_default(),
        };
        let content_id = hash_file(path, self.config.hash_window as usize).await?;
        let data = tokio::fs::read(path).await?;
        let pieces = split(&data, self.config.chunk_size as usize)?;
        let ordinals: Vec<u64> = pieces.iter().map(|piece| piece.ordinal).collect();
        let total_pieces = ordinals.len() as u64;
        let magnet = magnet_link(&content_id);
        info!("[NODE] Uploading {file_name} ({content_id}, {} bytes, {total_pieces} pieces)", data.len());

        let node_id = self.ensure_registered(&file_name, content_id, &ordinals, &magnet, total_pieces).await?;

        for piece in &pieces {
            self.store.put(&content_id, piece.ordinal, &piece.data).await?;
            let request = Request::UploadPiece(UploadPieceRequest::new(content_id, piece.ordinal, &piece.data));
            if let Err(error) = self.client.send_oneway(&request).await {
                warn!("[NODE] Piece {content_id}/{} was not accepted: {error}", piece.ordinal);
            }
        }

        let response = self.client.send(&Request::Upload(UploadRequest {
            node_id: node_id.clone(),
            file_name: file_name.clone(),
            file_hash: content_id,
            file_pieces: ordinals,
            magnet_link: magnet,
            total_pieces: Some(total_pieces),
        })).await?;
        if let Some(message) = response.failure_message() {
            return Err(SessionError::Rejected(message.to_string()));
        }

        Ok(UploadReport {
            content_id,
            node_id,
            file_name,
            pieces: total_pieces,
            peers: response.peers.unwrap_or_default(),
        })
    }

    async fn ensure_registered(&mut self, file_name: &str, content_id: ContentId, ordinals: &[u64], magnet: &str, total_pieces: u64) -> Result<NodeId, SessionError>
    {
        if let Some(node_id) = &self.node_id {
            return Ok(node_id.clone());
        }
        let response = self.client.send(&Request::Register(RegisterRequest {
            file_name: file_name.to_string(),
            file_hash: content_id,
            file_pieces: ordinals.to_vec(),
            magnet_link: magnet.to_string(),
            total_pieces: Some(total_pieces),
        })).await?;
        if let Some(message) = response.failure_message() {
            return Err(SessionError::Rejected(message.to_string()));
        }
        let node_id = response.node_id.ok_or_else(|| SessionError::Rejected(String::from("register response carried no node_id")))?;
        info!("[NODE] Registered as {node_id}");
        self.node_id = Some(node_id.clone());
        Ok(node_id)
    }
}
