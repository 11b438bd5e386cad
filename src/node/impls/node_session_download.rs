use std::collections::BTreeSet;
use std::path::Path;
use log::{debug, info, warn};
use crate::content::content::hash_bytes;
use crate::node::errors::{SessionError, TransportError};
use crate::node::structs::download_report::DownloadReport;
use crate::node::structs::node_session::NodeSession;
use crate::protocol::enums::request::Request;
use crate::protocol::structs::download_pieces_request::DownloadPiecesRequest;
use crate::protocol::structs::download_request::DownloadRequest;
use crate::protocol::structs::peer_info::PeerInfo;
use crate::protocol::structs::response::Response;

impl NodeSession {
    /// Fetches `file_name` into `output`, reusing pieces already stored locally.
    #[tracing::instrument(level = "debug", skip(self))]
    pub async fn download(&mut self, file_name: &str, output: &Path) -> Result<DownloadReport, SessionError>
    {
        let response = self.request_download(file_name, None).await?;
        let content_id = response.file_hash
            .ok_or_else(|| TransportError::InvalidResponse(String::from("download response carried no file_hash")))?;
        let mut peers = response.peers.unwrap_or_default();
        let total_pieces = self.checked_total(response.total_pieces, &peers)?;

        let stored = self.store.list_ordinals(&content_id).await?;
        let missing: BTreeSet<u64> = (0..total_pieces).filter(|ordinal| !stored.contains(ordinal)).collect();
        let mut fetched = 0u64;
        if !missing.is_empty() {
            if !stored.is_empty() {
                let holders = self.request_download(file_name, Some(missing.iter().copied().collect())).await?;
                peers = holders.peers.unwrap_or_default();
            }
            info!("[NODE] Requesting {} of {total_pieces} pieces of {file_name}", missing.len());
            let response = self.client.send(&Request::DownloadPieces(DownloadPiecesRequest {
                file_name: file_name.to_string(),
                missing_pieces: missing.iter().copied().collect(),
            })).await?;
            match response.failure_message().map(str::to_string) {
                Some(message) => warn!("[NODE] No pieces for {file_name}: {message}"),
                None => {
                    for piece in response.pieces.unwrap_or_default() {
                        if !missing.contains(&piece.piece_index) {
                            debug!("[NODE] Ignoring unrequested piece {} of {file_name}", piece.piece_index);
                            continue;
                        }
                        let data = piece.decode_data().map_err(TransportError::from)?;
                        if data.len() as u64 > self.config.chunk_size {
                            return Err(TransportError::InvalidResponse(format!(
                                "piece {} is {} bytes, chunk size is {}", piece.piece_index, data.len(), self.config.chunk_size
                            )).into());
                        }
                        self.store.put(&content_id, piece.piece_index, &data).await?;
                        fetched += 1;
                    }
                }
            }
        }

        let still_missing = self.store.missing_ordinals(&content_id, &missing).await?;
        if !still_missing.is_empty() {
            return Err(SessionError::Incomplete { missing: still_missing.into_iter().collect() });
        }

        let data = self.store.assemble(&content_id, total_pieces).await?;
        let actual = hash_bytes(&data);
        if actual != content_id {
            return Err(SessionError::ContentMismatch { expected: content_id, actual });
        }
        tokio::fs::write(output, &data).await?;
        info!("[NODE] Downloaded {file_name} to {} ({} bytes)", output.display(), data.len());

        Ok(DownloadReport {
            content_id,
            file_name: file_name.to_string(),
            total_pieces,
            fetched,
            bytes: data.len() as u64,
            peers,
        })
    }

    async fn request_download(&self, file_name: &str, missing_pieces: Option<Vec<u64>>) -> Result<Response, SessionError>
    {
        let response = self.client.send(&Request::Download(DownloadRequest {
            file_name: file_name.to_string(),
            missing_pieces,
        })).await?;
        if let Some(message) = response.failure_message() {
            return Err(SessionError::Rejected(message.to_string()));
        }
        Ok(response)
    }

    /// Piece count to fetch: the advertised one, or one past the highest
    /// ordinal any peer claims. Counts beyond `max_file_size` are refused.
    fn checked_total(&self, advertised: Option<u64>, peers: &[PeerInfo]) -> Result<u64, SessionError>
    {
        let total = match advertised {
            Some(total) => total,
            None => {
                let highest = peers.iter()
                    .flat_map(|peer| peer.file_pieces.iter().copied())
                    .max()
                    .ok_or(SessionError::NoPeers)?;
                highest.checked_add(1).ok_or_else(|| {
                    TransportError::InvalidResponse(format!("piece ordinal {highest} is out of range"))
                })?
            }
        };
        let limit = self.config.max_pieces();
        if total > limit {
            return Err(TransportError::InvalidResponse(format!("{total} pieces exceed the limit of {limit}")).into());
        }
        Ok(total)
    }
}
