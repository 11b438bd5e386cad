use serde::{Deserialize, Serialize};
use crate::protocol::structs::download_pieces_request::DownloadPiecesRequest;
use crate::protocol::structs::download_request::DownloadRequest;
use crate::protocol::structs::register_request::RegisterRequest;
use crate::protocol::structs::upload_piece_request::UploadPieceRequest;
use crate::protocol::structs::upload_request::UploadRequest;

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(tag = "command", rename_all = "snake_case")]
pub enum Request {
    Register(RegisterRequest),
    Upload(UploadRequest),
    UploadPiece(UploadPieceRequest),
    Download(DownloadRequest),
    DownloadPieces(DownloadPiecesRequest),
}
