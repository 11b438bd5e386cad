use crate::content::structs::content_id::ContentId;
use crate::protocol::errors::ProtocolError;
use crate::protocol::protocol::{decode_piece_data, encode_piece_data};
use crate::protocol::structs::piece_payload::PiecePayload;
use crate::protocol::structs::upload_piece_request::UploadPieceRequest;

impl PiecePayload {
    pub fn new(piece_index: u64, data: &[u8]) -> PiecePayload
    {
        PiecePayload {
            piece_index,
            piece_data: encode_piece_data(data),
        }
    }

    pub fn decode_data(&self) -> Result<Vec<u8>, ProtocolError>
    {
        decode_piece_data(&self.piece_data)
    }
}

impl UploadPieceRequest {
    pub fn new(file_hash: ContentId, piece_index: u64, data: &[u8]) -> UploadPieceRequest
    {
        UploadPieceRequest {
            file_hash,
            piece_index,
            piece_data: encode_piece_data(data),
        }
    }

    pub fn decode_data(&self) -> Result<Vec<u8>, ProtocolError>
    {
        decode_piece_data(&self.piece_data)
    }
}
