use base64::Engine;
use base64::engine::general_purpose::STANDARD;
use crate::protocol::errors::ProtocolError;

pub fn encode_piece_data(data: &[u8]) -> String
{
    STANDARD.encode(data)
}

pub fn decode_piece_data(encoded: &str) -> Result<Vec<u8>, ProtocolError>
{
    STANDARD.decode(encoded).map_err(|e| ProtocolError::InvalidPieceData(e.to_string()))
}
