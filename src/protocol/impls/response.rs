use crate::content::structs::content_id::ContentId;
use crate::protocol::enums::response_status::ResponseStatus;
use crate::protocol::errors::ProtocolError;
use crate::protocol::structs::peer_info::PeerInfo;
use crate::protocol::structs::piece_payload::PiecePayload;
use crate::protocol::structs::response::Response;
use crate::tracker::structs::node_id::NodeId;

impl Response {
    pub fn success(message: &str) -> Response
    {
        Response {
            status: Some(ResponseStatus::Success),
            message: Some(message.to_string()),
            ..Default::default()
        }
    }

    pub fn error(message: &str) -> Response
    {
        Response {
            status: Some(ResponseStatus::Error),
            message: Some(message.to_string()),
            ..Default::default()
        }
    }

    /// Envelope for a request that could not be decoded. Field failures of a
    /// known command become a regular `status=error` response.
    pub fn from_protocol_error(error: &ProtocolError) -> Response
    {
        match error {
            ProtocolError::UnknownCommand(_) | ProtocolError::MissingCommand => Response {
                error: Some(String::from("Unknown command")),
                ..Default::default()
            },
            ProtocolError::InvalidRequest { .. } | ProtocolError::InvalidPieceData(_) => Response::error(&error.to_string()),
            ProtocolError::Decode(_) | ProtocolError::Encode(_) => Response {
                error: Some(error.to_string()),
                ..Default::default()
            }
        }
    }

    pub fn with_node_id(mut self, node_id: NodeId) -> Response
    {
        self.node_id = Some(node_id);
        self
    }

    pub fn with_file_hash(mut self, file_hash: ContentId) -> Response
    {
        self.file_hash = Some(file_hash);
        self
    }

    pub fn with_total_pieces(mut self, total_pieces: Option<u64>) -> Response
    {
        self.total_pieces = total_pieces;
        self
    }

    pub fn with_peers(mut self, peers: Vec<PeerInfo>) -> Response
    {
        self.peers = Some(peers);
        self
    }

    pub fn with_pieces(mut self, pieces: Vec<PiecePayload>) -> Response
    {
        self.pieces = Some(pieces);
        self
    }

    pub fn is_success(&self) -> bool
    {
        self.status == Some(ResponseStatus::Success)
    }

    /// The failure text of an error or protocol failure response.
    pub fn failure_message(&self) -> Option<&str>
    {
        if let Some(error) = &self.error {
            return Some(error.as_str());
        }
        match self.status {
            Some(ResponseStatus::Error) => self.message.as_deref(),
            _ => None
        }
    }

    pub fn decode(payload: &[u8]) -> Result<Response, ProtocolError>
    {
        serde_json::from_slice(payload).map_err(|e| ProtocolError::Decode(e.to_string()))
    }

    pub fn encode(&self) -> Result<Vec<u8>, ProtocolError>
    {
        serde_json::to_vec(self).map_err(|e| ProtocolError::Encode(e.to_string()))
    }
}
