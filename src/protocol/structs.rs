//! Protocol message structures.

/// `download` request.
pub mod download_request;

/// `download_pieces` request.
pub mod download_pieces_request;

/// Peer description returned to nodes.
pub mod peer_info;

/// One piece carried in a `download_pieces` response.
pub mod piece_payload;

/// `register` request.
pub mod register_request;

/// Response envelope shared by all commands.
pub mod response;

/// `upload_piece` request.
pub mod upload_piece_request;

/// `upload` request.
pub mod upload_request;
