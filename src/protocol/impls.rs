//! Implementation blocks for protocol messages.

/// Request decoding, encoding and constructors.
pub mod request;

/// Response constructors and decoding.
pub mod response;

/// PeerInfo conversions from directory types.
pub mod peer_info;

/// PiecePayload and UploadPieceRequest data encoding.
pub mod piece_payload;
