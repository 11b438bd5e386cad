//! Wire protocol between nodes and the tracker.
//!
//! Every connection carries one UTF-8 JSON request object, selected by its
//! `command` field, and at most one JSON response object. The client
//! half-closes its write side after the request; the tracker closes the
//! connection after the response.
//!
//! | command | required fields |
//! |---|---|
//! | `register` | `file_name`, `file_hash`, `file_pieces`, `magnet_link` |
//! | `upload` | `node_id`, `file_name`, `file_hash`, `file_pieces`, `magnet_link` |
//! | `upload_piece` | `file_hash`, `piece_index`, `piece_data` |
//! | `download` | `file_name` |
//! | `download_pieces` | `file_name`, `missing_pieces` |
//!
//! Piece bytes travel base64 encoded because the envelope is text.
//!
//! # Example
//!
//! ```rust
//! use swarm_tracker::protocol::enums::request::Request;
//!
//! let request = Request::decode(br#"{"command": "download", "file_name": "report.pdf"}"#).unwrap();
//! assert_eq!(request.command(), "download");
//! ```

/// Request and status enumerations.
pub mod enums;

/// Error types for decoding and encoding messages.
pub mod errors;

/// Implementation blocks for protocol messages.
pub mod impls;

/// Piece data transport encoding.
#[allow(clippy::module_inception)]
pub mod protocol;

/// Request and response message structures.
pub mod structs;
