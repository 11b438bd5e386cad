//! Client side of the tracker protocol.
//!
//! A `NodeSession` drives the upload and download flows against one tracker
//! through a `TrackerClient`, keeping its own copy of every piece in a local
//! `PieceStore`.
//!
//! # Example
//!
//! ```rust,ignore
//! use swarm_tracker::node::structs::node_session::NodeSession;
//!
//! let mut session = NodeSession::open(&config.node).await?;
//! let report = session.upload(Path::new("report.pdf"), None).await?;
//! session.download("report.pdf", Path::new("copy.pdf")).await?;
//! ```

/// Session and transport errors.
pub mod errors;

/// Implementation blocks for the client.
pub mod impls;

/// Client structures.
pub mod structs;
