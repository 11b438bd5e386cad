//! Client structures.

/// Result of a completed download.
pub mod download_report;

/// Upload and download orchestration.
pub mod node_session;

/// One-request-per-connection transport.
pub mod tracker_client;

/// Result of a completed upload.
pub mod upload_report;
