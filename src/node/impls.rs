//! Client implementation blocks.

/// NodeSession construction.
pub mod node_session;

/// NodeSession download flow.
pub mod node_session_download;

/// NodeSession upload flow.
pub mod node_session_upload;

/// TrackerClient request exchange.
pub mod tracker_client;
