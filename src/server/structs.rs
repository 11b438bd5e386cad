//! Server structures.

/// Listener and connection limits.
pub mod tcp_server;
