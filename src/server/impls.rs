//! Server implementation blocks.

/// Accept loop and connection handling.
pub mod tcp_server;
