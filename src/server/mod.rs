//! TCP transport for the tracker.
//!
//! One task per accepted connection, bounded by a semaphore. Each connection
//! carries exactly one request: the payload is read until the client
//! half-closes, handed to the tracker, and the response (if any) is written
//! back before the socket is closed.

/// Implementation blocks for the TCP server.
pub mod impls;

/// Service startup helper.
#[allow(clippy::module_inception)]
pub mod server;

/// TCP server structure.
pub mod structs;

/// Unit tests for the TCP server.
pub mod tests;
