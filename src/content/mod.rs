//! Content addressing.
//!
//! A file is named by the SHA-1 digest of its complete byte content. The
//! digest is computed incrementally over fixed-size read windows, so hashing
//! a file never holds more than one window in memory.
//!
//! # Example
//!
//! ```rust
//! use swarm_tracker::content::content::{hash_bytes, magnet_link};
//!
//! let content_id = hash_bytes(b"abc");
//! assert_eq!(content_id.to_string(), "a9993e364706816aba3e25717850c26c9cd0d89d");
//! assert_eq!(magnet_link(&content_id), "magnet:?xt=urn:btih:a9993e364706816aba3e25717850c26c9cd0d89d");
//! ```

/// Hashing functions and the magnet descriptor.
#[allow(clippy::module_inception)]
pub mod content;

/// Content identifier data structure.
pub mod structs;

/// ContentId implementation: Display, FromStr, Serialize, Deserialize.
pub mod impls;
