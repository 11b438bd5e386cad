//! Piece chunking and reassembly.
//!
//! A byte stream is split into pieces of a fixed chunk size, numbered from
//! zero in stream order. Every piece except possibly the last is exactly one
//! chunk long. Reassembly concatenates pieces by ascending ordinal and
//! refuses to produce a file with gaps.
//!
//! # Example
//!
//! ```rust
//! use swarm_tracker::pieces::pieces::{reassemble, split};
//!
//! let data = vec![7u8; 2500];
//! let pieces = split(&data, 1024).unwrap();
//! assert_eq!(pieces.len(), 3);
//! assert_eq!(pieces[2].data.len(), 452);
//! assert_eq!(reassemble(pieces).unwrap(), data);
//! ```

/// Split and reassemble functions.
#[allow(clippy::module_inception)]
pub mod pieces;

/// Error types for chunking and reassembly.
pub mod errors;

/// Piece data structure.
pub mod structs;

/// Unit tests for chunking and reassembly.
pub mod tests;
