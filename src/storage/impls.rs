//! Implementation blocks for piece stores.

/// PieceStore construction and high-level operations.
pub mod piece_store;

/// Filesystem backend implementation.
pub mod piece_store_filesystem;

/// Memory backend implementation.
pub mod piece_store_memory;
