//! Storage data structures.

/// Engine-agnostic piece store handle.
pub mod piece_store;

/// File system backed piece store.
pub mod piece_store_filesystem;

/// In-memory piece store.
pub mod piece_store_memory;
