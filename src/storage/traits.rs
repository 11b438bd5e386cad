//! Storage traits.

/// Backend contract shared by all storage engines.
pub mod piece_backend;
