//! Content addressing data structures.

/// 20-byte SHA-1 content identifier.
pub mod content_id;
