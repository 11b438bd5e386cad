//! Piece data structures.

/// A single ordinal of a file and its bytes.
pub mod piece;
