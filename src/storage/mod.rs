//! Piece storage.
//!
//! Pieces are persisted independently and addressed by (content id, ordinal).
//! The tracker and every node keep their own store. Two engines exist:
//!
//! - `filesystem` - one directory per content id, one `<ordinal>.piece` file per piece
//! - `memory` - an in-process map, for tests and throwaway trackers
//!
//! # Example
//!
//! ```rust,ignore
//! use swarm_tracker::storage::structs::piece_store::PieceStore;
//!
//! let store = PieceStore::filesystem("pieces").await?;
//! store.put(&content_id, 0, b"first piece").await?;
//! let ordinals = store.list_ordinals(&content_id).await?;
//! ```

/// Storage engine enumeration (filesystem, memory).
pub mod enums;

/// Error types for storage operations.
pub mod errors;

/// Implementation blocks for piece stores.
pub mod impls;

/// Data structures for piece stores.
pub mod structs;

/// Piece backend trait definition.
pub mod traits;
