//! Implementation blocks for tracker data structures.
//!
//! Implementations are organized by the struct they extend; the directory's
//! operations are split by concern.

/// NodeId implementation: generation, Display, conversions.
pub mod node_id;

/// PeerPieces implementation.
pub mod peer_pieces;

/// SwarmEntry implementation.
pub mod swarm_entry;

/// SwarmPeer implementation.
pub mod swarm_peer;

/// SwarmSharding implementation: shard lookup and counts.
pub mod swarm_sharding;

/// SwarmTracker core implementation: initialization.
pub mod swarm_tracker;

/// SwarmTracker file name index (bind, resolve).
pub mod swarm_tracker_files;

/// SwarmTracker node id issuing.
pub mod swarm_tracker_nodes;

/// SwarmTracker swarm operations (register, peer queries).
pub mod swarm_tracker_swarms;

/// SwarmTracker request handlers (one per command).
pub mod swarm_tracker_handlers;
