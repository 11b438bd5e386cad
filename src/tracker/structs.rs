//! Data structures for the swarm directory.

/// Tracker-assigned node identifier.
pub mod node_id;

/// Intersection of a node's pieces with a requested ordinal set.
pub mod peer_pieces;

/// All nodes known for a content id.
pub mod swarm_entry;

/// One node's entry in a swarm.
pub mod swarm_peer;

/// Sharded swarm storage (256 shards).
pub mod swarm_sharding;

/// The directory instance.
pub mod swarm_tracker;
