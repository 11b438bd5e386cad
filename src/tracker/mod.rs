//! Core swarm directory implementation.
//!
//! This module contains the tracker's registry of swarms and file names, the
//! node id generator and the per-command request handlers.
//!
//! # Architecture
//!
//! Swarms are stored in a sharded map:
//! - Swarms are distributed across 256 shards based on the first byte of the content id
//! - Each shard is protected by a `RwLock`; every operation on one content id
//!   runs entirely under its shard lock, so no caller observes a torn swarm
//! - The file name index and the set of issued node ids have their own locks
//! - No lock is ever held across I/O or an `.await`
//!
//! # Main Components
//!
//! - `SwarmTracker` - The directory instance shared by all connections
//! - `SwarmSharding` - Sharded storage for swarms
//! - `SwarmEntry` - All nodes known for one content id
//! - `SwarmPeer` - One node's piece set and reachability
//! - `NodeId` - Tracker-assigned node identifier
//!
//! # Example
//!
//! ```rust,ignore
//! use std::collections::BTreeSet;
//! use swarm_tracker::tracker::structs::swarm_peer::SwarmPeer;
//!
//! let node_id = tracker.generate_node_id();
//! tracker.register_or_update(content_id, SwarmPeer::new(node_id, BTreeSet::from([0, 1]), magnet, None), Some(2));
//! let holders = tracker.peers_holding(content_id, &BTreeSet::from([1]));
//! ```

/// Implementation blocks for tracker structs.
///
/// Contains the method implementations for the `SwarmTracker`, the sharding
/// logic, swarm/peer types and the request handlers.
pub mod impls;

/// Data structures for the swarm directory.
pub mod structs;

/// Unit tests for the swarm directory.
pub mod tests;
