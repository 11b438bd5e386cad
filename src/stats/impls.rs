//! Statistics implementation blocks.

/// Counter construction.
pub mod stats_atomics;

/// Counter reads and updates on the tracker.
pub mod swarm_tracker;
