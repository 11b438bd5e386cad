//! Activity counters for the tracker.
//!
//! Counters are atomic integers updated from connection tasks without
//! locking. Directory sizes (swarms, peers, nodes, files) move up as entries
//! are created; request counters tick once per handled command.
//!
//! # Example
//!
//! ```rust,ignore
//! use swarm_tracker::stats::enums::stats_event::StatsEvent;
//!
//! tracker.update_stats(StatsEvent::DownloadsHandled, 1);
//! let stats = tracker.get_stats();
//! ```

/// Statistics event enumeration.
pub mod enums;

/// Implementation blocks for statistics operations.
pub mod impls;

/// Statistics data structures (atomic counters).
pub mod structs;
