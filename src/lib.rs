//! # Swarm Tracker
//!
//! A piece-addressed file swarm tracker and the node client that talks to it.
//!
//! ## Overview
//!
//! A node splits a file into fixed-size pieces, names the file by the SHA-1 of
//! its contents, pushes the pieces to the tracker and announces the ordinals it
//! holds. Other nodes ask the tracker which peers hold the pieces they miss,
//! pull those pieces and reassemble the file.
//!
//! The tracker keeps a sharded, concurrently accessed directory of swarms
//! (content id → node → piece ordinals) and a file name index. Every accepted
//! connection carries exactly one JSON request and receives at most one JSON
//! response before the tracker closes it.
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use std::sync::Arc;
//! use swarm_tracker::config::structs::configuration::Configuration;
//! use swarm_tracker::storage::structs::piece_store::PieceStore;
//! use swarm_tracker::tracker::structs::swarm_tracker::SwarmTracker;
//!
//! let config = Arc::new(Configuration::init());
//! let storage = PieceStore::new(&config.storage).await?;
//! let tracker = Arc::new(SwarmTracker::new(config, storage));
//! ```
//!
//! ## Modules
//!
//! - [`common`] - Logging setup, shared errors and helpers
//! - [`config`] - Configuration management and TOML parsing
//! - [`content`] - Content identifiers and magnet descriptors
//! - [`node`] - Node client sessions (upload, download)
//! - [`pieces`] - Chunking and reassembly
//! - [`protocol`] - Wire messages exchanged between nodes and the tracker
//! - [`server`] - TCP transport for the tracker
//! - [`stats`] - Atomic counters of tracker activity
//! - [`storage`] - Piece persistence backends
//! - [`structs`] - CLI argument parsing
//! - [`tracker`] - The swarm directory and request handlers

/// Common utilities and shared functionality.
///
/// Contains the logging setup, the generic `CustomError` type and
/// timestamp helpers used across all modules.
pub mod common;

/// Configuration management module.
///
/// Handles loading, parsing, and validating configuration from TOML files
/// for both the tracker and the node side.
pub mod config;

/// Content addressing module.
///
/// Computes SHA-1 content identifiers over bounded read windows and builds
/// the informational magnet descriptor.
pub mod content;

/// Node client module.
///
/// Orchestrates uploads and downloads against a tracker, one request per
/// connection, with a single bounded wait per request.
pub mod node;

/// Piece chunking and reassembly.
pub mod pieces;

/// Wire protocol module.
///
/// Request and response messages, their JSON encoding and the base64
/// transport encoding for piece bytes.
pub mod protocol;

/// TCP transport for the tracker.
///
/// Accepts connections, reads exactly one request from each, and writes back
/// the handler's response before closing. Concurrency is bounded by a
/// semaphore.
pub mod server;

/// Statistics tracking module.
///
/// Collects counters for swarms, nodes, stored pieces and handled commands.
pub mod stats;

/// Piece storage module.
///
/// Persists pieces addressed by (content id, ordinal) on the file system or
/// in memory.
pub mod storage;

/// CLI argument parsing.
pub mod structs;

/// Core tracker logic module.
///
/// Contains the swarm directory, its sharded storage, node id generation and
/// the per-command request handlers.
pub mod tracker;
