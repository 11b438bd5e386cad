//! Common utilities and shared functionality.
//!
//! This module contains helper functions and data structures used across
//! all other modules in the crate.
//!
//! # Utilities
//!
//! - Logging setup
//! - Timestamp utilities
//! - Graceful shutdown waiting
//!
//! # Data Structures
//!
//! - `CustomError` - Plain message error used during startup
//!
//! # Example
//!
//! ```rust,ignore
//! use swarm_tracker::common::common::{setup_logging, current_time};
//!
//! setup_logging(&config)?;
//! let now = current_time();
//! ```

/// Common data structures (errors).
pub mod structs;

/// Core utility functions.
#[allow(clippy::module_inception)]
pub mod common;

/// Implementation blocks for common types.
pub mod impls;
