//! Configuration management module.
//!
//! This module handles loading, parsing, and validating the configuration
//! from TOML files. One file configures both roles: the tracker reads the
//! `[tracker]` and `[storage]` sections, a node reads `[node]`.
//!
//! # Configuration Structure
//!
//! - **log_level** / **log_console_interval**: logging and stats console output
//! - **tracker**: listener address, connection bound, request limits
//! - **storage**: tracker-side piece storage engine and location
//! - **node**: tracker address, chunk size, hash window, node-side storage
//!
//! # Example
//!
//! ```rust,ignore
//! use swarm_tracker::config::structs::configuration::Configuration;
//!
//! // Load configuration from file, creating a default one if asked to
//! let config = Configuration::load_from_file("config.toml", true)?;
//!
//! // Generate default configuration
//! let default_config = Configuration::init();
//! ```

/// Configuration enumerations (errors).
pub mod enums;

/// Configuration data structures.
pub mod structs;

/// Implementation blocks for configuration loading/saving.
pub mod impls;

/// Unit tests for configuration.
pub mod tests;
