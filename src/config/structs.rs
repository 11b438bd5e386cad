//! Configuration data structures.
//!
//! Each struct corresponds to a section in the TOML configuration file.

/// Root configuration structure containing all settings.
pub mod configuration;

/// Tracker listener settings.
pub mod tracker_config;

/// Tracker-side piece storage settings.
pub mod storage_config;

/// Node client settings.
pub mod node_config;
