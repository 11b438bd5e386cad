//! Common data structures.

/// Plain message error.
pub mod custom_error;
