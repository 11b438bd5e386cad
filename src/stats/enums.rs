//! Statistics enumerations.

/// Event types that update a counter.
pub mod stats_event;
