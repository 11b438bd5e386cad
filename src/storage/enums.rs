//! Storage enumerations.

/// Storage engine selection.
pub mod storage_engine;
