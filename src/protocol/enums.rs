//! Protocol enumerations.

/// Decoded request, one variant per command.
pub mod request;

/// Response status (success, error).
pub mod response_status;
