//! Implementation blocks for configuration types.

/// Configuration defaults, loading, saving and validation.
pub mod configuration;

/// ConfigurationError Display and Error implementations.
pub mod configuration_error;
