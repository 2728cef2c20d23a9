//! Implementation blocks for configuration types.

/// Configuration loading, saving and validation.
pub mod configuration;

/// ConfigurationError Display and Error implementations.
pub mod configuration_error;

/// SingleFlightPolicy helpers.
pub mod single_flight_policy;
