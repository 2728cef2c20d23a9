//! Configuration enumerations.

/// Errors raised while loading, saving or validating configuration.
pub mod configuration_error;

/// How many queries may run at once: one per identity, or one overall.
pub mod single_flight_policy;
