//! Implementation blocks for common types.

/// CustomError implementation: constructor, Display, Error.
pub mod custom_error;

/// Clock implementation: reading and offsetting time.
pub mod clock;
