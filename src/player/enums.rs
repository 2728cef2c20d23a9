//! Player directory enumerations.

/// Errors reported by a player directory.
pub mod directory_error;
