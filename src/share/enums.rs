//! Share enumerations.

/// Typed outcomes of share and redeem.
pub mod share_error;
