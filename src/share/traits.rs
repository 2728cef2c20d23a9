//! Share capability traits.

/// Permission lookup for redeeming codes.
pub mod permission_check;
