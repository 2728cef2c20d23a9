//! Query enumerations.

/// Error taxonomy for resolution, admission and execution.
pub mod query_error;

/// Individual, server total or top-N.
pub mod target_mode;

/// Lifecycle of a submitted request.
pub mod query_state;

/// Numeric or ranked outcome of a query.
pub mod query_result;

/// Where a rendered result is delivered.
pub mod destination;
