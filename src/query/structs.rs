//! Query data structures.

/// Unvalidated query as typed by a user.
pub mod raw_query;

/// Validated, immutable request handed to a worker.
pub mod request;

/// Identities (or the global key) with a query running.
pub mod in_flight_set;

/// Releases an in-flight slot when dropped.
pub mod in_flight_guard;

/// Handle to an admitted request.
pub mod query_ticket;

/// Last successful rendered result of an identity.
pub mod last_result;

/// Admission, execution and delivery of queries.
pub mod query_dispatcher;
