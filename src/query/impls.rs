//! Implementation blocks for query types.

/// TargetMode and QueryState Display.
pub mod target_mode;

/// RawQuery builders.
pub mod raw_query;

/// Request resolution and accessors.
pub mod request;

/// InFlightSet: atomic test-and-insert.
pub mod in_flight_set;

/// InFlightGuard: release on drop.
pub mod in_flight_guard;

/// QueryTicket: awaiting completion.
pub mod query_ticket;

/// QueryDispatcher: construction, admission and worker execution.
pub mod query_dispatcher;

/// QueryDispatcher: share and redeem flow.
pub mod query_dispatcher_share;

/// QueryDispatcher: reload gate and configuration swap.
pub mod query_dispatcher_reload;

/// QueryDispatcher: runtime exclusion list.
pub mod query_dispatcher_exclusions;
