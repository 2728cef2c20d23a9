use serde::{Deserialize, Serialize};

/// Selects the counter touched by `StatsAtomics::update`.
///
/// Positive values add, negative values subtract. `QueriesInFlight` is a
/// gauge and is moved both ways; everything else only grows.
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq)]
pub enum StatsEvent {
    QueriesSubmitted,
    QueriesAdmitted,
    QueriesCompleted,
    QueriesFailed,
    QueriesTimedOut,
    QueriesInFlight,
    RejectedReload,
    RejectedRunning,
    RejectedInvalid,
    SharesCreated,
    SharesRejected,
    SharesRedeemed,
    SharesExpired,
    Reloads,
    TimestampConsole,
    TimestampShareCleanup,
}
