use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Stats {
    pub started: i64,
    pub timestamp_run_console: i64,
    pub timestamp_run_share_cleanup: i64,
    pub queries_submitted: i64,
    pub queries_admitted: i64,
    pub queries_completed: i64,
    pub queries_failed: i64,
    pub queries_timed_out: i64,
    pub queries_in_flight: i64,
    pub rejected_reload: i64,
    pub rejected_running: i64,
    pub rejected_invalid: i64,
    pub shares_created: i64,
    pub shares_rejected: i64,
    pub shares_redeemed: i64,
    pub shares_expired: i64,
    pub reloads: i64,
}
