use std::sync::atomic::AtomicI64;

#[derive(Debug)]
pub struct StatsAtomics {
    pub started: AtomicI64,
    pub timestamp_run_console: AtomicI64,
    pub timestamp_run_share_cleanup: AtomicI64,
    pub queries_submitted: AtomicI64,
    pub queries_admitted: AtomicI64,
    pub queries_completed: AtomicI64,
    pub queries_failed: AtomicI64,
    pub queries_timed_out: AtomicI64,
    pub queries_in_flight: AtomicI64,
    pub rejected_reload: AtomicI64,
    pub rejected_running: AtomicI64,
    pub rejected_invalid: AtomicI64,
    pub shares_created: AtomicI64,
    pub shares_rejected: AtomicI64,
    pub shares_redeemed: AtomicI64,
    pub shares_expired: AtomicI64,
    pub reloads: AtomicI64,
}
