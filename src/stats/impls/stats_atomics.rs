use std::sync::atomic::{AtomicI64, Ordering};
use chrono::Utc;
use crate::stats::enums::stats_event::StatsEvent;
use crate::stats::structs::stats::Stats;
use crate::stats::structs::stats_atomics::StatsAtomics;

impl Default for StatsAtomics {
    fn default() -> Self {
        Self::new()
    }
}

impl StatsAtomics {
    pub fn new() -> StatsAtomics {
        StatsAtomics {
            started: AtomicI64::new(Utc::now().timestamp()),
            timestamp_run_console: AtomicI64::new(0),
            timestamp_run_share_cleanup: AtomicI64::new(0),
            queries_submitted: AtomicI64::new(0),
            queries_admitted: AtomicI64::new(0),
            queries_completed: AtomicI64::new(0),
            queries_failed: AtomicI64::new(0),
            queries_timed_out: AtomicI64::new(0),
            queries_in_flight: AtomicI64::new(0),
            rejected_reload: AtomicI64::new(0),
            rejected_running: AtomicI64::new(0),
            rejected_invalid: AtomicI64::new(0),
            shares_created: AtomicI64::new(0),
            shares_rejected: AtomicI64::new(0),
            shares_redeemed: AtomicI64::new(0),
            shares_expired: AtomicI64::new(0),
            reloads: AtomicI64::new(0),
        }
    }

    fn counter(&self, event: StatsEvent) -> &AtomicI64 {
        match event {
            StatsEvent::QueriesSubmitted => &self.queries_submitted,
            StatsEvent::QueriesAdmitted => &self.queries_admitted,
            StatsEvent::QueriesCompleted => &self.queries_completed,
            StatsEvent::QueriesFailed => &self.queries_failed,
            StatsEvent::QueriesTimedOut => &self.queries_timed_out,
            StatsEvent::QueriesInFlight => &self.queries_in_flight,
            StatsEvent::RejectedReload => &self.rejected_reload,
            StatsEvent::RejectedRunning => &self.rejected_running,
            StatsEvent::RejectedInvalid => &self.rejected_invalid,
            StatsEvent::SharesCreated => &self.shares_created,
            StatsEvent::SharesRejected => &self.shares_rejected,
            StatsEvent::SharesRedeemed => &self.shares_redeemed,
            StatsEvent::SharesExpired => &self.shares_expired,
            StatsEvent::Reloads => &self.reloads,
            StatsEvent::TimestampConsole => &self.timestamp_run_console,
            StatsEvent::TimestampShareCleanup => &self.timestamp_run_share_cleanup,
        }
    }

    pub fn update(&self, event: StatsEvent, value: i64) {
        let counter = self.counter(event);
        match event {
            StatsEvent::TimestampConsole | StatsEvent::TimestampShareCleanup => {
                counter.store(value, Ordering::SeqCst);
            }
            _ => {
                if value > 0 { counter.fetch_add(value, Ordering::SeqCst); }
                if value < 0 { counter.fetch_sub(-value, Ordering::SeqCst); }
            }
        }
    }

    pub fn snapshot(&self) -> Stats {
        Stats {
            started: self.started.load(Ordering::SeqCst),
            timestamp_run_console: self.timestamp_run_console.load(Ordering::SeqCst),
            timestamp_run_share_cleanup: self.timestamp_run_share_cleanup.load(Ordering::SeqCst),
            queries_submitted: self.queries_submitted.load(Ordering::SeqCst),
            queries_admitted: self.queries_admitted.load(Ordering::SeqCst),
            queries_completed: self.queries_completed.load(Ordering::SeqCst),
            queries_failed: self.queries_failed.load(Ordering::SeqCst),
            queries_timed_out: self.queries_timed_out.load(Ordering::SeqCst),
            queries_in_flight: self.queries_in_flight.load(Ordering::SeqCst),
            rejected_reload: self.rejected_reload.load(Ordering::SeqCst),
            rejected_running: self.rejected_running.load(Ordering::SeqCst),
            rejected_invalid: self.rejected_invalid.load(Ordering::SeqCst),
            shares_created: self.shares_created.load(Ordering::SeqCst),
            shares_rejected: self.shares_rejected.load(Ordering::SeqCst),
            shares_redeemed: self.shares_redeemed.load(Ordering::SeqCst),
            shares_expired: self.shares_expired.load(Ordering::SeqCst),
            reloads: self.reloads.load(Ordering::SeqCst),
        }
    }
}
