use std::sync::Arc;
use crate::query::structs::in_flight_guard::InFlightGuard;
use crate::stats::enums::stats_event::StatsEvent;
use crate::stats::structs::stats_atomics::StatsAtomics;

impl InFlightGuard {
    pub fn key(&self) -> &str {
        &self.key
    }

    /// Counts this guard in the in-flight gauge until it is dropped.
    pub fn track_in(mut self, stats: Arc<StatsAtomics>) -> InFlightGuard {
        stats.update(StatsEvent::QueriesInFlight, 1);
        self.gauge = Some(stats);
        self
    }
}

impl Drop for InFlightGuard {
    fn drop(&mut self) {
        self.set.keys.lock().remove(&self.key);
        if let Some(stats) = self.gauge.take() {
            stats.update(StatsEvent::QueriesInFlight, -1);
        }
    }
}
