use crate::query::structs::query_dispatcher::QueryDispatcher;
use crate::stats::enums::stats_event::StatsEvent;
use crate::stats::structs::stats::Stats;

impl QueryDispatcher {
    pub fn get_stats(&self) -> Stats {
        self.stats.snapshot()
    }

    pub fn update_stats(&self, event: StatsEvent, value: i64) -> Stats {
        self.stats.update(event, value);
        self.stats.snapshot()
    }
}
