#[cfg(test)]
mod stats_tests {
    use crate::stats::enums::stats_event::StatsEvent;
    use crate::stats::structs::stats_atomics::StatsAtomics;

    #[test]
    fn test_counters_add_and_subtract() {
        let stats = StatsAtomics::new();
        stats.update(StatsEvent::QueriesSubmitted, 3);
        stats.update(StatsEvent::QueriesInFlight, 2);
        stats.update(StatsEvent::QueriesInFlight, -1);
        let snapshot = stats.snapshot();
        assert_eq!(snapshot.queries_submitted, 3);
        assert_eq!(snapshot.queries_in_flight, 1);
        assert_eq!(snapshot.queries_completed, 0);
    }

    #[test]
    fn test_timestamps_are_stored() {
        let stats = StatsAtomics::new();
        stats.update(StatsEvent::TimestampConsole, 100);
        stats.update(StatsEvent::TimestampConsole, 50);
        assert_eq!(stats.snapshot().timestamp_run_console, 50);
    }

    #[test]
    fn test_snapshot_serializes() {
        let stats = StatsAtomics::new();
        stats.update(StatsEvent::SharesCreated, 1);
        let json = serde_json::to_value(stats.snapshot()).unwrap();
        assert_eq!(json["shares_created"], 1);
        assert!(json["started"].as_i64().unwrap() > 0);
    }
}
