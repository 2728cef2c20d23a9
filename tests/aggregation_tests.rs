// Integration tests for the aggregation engine

use std::sync::Arc;
use proptest::prelude::*;
use playerstats::aggregation::structs::aggregation_engine::AggregationEngine;
use playerstats::aggregation::structs::scan_context::ScanContext;
use playerstats::player::structs::memory_directory::MemoryDirectory;
use playerstats::player::structs::player_record::PlayerRecord;
use playerstats::statistic::enums::qualifier_kind::QualifierKind;
use playerstats::statistic::enums::statistic_kind::StatisticKind;
use playerstats::statistic::structs::qualifier::Qualifier;
use playerstats::statistic::structs::statistic_descriptor::StatisticDescriptor;

fn jump() -> StatisticDescriptor {
    StatisticDescriptor { name: String::from("jump"), kind: StatisticKind::Untyped }
}

fn engine_with(values: &[i32]) -> AggregationEngine {
    let directory = MemoryDirectory::new();
    for (index, value) in values.iter().enumerate() {
        directory.insert_player(PlayerRecord::new(&format!("P{index}")).with_stat("jump", None, *value));
    }
    AggregationEngine::new(Arc::new(directory))
}

#[test]
fn test_blocks_mined_example() {
    let directory = MemoryDirectory::new();
    directory.insert_player(PlayerRecord::new("Ada").with_stat("blocks_mined", Some("stone"), 42));
    directory.insert_player(PlayerRecord::new("Grace"));
    let engine = AggregationEngine::new(Arc::new(directory));

    let blocks_mined = StatisticDescriptor { name: String::from("blocks_mined"), kind: StatisticKind::Block };
    let stone = Qualifier { name: String::from("stone"), kind: QualifierKind::Block };
    assert_eq!(engine.value_for("Ada", &blocks_mined, Some(&stone)), Ok(42));
    assert_eq!(engine.value_for("Grace", &blocks_mined, Some(&stone)), Ok(0));
}

#[test]
fn test_tie_example() {
    let directory = MemoryDirectory::new();
    directory.insert_player(PlayerRecord::new("A").with_stat("jump", None, 5));
    directory.insert_player(PlayerRecord::new("B").with_stat("jump", None, 5));
    directory.insert_player(PlayerRecord::new("C").with_stat("jump", None, 3));
    let engine = AggregationEngine::new(Arc::new(directory));

    let ranked = engine.top_n(&jump(), None, 2, 10, &ScanContext::unbounded()).unwrap();
    assert_eq!(ranked.to_pairs(), vec![(String::from("A"), 5), (String::from("B"), 5)]);
}

proptest! {
    #[test]
    fn prop_server_total_is_sum_of_values(values in prop::collection::vec(-1000i32..1000, 0..80)) {
        let engine = engine_with(&values);
        let expected: i64 = values.iter().map(|value| *value as i64).sum();
        prop_assert_eq!(engine.server_total(&jump(), None, &ScanContext::unbounded()).unwrap(), expected);
    }

    #[test]
    fn prop_top_n_is_bounded_positive_and_ordered(values in prop::collection::vec(-5i32..20, 0..80), limit in 1usize..15, max_limit in 1usize..15) {
        let engine = engine_with(&values);
        let ranked = engine.top_n(&jump(), None, limit, max_limit, &ScanContext::unbounded()).unwrap();

        prop_assert!(ranked.len() <= limit.min(max_limit));
        prop_assert!(ranked.iter().all(|sample| sample.value > 0));
        for pair in ranked.entries.windows(2) {
            prop_assert!(pair[0].value >= pair[1].value);
            if pair[0].value == pair[1].value {
                let first: usize = pair[0].player[1..].parse().unwrap();
                let second: usize = pair[1].player[1..].parse().unwrap();
                prop_assert!(first < second, "Ties keep scan order");
            }
        }

        let mut full: Vec<(usize, i32)> = values.iter().copied().enumerate().filter(|(_, value)| *value > 0).collect();
        full.sort_by(|a, b| b.1.cmp(&a.1));
        let expected: Vec<(String, i32)> = full
            .into_iter()
            .take(limit.min(max_limit))
            .map(|(index, value)| (format!("P{index}"), value))
            .collect();
        prop_assert_eq!(ranked.to_pairs(), expected);
    }
}
