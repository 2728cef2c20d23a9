#[cfg(test)]
mod query_tests {
    use std::sync::Arc;
    use crate::statistic::enums::qualifier_kind::QualifierKind;
    use crate::statistic::enums::statistic_kind::StatisticKind;
    use crate::statistic::structs::static_vocabulary::StaticVocabulary;
    use crate::statistic::structs::statistic_resolver::StatisticResolver;

    fn resolver() -> StatisticResolver {
        let mut vocabulary = StaticVocabulary::new();
        vocabulary.add_statistic("jump", StatisticKind::Untyped);
        vocabulary.add_statistic("mine_block", StatisticKind::Block);
        vocabulary.add_qualifier(QualifierKind::Block, "stone");
        StatisticResolver::new(Arc::new(vocabulary))
    }

    mod request_tests {
        use crate::query::enums::destination::Destination;
        use crate::query::enums::query_error::QueryError;
        use crate::query::enums::target_mode::TargetMode;
        use crate::query::structs::raw_query::RawQuery;
        use crate::query::structs::request::Request;

        #[test]
        fn test_individual_request() {
            let raw = RawQuery::player("Ada", "Mine_Block", " Grace ").with_qualifier("STONE");
            let request = Request::resolve(&raw, &super::resolver(), 10).unwrap();
            assert_eq!(request.mode(), TargetMode::Individual);
            assert_eq!(request.statistic().name, "mine_block");
            assert_eq!(request.qualifier().map(|q| q.name.as_str()), Some("stone"));
            assert_eq!(request.player(), Some("Grace"));
            assert_eq!(request.destination(), &Destination::Requester(String::from("Ada")));
        }

        #[test]
        fn test_individual_request_needs_player() {
            let mut raw = RawQuery::player("Ada", "jump", "   ");
            assert_eq!(Request::resolve(&raw, &super::resolver(), 10), Err(QueryError::MissingPlayerName));
            raw.player = None;
            assert_eq!(Request::resolve(&raw, &super::resolver(), 10), Err(QueryError::MissingPlayerName));
        }

        #[test]
        fn test_top_limit_is_capped() {
            let resolver = super::resolver();
            let request = Request::resolve(&RawQuery::top("Ada", "jump").with_limit(50), &resolver, 10).unwrap();
            assert_eq!(request.limit(), 10);
            let request = Request::resolve(&RawQuery::top("Ada", "jump").with_limit(3), &resolver, 10).unwrap();
            assert_eq!(request.limit(), 3);
            let request = Request::resolve(&RawQuery::top("Ada", "jump").with_limit(0), &resolver, 10).unwrap();
            assert_eq!(request.limit(), 10);
            let request = Request::resolve(&RawQuery::top("Ada", "jump"), &resolver, 10).unwrap();
            assert_eq!(request.limit(), 10);
        }

        #[test]
        fn test_broadcast_destination() {
            let request = Request::resolve(&RawQuery::server("Ada", "jump").broadcast(), &super::resolver(), 10).unwrap();
            assert_eq!(request.destination(), &Destination::Broadcast);
            assert_eq!(request.player(), None);
        }

        #[test]
        fn test_resolution_errors() {
            let resolver = super::resolver();
            assert_eq!(
                Request::resolve(&RawQuery::server("Ada", "fly"), &resolver, 10),
                Err(QueryError::UnknownStatistic(String::from("fly")))
            );
            assert_eq!(
                Request::resolve(&RawQuery::server("Ada", "jump").with_qualifier("stone"), &resolver, 10),
                Err(QueryError::QualifierNotAllowed { statistic: String::from("jump") })
            );
            assert!(matches!(
                Request::resolve(&RawQuery::server("Ada", "mine_block"), &resolver, 10),
                Err(QueryError::QualifierRequired { .. })
            ));
        }

        #[test]
        fn test_error_messages_are_distinct() {
            let internal = QueryError::UnexpectedFault(String::from("boom")).to_string();
            assert!(internal.starts_with("Internal error"));
            assert_ne!(QueryError::ReloadInProgress.to_string(), QueryError::RequestAlreadyRunning(String::from("Ada")).to_string());
        }
    }

    mod in_flight_tests {
        use std::sync::Arc;
        use crate::config::enums::single_flight_policy::SingleFlightPolicy;
        use crate::stats::structs::stats_atomics::StatsAtomics;
        use crate::query::structs::in_flight_set::InFlightSet;

        #[test]
        fn test_per_identity_policy() {
            let set = InFlightSet::new();
            let policy = SingleFlightPolicy::per_identity;
            let guard = set.try_acquire("Ada", &policy).unwrap();
            assert!(set.try_acquire("Ada", &policy).is_none());
            let other = set.try_acquire("Grace", &policy).unwrap();
            assert_eq!(set.len(), 2);
            drop(guard);
            assert!(!set.contains("Ada", &policy));
            assert!(set.try_acquire("Ada", &policy).is_some());
            drop(other);
        }

        #[test]
        fn test_global_policy() {
            let set = InFlightSet::new();
            let policy = SingleFlightPolicy::global;
            let guard = set.try_acquire("Ada", &policy).unwrap();
            assert!(set.try_acquire("Grace", &policy).is_none());
            assert!(set.contains("Grace", &policy));
            drop(guard);
            assert!(set.is_empty());
        }

        #[test]
        fn test_tracked_guard_updates_gauge() {
            let set = InFlightSet::new();
            let stats = Arc::new(StatsAtomics::new());
            let guard = set.try_acquire("Ada", &SingleFlightPolicy::per_identity).unwrap().track_in(stats.clone());
            assert_eq!(stats.snapshot().queries_in_flight, 1);
            drop(guard);
            assert_eq!(stats.snapshot().queries_in_flight, 0);
            assert!(set.is_empty());
        }

        #[test]
        fn test_shared_guard_releases_on_last_drop() {
            let set = InFlightSet::new();
            let policy = SingleFlightPolicy::per_identity;
            let guard = Arc::new(set.try_acquire("Ada", &policy).unwrap());
            let worker_share = guard.clone();
            drop(guard);
            assert!(set.contains("Ada", &policy));
            drop(worker_share);
            assert!(!set.contains("Ada", &policy));
        }

        #[test]
        fn test_concurrent_acquire_admits_one() {
            let set = InFlightSet::new();
            let admitted: usize = std::thread::scope(|scope| {
                let handles: Vec<_> = (0..8)
                    .map(|_| {
                        let set = set.clone();
                        scope.spawn(move || set.try_acquire("Ada", &SingleFlightPolicy::per_identity).map(std::mem::forget).is_some())
                    })
                    .collect();
                handles.into_iter().map(|handle| handle.join().unwrap() as usize).sum()
            });
            assert_eq!(admitted, 1);
        }
    }
}
