#[cfg(test)]
mod share_tests {
    use std::sync::Arc;
    use crate::common::structs::clock::Clock;
    use crate::config::structs::share_config::ShareConfig;
    use crate::output::structs::rendered_result::RenderedResult;
    use crate::share::structs::share_cache::ShareCache;

    fn cache(settings: ShareConfig) -> (ShareCache, Arc<Clock>) {
        let clock = Arc::new(Clock::default());
        let permissions = Arc::new(|identity: &str, permission: &str| identity != "Guest" && permission == "playerstats.share");
        (ShareCache::new(settings, clock.clone(), permissions), clock)
    }

    fn payload(body: &str) -> RenderedResult {
        RenderedResult::new(body)
    }

    mod cooldown_tests {
        use std::time::Duration;
        use crate::config::structs::share_config::ShareConfig;
        use crate::share::enums::share_error::ShareError;

        #[test]
        fn test_second_share_within_cooldown_is_rejected() {
            let (cache, clock) = super::cache(ShareConfig::default());
            cache.share("Ada", super::payload("first")).unwrap();
            clock.advance(Duration::from_secs(10));
            match cache.share("Ada", super::payload("second")) {
                Err(ShareError::CooldownActive { remaining }) => {
                    assert!(remaining <= Duration::from_secs(50));
                    assert!(remaining > Duration::from_secs(49));
                }
                other => panic!("expected cooldown, got {other:?}"),
            }
            clock.advance(Duration::from_secs(51));
            assert!(cache.share("Ada", super::payload("third")).is_ok());
        }

        #[test]
        fn test_cooldown_is_per_submitter() {
            let (cache, _clock) = super::cache(ShareConfig::default());
            cache.share("Ada", super::payload("a")).unwrap();
            assert!(cache.share("Grace", super::payload("g")).is_ok());
            assert!(cache.cooldown_remaining("Ada").is_some());
            assert!(cache.cooldown_remaining("Linus").is_none());
        }

        #[test]
        fn test_zero_cooldown_disables_it() {
            let (cache, _clock) = super::cache(ShareConfig { cooldown: 0, ..ShareConfig::default() });
            cache.share("Ada", super::payload("a")).unwrap();
            assert!(cache.share("Ada", super::payload("b")).is_ok());
        }

        #[test]
        fn test_cooldown_message_rounds_up() {
            let error = ShareError::CooldownActive { remaining: Duration::from_millis(1500) };
            assert_eq!(error.to_string(), "You can share again in 2 seconds");
        }
    }

    mod redeem_tests {
        use std::time::Duration;
        use crate::config::structs::share_config::ShareConfig;
        use crate::share::enums::share_error::ShareError;

        #[test]
        fn test_redeem_returns_payload_repeatedly() {
            let (cache, _clock) = super::cache(ShareConfig::default());
            let code = cache.share("Ada", super::payload("Ada: 42")).unwrap();
            assert_eq!(code.len(), 12);
            assert_eq!(cache.redeem(&code, "Grace").unwrap().body(), "Ada: 42");
            assert_eq!(cache.redeem(&format!(" {} ", code.to_uppercase()), "Linus").unwrap().body(), "Ada: 42");
        }

        #[test]
        fn test_unknown_code() {
            let (cache, _clock) = super::cache(ShareConfig::default());
            assert_eq!(cache.redeem("nope", "Grace"), Err(ShareError::NotFound));
        }

        #[test]
        fn test_expired_code_is_evicted() {
            let (cache, clock) = super::cache(ShareConfig::default());
            let code = cache.share("Ada", super::payload("x")).unwrap();
            clock.advance(Duration::from_secs(1801));
            assert_eq!(cache.redeem(&code, "Grace"), Err(ShareError::Expired));
            assert_eq!(cache.redeem(&code, "Grace"), Err(ShareError::NotFound));
            assert!(cache.is_empty());
        }

        #[test]
        fn test_permission_is_checked_last() {
            let (cache, clock) = super::cache(ShareConfig::default());
            let code = cache.share("Ada", super::payload("x")).unwrap();
            assert_eq!(cache.redeem(&code, "Guest"), Err(ShareError::Forbidden));
            assert_eq!(cache.redeem("missing", "Guest"), Err(ShareError::NotFound));
            clock.advance(Duration::from_secs(1801));
            assert_eq!(cache.redeem(&code, "Guest"), Err(ShareError::Expired));
        }

        #[test]
        fn test_disabled_cache() {
            let (cache, _clock) = super::cache(ShareConfig { enabled: false, ..ShareConfig::default() });
            assert_eq!(cache.share("Ada", super::payload("x")), Err(ShareError::Disabled));
            assert_eq!(cache.redeem("abc", "Ada"), Err(ShareError::Disabled));
        }
    }

    mod eviction_tests {
        use std::time::Duration;
        use crate::config::structs::share_config::ShareConfig;
        use crate::share::enums::share_error::ShareError;

        #[test]
        fn test_oldest_entry_is_evicted_first() {
            let (cache, clock) = super::cache(ShareConfig { cooldown: 0, max_entries: 2, ..ShareConfig::default() });
            let first = cache.share("Ada", super::payload("1")).unwrap();
            clock.advance(Duration::from_secs(1));
            let second = cache.share("Ada", super::payload("2")).unwrap();
            clock.advance(Duration::from_secs(1));
            let third = cache.share("Ada", super::payload("3")).unwrap();
            assert_eq!(cache.len(), 2);
            assert_eq!(cache.redeem(&first, "Grace"), Err(ShareError::NotFound));
            assert!(cache.redeem(&second, "Grace").is_ok());
            assert!(cache.redeem(&third, "Grace").is_ok());
        }

        #[test]
        fn test_clean_expired_sweeps_entries_and_cooldowns() {
            let (cache, clock) = super::cache(ShareConfig::default());
            cache.share("Ada", super::payload("old")).unwrap();
            clock.advance(Duration::from_secs(1000));
            let fresh = cache.share("Grace", super::payload("fresh")).unwrap();
            clock.advance(Duration::from_secs(900));
            assert_eq!(cache.clean_expired(), 1);
            assert_eq!(cache.len(), 1);
            assert!(cache.get(&fresh).is_some());
            assert!(cache.cooldown_remaining("Ada").is_none());
            assert!(cache.share("Ada", super::payload("again")).is_ok());
        }

        #[test]
        fn test_codes_are_unique() {
            let (cache, _clock) = super::cache(ShareConfig { cooldown: 0, code_length: 6, ..ShareConfig::default() });
            let mut codes = std::collections::HashSet::new();
            for index in 0..200 {
                let code = cache.share("Ada", super::payload(&index.to_string())).unwrap();
                assert_eq!(code.len(), 6);
                assert!(codes.insert(code));
            }
            assert_eq!(cache.len(), 200);
        }
    }

    mod concurrency_tests {
        use std::sync::Arc;
        use crate::config::structs::share_config::ShareConfig;

        #[test]
        fn test_concurrent_shares_from_one_submitter() {
            let (cache, _clock) = super::cache(ShareConfig::default());
            let cache = Arc::new(cache);
            let created: usize = std::thread::scope(|scope| {
                let handles: Vec<_> = (0..8)
                    .map(|index| {
                        let cache = cache.clone();
                        scope.spawn(move || cache.share("Ada", super::payload(&index.to_string())).is_ok() as usize)
                    })
                    .collect();
                handles.into_iter().map(|handle| handle.join().unwrap()).sum()
            });
            assert_eq!(created, 1);
            assert_eq!(cache.len(), 1);
        }
    }
}
