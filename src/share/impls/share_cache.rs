use std::sync::Arc;
use std::time::Duration;
use log::debug;
use parking_lot::{Mutex, RwLock};
use uuid::Uuid;
use crate::common::structs::clock::Clock;
use crate::config::structs::share_config::ShareConfig;
use crate::output::structs::rendered_result::RenderedResult;
use crate::share::enums::share_error::ShareError;
use crate::share::structs::share_cache::ShareCache;
use crate::share::structs::share_entry::ShareEntry;
use crate::share::structs::share_state::ShareState;
use crate::share::traits::permission_check::PermissionCheck;

impl ShareCache {
    pub fn new(settings: ShareConfig, clock: Arc<Clock>, permissions: Arc<dyn PermissionCheck>) -> ShareCache {
        ShareCache {
            settings: RwLock::new(settings),
            clock,
            state: Mutex::new(ShareState::default()),
            permissions,
        }
    }

    pub fn is_enabled(&self) -> bool {
        self.settings.read().enabled
    }

    pub fn settings(&self) -> ShareConfig {
        self.settings.read().clone()
    }

    /// Applies to the next share, redeem or sweep; stored entries are kept.
    pub fn update_settings(&self, settings: ShareConfig) {
        *self.settings.write() = settings;
    }

    /// Stores `payload` under a new code unless `submitter` is cooling down.
    pub fn share(&self, submitter: &str, payload: RenderedResult) -> Result<String, ShareError> {
        let settings = self.settings();
        if !settings.enabled {
            return Err(ShareError::Disabled);
        }
        let now = self.clock.now_ms();
        let cooldown_ms = Self::seconds_to_ms(settings.cooldown);

        let mut state = self.state.lock();
        if cooldown_ms > 0 {
            if let Some(last) = state.cooldowns.get(submitter) {
                let elapsed = now - last;
                if elapsed < cooldown_ms {
                    return Err(ShareError::CooldownActive {
                        remaining: Duration::from_millis((cooldown_ms - elapsed) as u64),
                    });
                }
            }
        }

        Self::evict_expired(&mut state, now, Self::seconds_to_ms(settings.ttl));
        while state.entries.len() >= settings.max_entries.max(1) {
            if !Self::evict_oldest(&mut state) {
                break;
            }
        }

        let code = loop {
            let candidate = Self::generate_code(settings.code_length);
            if !state.entries.contains_key(&candidate) {
                break candidate;
            }
        };

        let insert_id = state.next_insert_id;
        state.next_insert_id += 1;
        state.entries.insert(code.clone(), ShareEntry {
            code: code.clone(),
            payload,
            submitter: submitter.to_string(),
            created_at_ms: now,
            insert_id,
        });
        state.order.push_back((code.clone(), insert_id));
        state.cooldowns.insert(submitter.to_string(), now);
        Ok(code)
    }

    /// Returns the payload stored under `code`.
    ///
    /// Checks run in order: unknown code, expiry (the entry is evicted),
    /// then the requester's permission.
    pub fn redeem(&self, code: &str, requester: &str) -> Result<RenderedResult, ShareError> {
        let settings = self.settings();
        if !settings.enabled {
            return Err(ShareError::Disabled);
        }
        let key = code.trim().to_lowercase();
        let now = self.clock.now_ms();

        let payload = {
            let mut state = self.state.lock();
            let entry = state.entries.get(&key).ok_or(ShareError::NotFound)?;
            if now - entry.created_at_ms > Self::seconds_to_ms(settings.ttl) {
                state.entries.remove(&key);
                debug!("[SHARE] Code {} expired on access", key);
                return Err(ShareError::Expired);
            }
            entry.payload.clone()
        };

        if !self.permissions.has_permission(requester, &settings.permission) {
            return Err(ShareError::Forbidden);
        }
        Ok(payload)
    }

    /// Evicts expired entries and cooldowns that have run out. Returns the
    /// number of entries removed.
    pub fn clean_expired(&self) -> usize {
        let settings = self.settings();
        let now = self.clock.now_ms();
        let ttl_ms = Self::seconds_to_ms(settings.ttl);
        let cooldown_ms = Self::seconds_to_ms(settings.cooldown);

        let mut state = self.state.lock();
        let before = state.entries.len();
        state.entries.retain(|_, entry| now - entry.created_at_ms <= ttl_ms);
        while state.entries.len() > settings.max_entries {
            if !Self::evict_oldest(&mut state) {
                break;
            }
        }
        let ShareState { entries, order, .. } = &mut *state;
        order.retain(|(code, id)| entries.get(code).is_some_and(|entry| entry.insert_id == *id));
        state.cooldowns.retain(|_, last| now - *last < cooldown_ms);
        before - state.entries.len()
    }

    pub fn get(&self, code: &str) -> Option<ShareEntry> {
        self.state.lock().entries.get(&code.trim().to_lowercase()).cloned()
    }

    /// Time left before `submitter` may share again.
    pub fn cooldown_remaining(&self, submitter: &str) -> Option<Duration> {
        let cooldown_ms = Self::seconds_to_ms(self.settings.read().cooldown);
        let now = self.clock.now_ms();
        let state = self.state.lock();
        let last = state.cooldowns.get(submitter)?;
        let remaining = cooldown_ms - (now - last);
        (remaining > 0).then(|| Duration::from_millis(remaining as u64))
    }

    pub fn len(&self) -> usize {
        self.state.lock().entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    fn generate_code(length: usize) -> String {
        let mut code = Uuid::new_v4().simple().to_string();
        code.truncate(length);
        code
    }

    fn seconds_to_ms(seconds: u64) -> i64 {
        seconds.saturating_mul(1000).min(i64::MAX as u64) as i64
    }

    /// Drops entries from the front of the insertion order while they are expired.
    fn evict_expired(state: &mut ShareState, now: i64, ttl_ms: i64) {
        while let Some((code, id)) = state.order.front().cloned() {
            let live = state.entries.get(&code).filter(|entry| entry.insert_id == id);
            if let Some(entry) = live {
                if now - entry.created_at_ms <= ttl_ms {
                    break;
                }
                state.entries.remove(&code);
            }
            state.order.pop_front();
        }
    }

    /// Removes the oldest live entry. Returns false when nothing is left.
    fn evict_oldest(state: &mut ShareState) -> bool {
        while let Some((code, id)) = state.order.pop_front() {
            let live = state.entries.get(&code).is_some_and(|entry| entry.insert_id == id);
            if live {
                state.entries.remove(&code);
                debug!("[SHARE] Evicted {} to stay within max_entries", code);
                return true;
            }
        }
        false
    }
}
