use std::sync::Arc;
use ahash::AHashSet;
use crate::config::structs::player_filter_config::PlayerFilterConfig;
use crate::player::structs::player_filter::PlayerFilter;
use crate::player::structs::player_profile::PlayerProfile;

const SECONDS_PER_DAY: i64 = 86_400;

impl PlayerFilter {
    pub fn new(config: PlayerFilterConfig, excluded: Arc<AHashSet<String>>, now: i64) -> PlayerFilter {
        PlayerFilter { config, excluded, now }
    }

    /// A filter that admits everyone.
    pub fn open() -> PlayerFilter {
        PlayerFilter::default()
    }

    pub fn is_excluded(&self, identity: &str) -> bool {
        !self.excluded.is_empty() && self.excluded.contains(&identity.to_lowercase())
    }

    /// Whether profile data is needed to decide on a player.
    pub fn needs_profile(&self) -> bool {
        self.config.whitelist_only || self.config.exclude_banned || self.config.last_played_days > 0
    }

    pub fn admits(&self, identity: &str, profile: Option<&PlayerProfile>) -> bool {
        if self.is_excluded(identity) {
            return false;
        }
        let profile = match profile {
            None => return true,
            Some(profile) => profile,
        };
        if self.config.whitelist_only && !profile.whitelisted {
            return false;
        }
        if self.config.exclude_banned && profile.banned {
            return false;
        }
        if self.config.last_played_days > 0 {
            // A player who never joined counts as last seen at time 0.
            let last_played = profile.last_played.unwrap_or(0);
            let window = (self.config.last_played_days as i64).saturating_mul(SECONDS_PER_DAY);
            if self.now.saturating_sub(last_played) > window {
                return false;
            }
        }
        true
    }
}
