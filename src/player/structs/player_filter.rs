use std::sync::Arc;
use ahash::AHashSet;
use crate::config::structs::player_filter_config::PlayerFilterConfig;

#[derive(Debug, Clone, Default)]
pub struct PlayerFilter {
    pub(crate) config: PlayerFilterConfig,
    /// Lowercase identities removed from population scans.
    pub(crate) excluded: Arc<AHashSet<String>>,
    /// Unix timestamp (seconds) the last-played window is measured from.
    pub(crate) now: i64,
}
