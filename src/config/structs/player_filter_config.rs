use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Default)]
#[serde(default)]
pub struct PlayerFilterConfig {
    pub whitelist_only: bool,
    pub exclude_banned: bool,
    pub last_played_days: u64,
}
