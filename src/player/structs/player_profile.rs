use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq, Default)]
#[serde(default)]
pub struct PlayerProfile {
    pub whitelisted: bool,
    pub banned: bool,
    /// Unix timestamp (seconds) of the last join.
    pub last_played: Option<i64>,
}
