use std::collections::BTreeMap;
use serde::{Deserialize, Serialize};
use crate::player::structs::player_profile::PlayerProfile;

/// Counters are keyed `statistic` or `statistic:qualifier`, lowercase.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct PlayerRecord {
    pub name: String,
    #[serde(default)]
    pub profile: PlayerProfile,
    #[serde(default)]
    pub stats: BTreeMap<String, i32>,
}
