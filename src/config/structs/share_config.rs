use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(default)]
pub struct ShareConfig {
    pub enabled: bool,
    pub cooldown: u64,
    pub ttl: u64,
    pub max_entries: usize,
    pub cleanup_interval: u64,
    pub code_length: usize,
    pub permission: String,
    pub broadcast_on_redeem: bool,
}

impl Default for ShareConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            cooldown: 60,
            ttl: 1800,
            max_entries: 500,
            cleanup_interval: 300,
            code_length: 12,
            permission: "playerstats.share".to_string(),
            broadcast_on_redeem: true,
        }
    }
}
