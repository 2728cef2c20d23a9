use serde::{Deserialize, Serialize};
use crate::config::structs::data_config::DataConfig;
use crate::config::structs::player_filter_config::PlayerFilterConfig;
use crate::config::structs::query_config::QueryConfig;
use crate::config::structs::share_config::ShareConfig;

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct Configuration {
    pub log_level: String,
    pub log_console_interval: u64,
    #[serde(default)]
    pub query: QueryConfig,
    #[serde(default)]
    pub share: ShareConfig,
    #[serde(default)]
    pub player_filter: PlayerFilterConfig,
    #[serde(default)]
    pub data: DataConfig,
}
