use serde::{Deserialize, Serialize};
use crate::config::enums::single_flight_policy::SingleFlightPolicy;

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(default)]
pub struct QueryConfig {
    pub top_list_max_size: usize,
    pub scan_timeout_ms: u64,
    pub max_workers: usize,
    pub single_flight: SingleFlightPolicy,
}

impl Default for QueryConfig {
    fn default() -> Self {
        Self {
            top_list_max_size: 10,
            scan_timeout_ms: 30_000,
            max_workers: 4,
            single_flight: SingleFlightPolicy::per_identity,
        }
    }
}
