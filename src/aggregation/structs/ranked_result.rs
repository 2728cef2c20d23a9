use serde::{Deserialize, Serialize};
use crate::aggregation::structs::player_stat_sample::PlayerStatSample;

/// Strictly ordered by descending value; ties keep scan order.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq, Default)]
pub struct RankedResult {
    pub limit: usize,
    pub entries: Vec<PlayerStatSample>,
}
