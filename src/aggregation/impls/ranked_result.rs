use crate::aggregation::structs::player_stat_sample::PlayerStatSample;
use crate::aggregation::structs::ranked_result::RankedResult;

impl RankedResult {
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &PlayerStatSample> {
        self.entries.iter()
    }

    pub fn to_pairs(&self) -> Vec<(String, i32)> {
        self.entries.iter().map(|sample| (sample.player.clone(), sample.value)).collect()
    }
}
