use std::time::{Duration, Instant};
use crate::player::structs::player_filter::PlayerFilter;

#[derive(Debug, Clone, Default)]
pub struct ScanContext {
    pub(crate) deadline: Option<(Instant, Duration)>,
    pub(crate) filter: PlayerFilter,
}
