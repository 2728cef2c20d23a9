use std::fmt;
use std::fmt::Formatter;
use crate::query::enums::query_state::QueryState;
use crate::query::enums::target_mode::TargetMode;

impl fmt::Display for TargetMode {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            TargetMode::Individual => write!(f, "individual"),
            TargetMode::ServerTotal => write!(f, "server total"),
            TargetMode::TopN => write!(f, "top"),
        }
    }
}

impl QueryState {
    pub fn is_finished(&self) -> bool {
        matches!(self, QueryState::Completed | QueryState::Failed)
    }
}
