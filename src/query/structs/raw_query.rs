use serde::{Deserialize, Serialize};
use crate::query::enums::target_mode::TargetMode;

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct RawQuery {
    pub requester: String,
    pub mode: TargetMode,
    pub statistic: String,
    pub qualifier: Option<String>,
    pub player: Option<String>,
    pub limit: Option<usize>,
    pub broadcast: bool,
}
