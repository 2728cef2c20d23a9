use serde::{Deserialize, Serialize};
use crate::statistic::enums::statistic_kind::StatisticKind;

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq, Hash)]
pub struct StatisticDescriptor {
    pub name: String,
    pub kind: StatisticKind,
}
