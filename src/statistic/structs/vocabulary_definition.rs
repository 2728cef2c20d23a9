use std::collections::BTreeMap;
use serde::{Deserialize, Serialize};
use crate::statistic::enums::statistic_kind::StatisticKind;

/// On-disk layout of a vocabulary file.
///
/// ```json
/// {
///   "statistics": { "jump": "untyped", "mine_block": "block" },
///   "blocks": ["stone", "dirt"],
///   "entities": ["zombie"],
///   "items": ["stone", "diamond_sword"]
/// }
/// ```
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq)]
#[serde(default)]
pub struct VocabularyDefinition {
    pub statistics: BTreeMap<String, StatisticKind>,
    pub blocks: Vec<String>,
    pub entities: Vec<String>,
    pub items: Vec<String>,
}
