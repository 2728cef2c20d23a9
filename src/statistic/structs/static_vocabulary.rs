use ahash::AHashMap;
use crate::statistic::enums::qualifier_kind::QualifierKind;
use crate::statistic::structs::statistic_descriptor::StatisticDescriptor;

/// Vocabulary held in memory, keyed by lowercase name.
#[derive(Debug, Clone, Default)]
pub struct StaticVocabulary {
    pub(crate) statistics: AHashMap<String, StatisticDescriptor>,
    pub(crate) qualifiers: AHashMap<QualifierKind, AHashMap<String, String>>,
}
