use crate::statistic::enums::qualifier_kind::QualifierKind;
use crate::statistic::structs::statistic_descriptor::StatisticDescriptor;

/// The game's statistic vocabulary. All lookups are case-insensitive.
pub trait StatisticVocabulary: Send + Sync {
    fn statistic_names(&self) -> Vec<String>;

    fn qualifier_names(&self, kind: QualifierKind) -> Vec<String>;

    fn find_statistic(&self, name: &str) -> Option<StatisticDescriptor>;

    /// Canonical spelling of `name` among qualifiers of `kind`.
    fn find_qualifier(&self, kind: QualifierKind, name: &str) -> Option<String>;

    fn is_statistic(&self, name: &str) -> bool {
        self.find_statistic(name).is_some()
    }

    fn is_qualifier(&self, kind: QualifierKind, name: &str) -> bool {
        self.find_qualifier(kind, name).is_some()
    }
}
