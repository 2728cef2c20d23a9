use std::sync::Arc;
use crate::query::enums::query_error::QueryError;
use crate::statistic::enums::qualifier_kind::QualifierKind;
use crate::statistic::structs::qualifier::Qualifier;
use crate::statistic::structs::statistic_descriptor::StatisticDescriptor;
use crate::statistic::structs::statistic_resolver::StatisticResolver;
use crate::statistic::traits::statistic_vocabulary::StatisticVocabulary;

impl StatisticResolver {
    pub fn new(vocabulary: Arc<dyn StatisticVocabulary>) -> StatisticResolver {
        StatisticResolver { vocabulary }
    }

    pub fn vocabulary(&self) -> Arc<dyn StatisticVocabulary> {
        self.vocabulary.clone()
    }

    pub fn resolve(&self, name: &str) -> Result<StatisticDescriptor, QueryError> {
        self.vocabulary
            .find_statistic(name.trim())
            .ok_or_else(|| QueryError::UnknownStatistic(name.to_string()))
    }

    /// Resolves the sub-statistic for `descriptor`.
    ///
    /// Untyped statistics never carry a qualifier, so `raw` is ignored for
    /// them and `None` is returned. Typed statistics need a qualifier of the
    /// matching kind. A name that only exists under another kind is a
    /// mismatch rather than an unknown name.
    pub fn resolve_qualifier(&self, descriptor: &StatisticDescriptor, raw: Option<&str>) -> Result<Option<Qualifier>, QueryError> {
        let required = match descriptor.kind.qualifier_kind() {
            None => return Ok(None),
            Some(kind) => kind,
        };

        let raw = match raw.map(str::trim).filter(|value| !value.is_empty()) {
            None => {
                return Err(QueryError::QualifierRequired {
                    statistic: descriptor.name.clone(),
                    kind: required,
                });
            }
            Some(value) => value,
        };

        if let Some(name) = self.vocabulary.find_qualifier(required, raw) {
            return Ok(Some(Qualifier { name, kind: required }));
        }

        let other_kind = QualifierKind::ALL
            .iter()
            .any(|kind| *kind != required && self.vocabulary.is_qualifier(*kind, raw));
        if other_kind {
            Err(QueryError::QualifierMismatch {
                statistic: descriptor.name.clone(),
                qualifier: raw.to_string(),
                expected: required,
            })
        } else {
            Err(QueryError::UnknownQualifier {
                statistic: descriptor.name.clone(),
                qualifier: raw.to_string(),
            })
        }
    }
}
