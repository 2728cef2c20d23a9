//! Implementation blocks for statistic types.

/// StatisticKind and QualifierKind helpers and Display.
pub mod statistic_kind;

/// StatisticResolver: statistic and qualifier resolution.
pub mod statistic_resolver;

/// StaticVocabulary: construction, loading and the vocabulary trait.
pub mod static_vocabulary;
