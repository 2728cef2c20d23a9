//! Statistic data structures.

/// Resolved statistic (canonical name and kind).
pub mod statistic_descriptor;

/// Resolved qualifier (canonical name and kind).
pub mod qualifier;

/// Resolver turning raw names into descriptors.
pub mod statistic_resolver;

/// In-memory vocabulary, loadable from JSON.
pub mod static_vocabulary;

/// Serialized form of a vocabulary file.
pub mod vocabulary_definition;
