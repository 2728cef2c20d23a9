//! Statistic capability traits.

/// Lookup capability over the known statistic and qualifier names.
pub mod statistic_vocabulary;
