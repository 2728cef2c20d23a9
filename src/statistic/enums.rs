//! Statistic enumerations.

/// Kind of a statistic (untyped, block, entity, item).
pub mod statistic_kind;

/// Kind of a qualifier (block, entity, item).
pub mod qualifier_kind;
