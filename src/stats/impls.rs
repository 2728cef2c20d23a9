//! Implementation blocks for statistics operations.

/// StatsAtomics: construction, updates and snapshots.
pub mod stats_atomics;

/// QueryDispatcher statistics accessors.
pub mod query_dispatcher;
