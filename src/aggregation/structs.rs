//! Aggregation data structures.

/// Reads counters from a player directory and aggregates them.
pub mod aggregation_engine;

/// Deadline and population filter of one scan.
pub mod scan_context;

/// One (player, value) pair met during a scan.
pub mod player_stat_sample;

/// Ordered top-N outcome.
pub mod ranked_result;
