//! Aggregation engine.
//!
//! Computes the three kinds of answer a query can ask for:
//! - one player's value (`value_for`)
//! - the sum over every known player (`server_total`)
//! - the ranked top-N list over every known player (`top_n`)
//!
//! Population scans walk the directory in its own order, read one counter per
//! player and never materialize the values before summing. A player whose
//! lookup fails is skipped; the scan carries on. Single-player lookups
//! propagate their failure.
//!
//! # Ranking
//!
//! Only positive values are ranked. Entries are sorted by descending value
//! with a stable sort, so equal values keep the order in which the scan met
//! them, then truncated to the requested limit (itself capped by
//! `top_list_max_size`).
//!
//! # Scan context
//!
//! Every scan runs with a `ScanContext` carrying the population filter and an
//! optional deadline. Passing the deadline aborts the scan with
//! `AggregationTimeout`.

/// Aggregation data structures (engine, scan context, ranked result).
pub mod structs;

/// Implementation blocks for aggregation types.
pub mod impls;
