//! Implementation blocks for aggregation types.

/// AggregationEngine: lookups, totals and ranking.
pub mod aggregation_engine;

/// ScanContext: deadline and admission checks.
pub mod scan_context;

/// RankedResult accessors.
pub mod ranked_result;
