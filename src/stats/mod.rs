//! Engine statistics.
//!
//! Atomic counters for everything the dispatcher and the share cache do,
//! read as a serializable `Stats` snapshot for the periodic console line.
//!
//! # Counters
//!
//! - Queries: submitted, admitted, completed, failed, timed out, in flight
//! - Rejections: reload in progress, already running, invalid request
//! - Shares: created, rejected, redeemed, expired
//! - Reloads applied
//!
//! All counters are atomics, so workers update them without locking.
//!
//! # Example
//!
//! ```rust,ignore
//! use playerstats::stats::enums::stats_event::StatsEvent;
//!
//! dispatcher.update_stats(StatsEvent::QueriesSubmitted, 1);
//! let stats = dispatcher.get_stats();
//! ```

/// Statistics event enumeration.
pub mod enums;

/// Statistics data structures (atomic counters and snapshot).
pub mod structs;

/// Implementation blocks for statistics operations.
pub mod impls;

/// Unit tests for statistics functionality.
pub mod tests;
