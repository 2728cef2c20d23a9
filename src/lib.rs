//! # PlayerStats
//!
//! Concurrent statistic query engine for long-running multi-user game servers.
//!
//! ## Overview
//!
//! Answers three kinds of question about per-player counters tracked by the
//! host server:
//!
//! - how much of X did player P do
//! - what is the server-wide total of X
//! - who are the top N players for X
//!
//! Population-wide questions scan every known player, so queries run on a
//! bounded worker pool and never block the caller. Each identity may have one
//! query in flight at a time, and admission pauses while the configuration is
//! reloaded. Finished results can be published under short-lived share codes
//! that other users redeem later.
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use playerstats::query::structs::query_dispatcher::QueryDispatcher;
//! use playerstats::query::structs::raw_query::RawQuery;
//!
//! let dispatcher = QueryDispatcher::new(config, vocabulary, directory, output, permissions, clock).await;
//! let ticket = dispatcher.query(&RawQuery::top("Ada", "mine_block").with_qualifier("stone"))?;
//! ticket.wait().await;
//! let code = dispatcher.share_last_result("Ada")?;
//! ```
//!
//! ## Modules
//!
//! - [`statistic`] - Statistic and sub-statistic resolution
//! - [`player`] - Player directory capability, in-memory directory, population filter
//! - [`aggregation`] - Single-player lookups, server totals, top-N ranking
//! - [`query`] - Requests, admission, worker execution, share and reload flows
//! - [`share`] - Share cache with cooldowns, expiry and permission checks
//! - [`output`] - Rendering and delivery boundary
//! - [`stats`] - Engine counters
//! - [`config`] - TOML configuration
//! - [`common`] - Logging, errors, clock
//! - [`structs`] - Command-line interface

/// Aggregation engine.
///
/// Reads counters through the player directory and computes single-player
/// values, server totals and ranked top-N lists.
pub mod aggregation;

/// Common utilities: logging setup, `CustomError`, `Clock`.
pub mod common;

/// Configuration management.
///
/// Loads, validates and saves the TOML configuration that every request
/// captures a snapshot of.
pub mod config;

/// Output boundary: rendering and delivery of results.
pub mod output;

/// Player directory access and population filtering.
pub mod player;

/// Request dispatching.
///
/// Admission (reload gate, single-flight), worker execution with timeouts,
/// delivery, last-result sharing and the exclusion list.
pub mod query;

/// Share cache for published results.
pub mod share;

/// Statistic resolution against a vocabulary.
pub mod statistic;

/// Engine statistics counters.
pub mod stats;

/// CLI argument parsing.
pub mod structs;
