//! Request dispatching.
//!
//! `QueryDispatcher` owns the concurrency discipline of the engine:
//!
//! 1. While the configuration is being reloaded, every submission is
//!    rejected with `ReloadInProgress`. Nothing is queued across a reload.
//! 2. An identity with a query already running is rejected with
//!    `RequestAlreadyRunning`. Under the `global` policy a single query runs
//!    at a time for everyone.
//! 3. Otherwise the identity is marked in flight (test-and-insert in one
//!    step) and the request runs on a worker: a tokio task that waits for one
//!    of `max_workers` permits and scans on the blocking pool under
//!    `scan_timeout_ms`.
//! 4. The worker renders the outcome through the `OutputBoundary` and
//!    delivers it, a failure always to the requester. The in-flight mark is
//!    released on every exit path by an `InFlightGuard`.
//!
//! Resolution errors are reported to the caller before admission and never
//! take a worker. A worker uses the configuration snapshot captured when it
//! was admitted, even if a reload swaps it mid-scan.
//!
//! The dispatcher also remembers each identity's last rendered result, so it
//! can be published through the share cache, and holds the runtime
//! exclusion list applied to population scans.
//!
//! # Example
//!
//! ```rust,ignore
//! use playerstats::query::structs::raw_query::RawQuery;
//!
//! let ticket = dispatcher.query(&RawQuery::top("Ada", "mine_block").with_qualifier("stone"))?;
//! ticket.wait().await;
//! let code = dispatcher.share_last_result("Ada")?;
//! ```

/// Error taxonomy, target modes, states, results and destinations.
pub mod enums;

/// Raw queries, requests, in-flight tracking and the dispatcher.
pub mod structs;

/// Implementation blocks for query types.
pub mod impls;

/// Unit tests for request resolution and in-flight tracking.
pub mod tests;
