//! Common utilities and shared functionality.
//!
//! This module contains helper functions and data structures used across
//! all other modules of the engine.
//!
//! # Utilities
//!
//! - Logging setup (fern + chrono timestamps)
//! - Log level parsing
//!
//! # Data Structures
//!
//! - `CustomError` - Custom error type for the binary and reload flow
//! - `Clock` - Monotonic millisecond clock with an adjustable offset
//!
//! # Example
//!
//! ```rust,ignore
//! use playerstats::common::common::setup_logging;
//! use playerstats::common::structs::clock::Clock;
//!
//! setup_logging(&config)?;
//!
//! let clock = Clock::default();
//! let now = clock.now_ms();
//! ```

/// Common data structures (errors, clock).
pub mod structs;

/// Core utility functions.
#[allow(clippy::module_inception)]
pub mod common;

/// Implementation blocks for common types.
pub mod impls;
