//! Player directory access.
//!
//! The host server owns the list of everyone who has ever played and their
//! raw statistic counters. This module defines that capability
//! (`PlayerDirectory`), an in-memory implementation used by the binary and
//! the tests, and the `PlayerFilter` that decides which known players take
//! part in population-wide scans.
//!
//! # Population filter
//!
//! A scan skips a player when:
//! - the player is on the runtime exclusion list
//! - `whitelist_only` is set and the player is not whitelisted
//! - `exclude_banned` is set and the player is banned
//! - `last_played_days` is set and the player has not joined within that many days
//!
//! Players for whom the directory has no profile are only subject to the
//! exclusion list.

/// Directory error enumeration.
pub mod enums;

/// Directory data structures (profiles, in-memory directory, filter).
pub mod structs;

/// Directory capability trait.
pub mod traits;

/// Implementation blocks for directory types.
pub mod impls;
