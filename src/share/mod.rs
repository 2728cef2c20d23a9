//! Share cache.
//!
//! Stores rendered results under short generated codes so other users can
//! view them later.
//!
//! - `share` enforces a per-submitter cooldown, then stores a new entry under
//!   a fresh code. Codes never collide with a stored code.
//! - `redeem` returns the payload until the entry is older than `ttl`; an
//!   expired entry is evicted on access. Redeeming needs the configured
//!   permission. Codes can be redeemed any number of times.
//! - The cache holds at most `max_entries`; the oldest entry goes first.
//! - `clean_expired` is the periodic sweep, which also forgets cooldowns
//!   that have run out.
//!
//! All outcomes are typed `ShareError`s.

/// Share outcome errors.
pub mod enums;

/// Cache, entries and state.
pub mod structs;

/// Permission capability.
pub mod traits;

/// Implementation blocks for share types.
pub mod impls;

/// Unit tests for the share cache.
pub mod tests;
