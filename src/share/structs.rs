//! Share data structures.

/// Thread-safe cache of shared results.
pub mod share_cache;

/// One stored result.
pub mod share_entry;

/// Entries, insertion order and cooldowns behind one lock.
pub mod share_state;
