//! Implementation blocks for player directory types.

/// MemoryDirectory: construction, loading, updates and the directory trait.
pub mod memory_directory;

/// PlayerFilter: admission rules for population scans.
pub mod player_filter;

/// PlayerRecord: counter keys and lookups.
pub mod player_record;
