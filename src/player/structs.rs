//! Player directory data structures.

/// Whitelist/ban/last-played information about a player.
pub mod player_profile;

/// One player with its profile and raw counters.
pub mod player_record;

/// In-memory player directory, preserving registration order.
pub mod memory_directory;

/// Serialized form of a directory file.
pub mod directory_definition;

/// Population filter applied during scans.
pub mod player_filter;
