//! Configuration data structures.
//!
//! Each struct corresponds to a section in the TOML configuration file.

/// Root configuration structure containing all settings.
pub mod configuration;

/// Query execution settings (top list cap, timeout, workers, policy).
pub mod query_config;

/// Share cache settings (cooldown, TTL, bounds, permission).
pub mod share_config;

/// Population filter settings (whitelist, banned, last played).
pub mod player_filter_config;

/// Data file locations used by the binary.
pub mod data_config;
