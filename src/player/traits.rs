//! Player directory capability traits.

/// Read access to known players and their raw counters.
pub mod player_directory;
