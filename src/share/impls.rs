//! Implementation blocks for share types.

/// ShareCache: share, redeem, sweep and settings.
pub mod share_cache;
