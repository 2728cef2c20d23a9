//! Common data structures.

/// Simple message-carrying error.
pub mod custom_error;

/// Monotonic clock used for cooldowns and share expiry.
pub mod clock;
