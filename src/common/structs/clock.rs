use std::sync::atomic::AtomicI64;
use std::time::Instant;

/// Monotonic millisecond clock.
///
/// Readings start at zero when the clock is created and never go backwards.
/// The offset lets a caller move time forward, which is how tests exercise
/// cooldowns and expiry without sleeping.
#[derive(Debug)]
pub struct Clock {
    pub(crate) boot: Instant,
    pub(crate) offset_ms: AtomicI64,
}
