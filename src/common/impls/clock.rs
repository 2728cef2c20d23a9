use std::sync::atomic::{AtomicI64, Ordering};
use std::time::{Duration, Instant};
use crate::common::structs::clock::Clock;

impl Default for Clock {
    fn default() -> Self {
        Self {
            boot: Instant::now(),
            offset_ms: AtomicI64::new(0),
        }
    }
}

impl Clock {
    pub fn now_ms(&self) -> i64 {
        let elapsed = self.boot.elapsed().as_millis() as i64;
        elapsed + self.offset_ms.load(Ordering::Relaxed)
    }

    pub fn advance(&self, by: Duration) {
        self.offset_ms.fetch_add(by.as_millis() as i64, Ordering::Relaxed);
    }

    pub fn offset_ms(&self) -> i64 {
        self.offset_ms.load(Ordering::Relaxed)
    }
}
