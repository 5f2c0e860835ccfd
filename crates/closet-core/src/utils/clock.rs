//! Wall-clock time source with a strictly increasing guarantee.

use std::sync::atomic::{AtomicI64, Ordering};

use crate::ports::Clock;

/// Epoch-millisecond clock that never repeats or goes backwards.
///
/// Two captures in the same millisecond, or a wall clock stepped back by
/// NTP, still produce distinct increasing timestamps.
#[derive(Debug, Default)]
pub struct SystemClock {
    last: AtomicI64,
}

impl SystemClock {
    pub const fn new() -> Self {
        Self {
            last: AtomicI64::new(0),
        }
    }

    fn next_after(&self, wall: i64) -> i64 {
        let mut prev = self.last.load(Ordering::Relaxed);
        loop {
            let next = wall.max(prev + 1);
            match self
                .last
                .compare_exchange_weak(prev, next, Ordering::AcqRel, Ordering::Relaxed)
            {
                Ok(_) => return next,
                Err(actual) => prev = actual,
            }
        }
    }
}

impl Clock for SystemClock {
    fn now_millis(&self) -> i64 {
        self.next_after(chrono::Utc::now().timestamp_millis())
    }
}
