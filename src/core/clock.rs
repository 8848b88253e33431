//! Wall-clock seam for round timing.
//!
//! `startTime` and the elapsed round time come from an injected clock so
//! tests can pin timestamps instead of sleeping. Production callers use
//! [`SystemClock`].

/// Source of millisecond-epoch timestamps.
pub trait Clock {
    /// Current time as milliseconds since the Unix epoch.
    fn now_ms(&self) -> u64;
}

/// System wall clock.
#[derive(Clone, Copy, Debug, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now_ms(&self) -> u64 {
        use std::time::{SystemTime, UNIX_EPOCH};

        SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|d| d.as_millis() as u64)
            .unwrap_or(0)
    }
}

/// Fixed clock for tests: returns whatever it was last set to.
#[derive(Clone, Debug, Default)]
pub struct FixedClock {
    now: std::cell::Cell<u64>,
}

impl FixedClock {
    /// Create a clock pinned at the given timestamp.
    #[must_use]
    pub fn at(now_ms: u64) -> Self {
        Self {
            now: std::cell::Cell::new(now_ms),
        }
    }

    /// Move the clock forward.
    pub fn advance(&self, delta_ms: u64) {
        self.now.set(self.now.get() + delta_ms);
    }
}

impl Clock for FixedClock {
    fn now_ms(&self) -> u64 {
        self.now.get()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_system_clock_monotonic_enough() {
        let clock = SystemClock;
        let a = clock.now_ms();
        let b = clock.now_ms();
        assert!(b >= a);
        assert!(a > 0);
    }

    #[test]
    fn test_fixed_clock() {
        let clock = FixedClock::at(1_000);
        assert_eq!(clock.now_ms(), 1_000);

        clock.advance(500);
        assert_eq!(clock.now_ms(), 1_500);
    }
}
