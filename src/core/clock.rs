//! Injectable wall-clock time.
//!
//! The counter-kill cooldown is evaluated lazily from a clock read at call
//! time; there is no live countdown. The engine never reads the system
//! clock directly — the session controller holds a [`Clock`] and passes
//! millisecond timestamps into the pure engine functions, so tests can pin
//! time exactly with [`FixedClock`].

use std::cell::Cell;
use std::time::{SystemTime, UNIX_EPOCH};

/// Source of the current wall-clock time in milliseconds since the Unix
/// epoch.
pub trait Clock {
    /// Current time in milliseconds.
    fn now_ms(&self) -> u64;
}

/// Real system clock.
#[derive(Clone, Copy, Debug, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now_ms(&self) -> u64 {
        SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|d| d.as_millis() as u64)
            .unwrap_or(0)
    }
}

/// Manually controlled clock for tests.
#[derive(Clone, Debug, Default)]
pub struct FixedClock {
    now: Cell<u64>,
}

impl FixedClock {
    /// Create a clock pinned at the given time.
    #[must_use]
    pub fn at(now_ms: u64) -> Self {
        Self {
            now: Cell::new(now_ms),
        }
    }

    /// Move the clock to an absolute time.
    pub fn set(&self, now_ms: u64) {
        self.now.set(now_ms);
    }

    /// Advance the clock by a delta.
    pub fn advance(&self, delta_ms: u64) {
        self.now.set(self.now.get() + delta_ms);
    }
}

impl Clock for FixedClock {
    fn now_ms(&self) -> u64 {
        self.now.get()
    }
}
