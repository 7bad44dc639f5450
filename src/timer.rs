//! Elapsed-time tracking for frame-driven state machines.

use embassy_time::{Duration, Instant};

/// Measures time since the last reset
///
/// The caller supplies `now` on every query, so the timer works with
/// synthetic time in tests and previews.
#[derive(Debug, Clone, Copy)]
pub struct PhaseTimer {
    started: Instant,
}

impl PhaseTimer {
    pub const fn new(now: Instant) -> Self {
        Self { started: now }
    }

    /// Restart the timer at `now`
    pub fn reset(&mut self, now: Instant) {
        self.started = now;
    }

    /// Time since the last reset, zero if `now` is before it
    pub fn elapsed(&self, now: Instant) -> Duration {
        Duration::from_millis(now.as_millis().saturating_sub(self.started.as_millis()))
    }

    /// Check whether at least `duration` passed since the last reset
    pub fn has_elapsed(&self, now: Instant, duration: Duration) -> bool {
        self.elapsed(now) >= duration
    }
}

impl Default for PhaseTimer {
    fn default() -> Self {
        Self::new(Instant::from_millis(0))
    }
}
