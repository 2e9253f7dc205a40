//! Wall-clock source for the turntable.

use web_time::{Duration, Instant};

/// Monotonic elapsed-time source for time-driven camera motion.
///
/// Only the time since [`SceneClock::new`] matters; the clock keeps no
/// per-frame state, so sampling it more or less often never changes what a
/// given instant maps to.
#[derive(Debug, Clone, Copy)]
pub struct SceneClock {
    start: Instant,
}

impl SceneClock {
    /// Start a clock at the current instant.
    #[must_use]
    pub fn new() -> Self {
        Self {
            start: Instant::now(),
        }
    }

    /// Time since the clock started.
    #[must_use]
    pub fn elapsed(&self) -> Duration {
        self.start.elapsed()
    }

    /// Elapsed time in seconds.
    #[must_use]
    pub fn elapsed_secs(&self) -> f32 {
        self.elapsed().as_secs_f32()
    }
}

impl Default for SceneClock {
    fn default() -> Self {
        Self::new()
    }
}
