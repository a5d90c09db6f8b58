//! Fixed-interval step timer.

use serde::{Deserialize, Serialize};

/// A reusable fixed-interval primitive.
///
/// Accumulates elapsed time and fires at most once per [`advance`]
/// call. The accumulator resets to zero on fire, so the interval is
/// measured from the moment a step executes: a late tick can make a
/// gap longer than the interval, never shorter.
///
/// [`advance`]: StepTimer::advance
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct StepTimer {
    interval_ms: f32,
    elapsed_ms: f32,
}

impl StepTimer {
    /// Create a timer that fires every `interval_ms` milliseconds.
    pub fn new(interval_ms: f32) -> Self {
        Self {
            interval_ms,
            elapsed_ms: 0.0,
        }
    }

    /// Advance the timer by `delta_ms`. Returns `true` if the interval
    /// elapsed and the timer fired.
    pub fn advance(&mut self, delta_ms: f32) -> bool {
        self.elapsed_ms += delta_ms;
        if self.elapsed_ms >= self.interval_ms {
            self.elapsed_ms = 0.0;
            true
        } else {
            false
        }
    }

    /// Restart the current interval from zero.
    pub fn reset(&mut self) {
        self.elapsed_ms = 0.0;
    }

    pub fn interval_ms(&self) -> f32 {
        self.interval_ms
    }

    pub fn elapsed_ms(&self) -> f32 {
        self.elapsed_ms
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fires_after_interval() {
        let mut timer = StepTimer::new(100.0);
        assert!(!timer.advance(50.0));
        assert!(!timer.advance(49.0));
        assert!(timer.advance(1.0));
    }

    #[test]
    fn test_resets_on_fire() {
        let mut timer = StepTimer::new(100.0);
        assert!(timer.advance(100.0));
        // The next interval starts from the fire, full length again.
        assert!(!timer.advance(99.0));
        assert!(timer.advance(1.0));
    }

    #[test]
    fn test_at_most_one_fire_per_advance() {
        let mut timer = StepTimer::new(100.0);
        // A long stall fires once, not once per elapsed interval.
        assert!(timer.advance(1000.0));
        assert!(!timer.advance(0.0));
        assert_eq!(timer.elapsed_ms(), 0.0);
    }

    #[test]
    fn test_manual_reset() {
        let mut timer = StepTimer::new(100.0);
        timer.advance(80.0);
        timer.reset();
        assert!(!timer.advance(99.0));
    }
}
