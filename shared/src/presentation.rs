use std::time::Duration;

use crate::constants::{SPIN_DURATION_MS, SPIN_START_DELAY_MS};
use crate::shared_wheel_game::SpinOutcome;

/// Fanfare played once a spin settles (sound, confetti, ...).
///
/// Implementations own whatever output handle they need and are handed to
/// the adapter explicitly, so there is never a process wide audio handle.
pub trait Celebration {
    fn celebrate(&mut self, winner: &SpinOutcome);
}

impl<C: Celebration + ?Sized> Celebration for Box<C> {
    fn celebrate(&mut self, winner: &SpinOutcome) {
        (**self).celebrate(winner);
    }
}

/// No fanfare at all.
#[derive(Debug, Default, Clone, Copy)]
pub struct Silent;

impl Celebration for Silent {
    fn celebrate(&mut self, _winner: &SpinOutcome) {}
}

/// How long an adapter waits before and during the spin animation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SpinTiming {
    pub start_delay: Duration,
    pub duration: Duration,
}

impl Default for SpinTiming {
    fn default() -> Self {
        Self {
            start_delay: Duration::from_millis(SPIN_START_DELAY_MS),
            duration: Duration::from_millis(SPIN_DURATION_MS),
        }
    }
}

impl SpinTiming {
    pub const IMMEDIATE: Self = Self {
        start_delay: Duration::ZERO,
        duration: Duration::ZERO,
    };

    /// Time after `request_spin` at which `settle` should be called.
    pub fn settle_after(&self) -> Duration {
        self.start_delay + self.duration
    }
}

/// Deceleration curve: 1 - (1 - t)^4, clamped to `[0, 1]`.
pub fn ease_out(t: f64) -> f64 {
    let t = t.clamp(0.0, 1.0);
    1.0 - (1.0 - t).powi(4)
}

/// Rotation of the wheel over time for one spin, starting from 0°.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SpinAnimation {
    target: f64,
    timing: SpinTiming,
}

impl SpinAnimation {
    pub fn new(outcome: &SpinOutcome, timing: SpinTiming) -> Self {
        Self {
            target: outcome.target_angle_degrees,
            timing,
        }
    }

    pub fn target(&self) -> f64 {
        self.target
    }

    pub fn rotation_at(&self, elapsed: Duration) -> f64 {
        if elapsed < self.timing.start_delay {
            return 0.0;
        }
        let running = elapsed - self.timing.start_delay;
        if running >= self.timing.duration {
            return self.target;
        }
        let progress = running.as_secs_f64() / self.timing.duration.as_secs_f64();
        self.target * ease_out(progress)
    }

    pub fn is_finished(&self, elapsed: Duration) -> bool {
        elapsed >= self.timing.settle_after()
    }

    pub fn remaining(&self, elapsed: Duration) -> Duration {
        self.timing.settle_after().saturating_sub(elapsed)
    }
}
