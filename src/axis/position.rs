//! Position tracking for an axis.
//!
//! Provides absolute position tracking in steps with coordinate conversions.

use crate::config::units::{whole_count, Steps};

/// Axis position tracker.
///
/// Keeps a whole step count relative to the homing origin; the coordinate is
/// derived from it on demand.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Position {
    /// Current position in steps from the origin.
    steps: Steps,
    /// Coordinate of step zero.
    origin: f64,
    /// Distance per step.
    step_size: f64,
}

impl Position {
    /// Create a position tracker at `origin`.
    #[inline]
    pub fn new(origin: f64, step_size: f64) -> Self {
        Self {
            steps: Steps::default(),
            origin,
            step_size,
        }
    }

    /// Get current position in steps.
    #[inline]
    pub fn steps(&self) -> Steps {
        self.steps
    }

    /// Get current coordinate.
    #[inline]
    pub fn coord(&self) -> f64 {
        self.steps.to_coord(self.origin, self.step_size)
    }

    /// Move by a number of steps.
    #[inline]
    pub fn move_steps(&mut self, delta: i64) {
        self.steps = Steps(self.steps.0 + delta);
    }

    /// Set the current position as the origin.
    #[inline]
    pub fn set_origin(&mut self) {
        self.steps = Steps::default();
    }

    /// Distance per step.
    #[inline]
    pub fn step_size(&self) -> f64 {
        self.step_size
    }

    /// Signed coordinate distance `current - target`.
    #[inline]
    pub fn delta_to(&self, target: f64) -> f64 {
        self.coord() - target
    }

    /// Whole pulses that fit in the distance to `target`.
    ///
    /// A ratio a hair below a whole number counts as that number only when
    /// the landing coordinate does not pass `target`.
    pub fn pulses_to(&self, target: f64) -> u32 {
        let delta = self.delta_to(target);
        let mut pulses = whole_count(libm::fabs(delta) / self.step_size);
        let sign = if delta < 0.0 { 1 } else { -1 };

        while pulses > 0 {
            let landing = Steps(self.steps.0 + sign * i64::from(pulses))
                .to_coord(self.origin, self.step_size);
            let passes = if sign > 0 {
                landing > target
            } else {
                landing < target
            };
            if !passes {
                break;
            }
            pulses -= 1;
        }

        pulses
    }
}
