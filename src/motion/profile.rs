//! Trapezoidal step plan.
//!
//! Turns a pulse count into per-pulse half-periods using the discrete speed
//! levels of a [`StepTiming`]. The plan is a pure value: no allocation, no
//! hardware access, and it can be inspected pulse by pulse.

use crate::config::{Seconds, StepTiming};

/// Direction of axis travel.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Direction {
    /// Toward `max_coord`.
    Positive,
    /// Toward `min_coord` (homing direction).
    Negative,
}

impl Direction {
    /// Direction that reduces `current - target`.
    ///
    /// A zero delta resolves to [`Direction::Negative`].
    #[inline]
    pub fn from_delta(delta: f64) -> Self {
        if delta < 0.0 {
            Direction::Positive
        } else {
            Direction::Negative
        }
    }

    /// Get the sign multiplier.
    #[inline]
    pub fn sign(self) -> i64 {
        match self {
            Direction::Positive => 1,
            Direction::Negative => -1,
        }
    }

    /// Whether this is the positive direction.
    #[inline]
    pub fn is_positive(self) -> bool {
        matches!(self, Direction::Positive)
    }
}

/// Phase of a pulse within a plan.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum MotionPhase {
    /// Short move at constant minimum speed.
    Creeping,
    /// Speeding up one level per pulse.
    Accelerating,
    /// Constant top speed.
    Cruising,
    /// Slowing down one level per pulse.
    Decelerating,
    /// Past the last pulse.
    Complete,
}

/// Step plan for a single move.
#[derive(Debug, Clone, PartialEq)]
pub struct StepPlan {
    /// Total pulses in the plan.
    pub total_steps: u32,

    /// Pulses in the acceleration leg.
    pub accel_steps: u32,

    /// Pulses at top speed.
    pub cruise_steps: u32,

    /// Pulses in the deceleration leg.
    pub decel_steps: u32,

    /// Timing the plan was built from.
    pub timing: StepTiming,
}

impl StepPlan {
    /// Build the plan for `pulses` step pulses.
    ///
    /// - `0` pulses: empty plan.
    /// - fewer than two full ramps: every pulse at the slowest half-period.
    ///   Short moves never accelerate.
    /// - exactly two ramps: accelerate then decelerate, no cruise.
    /// - more: accelerate, cruise at the fastest half-period, decelerate.
    pub fn new(pulses: u32, timing: &StepTiming) -> Self {
        let ramp = timing.intervals;

        let (accel_steps, cruise_steps, decel_steps) = if pulses < timing.ramp_pulses() {
            (0, 0, 0)
        } else {
            (ramp, pulses - timing.ramp_pulses(), ramp)
        };

        Self {
            total_steps: pulses,
            accel_steps,
            cruise_steps,
            decel_steps,
            timing: *timing,
        }
    }

    /// Create an empty plan.
    pub fn zero(timing: &StepTiming) -> Self {
        Self::new(0, timing)
    }

    /// Number of pulses in the plan.
    #[inline]
    pub fn len(&self) -> u32 {
        self.total_steps
    }

    /// Check if the plan issues no pulses.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.total_steps == 0
    }

    /// Whether the plan ramps at all.
    #[inline]
    pub fn is_trapezoidal(&self) -> bool {
        self.accel_steps > 0
    }

    /// Get the phase of pulse `step` (0-indexed).
    pub fn phase_at(&self, step: u32) -> MotionPhase {
        if step >= self.total_steps {
            MotionPhase::Complete
        } else if !self.is_trapezoidal() {
            MotionPhase::Creeping
        } else if step < self.accel_steps {
            MotionPhase::Accelerating
        } else if step < self.accel_steps + self.cruise_steps {
            MotionPhase::Cruising
        } else {
            MotionPhase::Decelerating
        }
    }

    /// Half-period of pulse `step` (0-indexed).
    ///
    /// Returns `None` past the end of the plan.
    pub fn pause_at(&self, step: u32) -> Option<Seconds> {
        let timing = &self.timing;
        let pause = match self.phase_at(step) {
            MotionPhase::Complete => return None,
            MotionPhase::Creeping => timing.max_period,
            MotionPhase::Accelerating => timing.level_period(step),
            MotionPhase::Cruising => timing.min_period,
            MotionPhase::Decelerating => {
                let i = step - self.accel_steps - self.cruise_steps;
                Seconds(timing.min_period.0 + i as f64 * timing.delta.0)
            }
        };
        Some(pause)
    }

    /// Iterate over the half-periods of every pulse in order.
    pub fn pauses(&self) -> impl Iterator<Item = Seconds> + '_ {
        (0..self.total_steps).filter_map(move |step| self.pause_at(step))
    }

    /// Wall-clock duration of the whole plan.
    ///
    /// Each pulse holds its half-period twice, once high and once low.
    pub fn total_duration(&self) -> Seconds {
        Seconds(self.pauses().map(|p| 2.0 * p.0).sum())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn timing() -> StepTiming {
        StepTiming::new(Seconds(0.001), Seconds(0.003), Seconds(0.001))
    }

    fn collect(plan: &StepPlan) -> Vec<f64> {
        plan.pauses().map(|p| p.0).collect()
    }

    fn assert_pauses(actual: &[f64], expected: &[f64]) {
        assert_eq!(actual.len(), expected.len(), "{:?} vs {:?}", actual, expected);
        for (a, e) in actual.iter().zip(expected) {
            assert!((a - e).abs() < 1e-9, "{:?} vs {:?}", actual, expected);
        }
    }

    #[test]
    fn test_empty_plan() {
        let plan = StepPlan::new(0, &timing());
        assert!(plan.is_empty());
        assert_eq!(plan.pauses().count(), 0);
        assert_eq!(plan.phase_at(0), MotionPhase::Complete);
    }

    #[test]
    fn test_short_move_creeps() {
        let plan = StepPlan::new(5, &timing());
        assert!(!plan.is_trapezoidal());
        assert_pauses(&collect(&plan), &[0.003; 5]);
        assert_eq!(plan.phase_at(4), MotionPhase::Creeping);
    }

    #[test]
    fn test_triangle_plan() {
        let plan = StepPlan::new(6, &timing());
        assert_eq!(plan.cruise_steps, 0);
        assert_pauses(
            &collect(&plan),
            &[0.003, 0.002, 0.001, 0.001, 0.002, 0.003],
        );
    }

    #[test]
    fn test_trapezoid_with_cruise() {
        let plan = StepPlan::new(10, &timing());
        assert_eq!(plan.accel_steps, 3);
        assert_eq!(plan.cruise_steps, 4);
        assert_eq!(plan.decel_steps, 3);
        assert_pauses(
            &collect(&plan),
            &[0.003, 0.002, 0.001, 0.001, 0.001, 0.001, 0.001, 0.001, 0.002, 0.003],
        );
    }

    #[test]
    fn test_phases() {
        let plan = StepPlan::new(10, &timing());
        assert_eq!(plan.phase_at(0), MotionPhase::Accelerating);
        assert_eq!(plan.phase_at(3), MotionPhase::Cruising);
        assert_eq!(plan.phase_at(7), MotionPhase::Decelerating);
        assert_eq!(plan.phase_at(10), MotionPhase::Complete);
        assert_eq!(plan.pause_at(10), None);
    }

    #[test]
    fn test_total_duration() {
        let plan = StepPlan::new(6, &timing());
        // 2 * (0.003 + 0.002 + 0.001) * 2
        assert!(plan.total_duration().approx_eq(Seconds(0.024), 1e-12));
    }

    #[test]
    fn test_direction() {
        assert_eq!(Direction::from_delta(-2.0), Direction::Positive);
        assert_eq!(Direction::from_delta(2.0), Direction::Negative);
        assert_eq!(Direction::from_delta(0.0), Direction::Negative);
        assert_eq!(Direction::Positive.sign(), 1);
        assert_eq!(Direction::Negative.sign(), -1);
    }
}
