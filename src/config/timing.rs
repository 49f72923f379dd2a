//! Step timing derived from axis configuration.

use super::axis::AxisConfig;
use super::units::{whole_count, Seconds};

/// Discrete speed levels available to the step planner.
///
/// Computed once at construction and used for every move.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StepTiming {
    /// Shortest half-period (top speed).
    pub min_period: Seconds,

    /// Longest half-period (start/stop speed).
    pub max_period: Seconds,

    /// Half-period change per speed level.
    pub delta: Seconds,

    /// Number of speed levels between standstill and top speed, inclusive.
    pub intervals: u32,
}

impl StepTiming {
    /// Derive step timing from the three period bounds.
    ///
    /// `intervals = floor((max - min) / delta) + 1`.
    pub fn new(min_period: Seconds, max_period: Seconds, delta: Seconds) -> Self {
        let span = max_period.0 - min_period.0;
        let intervals = if delta.0 > 0.0 {
            whole_count(span / delta.0).saturating_add(1)
        } else {
            1
        };

        Self {
            min_period,
            max_period,
            delta,
            intervals,
        }
    }

    /// Derive step timing from axis configuration.
    pub fn from_config(config: &AxisConfig) -> Self {
        Self::new(
            config.min_step_period,
            config.max_step_period,
            config.delta_step_period,
        )
    }

    /// Pulses needed for one full acceleration plus deceleration ramp.
    #[inline]
    pub fn ramp_pulses(&self) -> u32 {
        self.intervals.saturating_mul(2)
    }

    /// Half-period at speed level `level` (0 = slowest).
    #[inline]
    pub fn level_period(&self, level: u32) -> Seconds {
        Seconds(self.max_period.0 - level as f64 * self.delta.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_step_intervals() {
        let timing = StepTiming::new(Seconds(0.001), Seconds(0.005), Seconds(0.001));
        assert_eq!(timing.intervals, 5);
        assert_eq!(timing.ramp_pulses(), 10);
    }

    #[test]
    fn test_single_speed_level() {
        let timing = StepTiming::new(Seconds(0.002), Seconds(0.002), Seconds(0.001));
        assert_eq!(timing.intervals, 1);
    }

    #[test]
    fn test_level_period() {
        let timing = StepTiming::new(Seconds(0.001), Seconds(0.003), Seconds(0.001));
        assert!(timing.level_period(0).approx_eq(Seconds(0.003), 1e-12));
        assert!(timing.level_period(2).approx_eq(Seconds(0.001), 1e-12));
    }
}
