//! Plan execution cursor.

use crate::config::Seconds;

use super::profile::{MotionPhase, StepPlan};

/// Runtime cursor over a [`StepPlan`].
///
/// Yields one half-period per pulse and tracks progress, so callers can
/// report how far an in-flight move has got.
#[derive(Debug, Clone)]
pub struct PlanExecutor {
    /// The plan being executed.
    plan: StepPlan,

    /// Index of the next pulse to emit.
    current_step: u32,
}

impl PlanExecutor {
    /// Create a new executor for a plan.
    pub fn new(plan: StepPlan) -> Self {
        Self {
            plan,
            current_step: 0,
        }
    }

    /// Check if every pulse has been emitted.
    #[inline]
    pub fn is_complete(&self) -> bool {
        self.current_step >= self.plan.total_steps
    }

    /// Number of pulses emitted so far.
    #[inline]
    pub fn current_step(&self) -> u32 {
        self.current_step
    }

    /// Get the total number of pulses.
    #[inline]
    pub fn total_steps(&self) -> u32 {
        self.plan.total_steps
    }

    /// Get pulses remaining.
    #[inline]
    pub fn steps_remaining(&self) -> u32 {
        self.plan.total_steps.saturating_sub(self.current_step)
    }

    /// Phase of the next pulse.
    #[inline]
    pub fn phase(&self) -> MotionPhase {
        self.plan.phase_at(self.current_step)
    }
}

impl Iterator for PlanExecutor {
    type Item = Seconds;

    fn next(&mut self) -> Option<Seconds> {
        let pause = self.plan.pause_at(self.current_step)?;
        self.current_step += 1;
        Some(pause)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.steps_remaining() as usize;
        (remaining, Some(remaining))
    }
}

impl ExactSizeIterator for PlanExecutor {}
