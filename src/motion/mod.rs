//! Motion module for axis-driver.
//!
//! Provides step plan calculation and pulse-by-pulse execution.

mod executor;
mod profile;

pub use executor::PlanExecutor;
pub use profile::{Direction, MotionPhase, StepPlan};
