//! Axis module for axis-driver.
//!
//! Provides the axis driver with homing, busy gating, and position tracking.

mod builder;
mod driver;
mod position;
pub mod state;

pub use builder::AxisDriverBuilder;
pub use driver::{AxisClaim, AxisDriver, AxisStatus};
pub use position::Position;
pub use state::{BusyGate, BusyGuard, HomingState};
