//! Hardware collaborators of the axis driver.
//!
//! The driver only needs two capabilities: emit one step pulse, and sample
//! the endstop. They are traits so that tests can substitute recording
//! doubles; [`PulseActuator`] and [`PinEndstop`] implement them on top of
//! embedded-hal 1.0 pins.

mod endstop;
mod pulse;

pub use endstop::PinEndstop;
pub use pulse::PulseActuator;

use crate::config::Seconds;
use crate::error::Result;
use crate::motion::Direction;

/// Emits single step pulses.
pub trait StepActuator {
    /// Drive the direction output, then pulse STEP high and low, holding
    /// `half_period` in each phase.
    fn step(&mut self, direction: Direction, half_period: Seconds) -> Result<()>;
}

/// Samples an endstop sensor.
pub trait EndstopSensor {
    /// Whether the sensor is currently triggered.
    ///
    /// Implementations normalize the electrical polarity.
    fn is_triggered(&mut self) -> Result<bool>;
}

/// Placeholder endstop for rotational axes.
///
/// Never triggered. Used as the default endstop type parameter when an axis
/// is built without a sensor.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoEndstop;

impl EndstopSensor for NoEndstop {
    fn is_triggered(&mut self) -> Result<bool> {
        Ok(false)
    }
}

impl<T: StepActuator + ?Sized> StepActuator for &mut T {
    fn step(&mut self, direction: Direction, half_period: Seconds) -> Result<()> {
        (**self).step(direction, half_period)
    }
}

impl<T: EndstopSensor + ?Sized> EndstopSensor for &mut T {
    fn is_triggered(&mut self) -> Result<bool> {
        (**self).is_triggered()
    }
}
