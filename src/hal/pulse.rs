//! Step/direction pulse generator.
//!
//! Generic over embedded-hal 1.0 pin and delay types.

use embedded_hal::delay::DelayNs;
use embedded_hal::digital::OutputPin;

use crate::config::{AxisConfig, Seconds};
use crate::error::{HardwareError, Result};
use crate::motion::Direction;

use super::StepActuator;

/// STEP/DIR actuator for step-direction drivers such as the DRV8825.
///
/// Generic over:
/// - `STEP`: STEP pin type (must implement `OutputPin`)
/// - `DIR`: DIR pin type (must implement `OutputPin`)
/// - `DELAY`: Delay provider (must implement `DelayNs`)
pub struct PulseActuator<STEP, DIR, DELAY>
where
    STEP: OutputPin,
    DIR: OutputPin,
    DELAY: DelayNs,
{
    /// STEP pin (pulse to move one step).
    step_pin: STEP,

    /// DIR pin (low = positive, or inverted).
    dir_pin: DIR,

    /// Delay provider for step timing.
    delay: DELAY,

    /// Current direction (cached to avoid unnecessary pin writes).
    current_direction: Option<Direction>,

    /// Whether direction pin logic is inverted.
    invert_direction: bool,
}

impl<STEP, DIR, DELAY> PulseActuator<STEP, DIR, DELAY>
where
    STEP: OutputPin,
    DIR: OutputPin,
    DELAY: DelayNs,
{
    /// Create a new actuator. The DIR pin is written on the first step.
    pub fn new(step_pin: STEP, dir_pin: DIR, delay: DELAY, invert_direction: bool) -> Self {
        Self {
            step_pin,
            dir_pin,
            delay,
            current_direction: None,
            invert_direction,
        }
    }

    /// Create an actuator with the DIR polarity of `config`.
    pub fn from_config(step_pin: STEP, dir_pin: DIR, delay: DELAY, config: &AxisConfig) -> Self {
        Self::new(step_pin, dir_pin, delay, config.invert_direction)
    }

    /// Direction last written to the DIR pin.
    #[inline]
    pub fn direction(&self) -> Option<Direction> {
        self.current_direction
    }

    /// Give the pins and delay back.
    pub fn release(self) -> (STEP, DIR, DELAY) {
        (self.step_pin, self.dir_pin, self.delay)
    }

    fn set_direction(&mut self, direction: Direction) -> Result<()> {
        if self.current_direction == Some(direction) {
            return Ok(());
        }

        // Positive travel drives DIR low unless inverted
        let pin_high = direction.is_positive() == self.invert_direction;

        if pin_high {
            self.dir_pin.set_high().map_err(|_| HardwareError::DirPin)?;
        } else {
            self.dir_pin.set_low().map_err(|_| HardwareError::DirPin)?;
        }

        self.current_direction = Some(direction);
        Ok(())
    }

    /// Wait `ns` nanoseconds, in chunks `DelayNs::delay_ns` can take.
    fn hold(&mut self, ns: u64) {
        let mut remaining = ns;
        while remaining > u64::from(u32::MAX) {
            self.delay.delay_ns(u32::MAX);
            remaining -= u64::from(u32::MAX);
        }
        // Fits after the loop
        self.delay.delay_ns(remaining as u32);
    }
}

impl<STEP, DIR, DELAY> StepActuator for PulseActuator<STEP, DIR, DELAY>
where
    STEP: OutputPin,
    DIR: OutputPin,
    DELAY: DelayNs,
{
    fn step(&mut self, direction: Direction, half_period: Seconds) -> Result<()> {
        self.set_direction(direction)?;

        let half_period_ns = half_period.as_nanos();

        self.step_pin.set_high().map_err(|_| HardwareError::StepPin)?;
        self.hold(half_period_ns);

        self.step_pin.set_low().map_err(|_| HardwareError::StepPin)?;
        self.hold(half_period_ns);

        Ok(())
    }
}
