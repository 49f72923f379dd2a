//! Endstop sensor on a digital input.

use embedded_hal::digital::InputPin;

use crate::error::{HardwareError, Result};

use super::EndstopSensor;

/// Endstop read from an embedded-hal `InputPin`.
///
/// Most mechanical and optical endstops pull the line low when triggered;
/// build those with `active_low = true`.
pub struct PinEndstop<PIN: InputPin> {
    pin: PIN,
    active_low: bool,
}

impl<PIN: InputPin> PinEndstop<PIN> {
    /// Create a new endstop.
    pub fn new(pin: PIN, active_low: bool) -> Self {
        Self { pin, active_low }
    }

    /// Endstop that reads triggered when the line is low.
    pub fn active_low(pin: PIN) -> Self {
        Self::new(pin, true)
    }

    /// Give the pin back.
    pub fn release(self) -> PIN {
        self.pin
    }
}

impl<PIN: InputPin> EndstopSensor for PinEndstop<PIN> {
    fn is_triggered(&mut self) -> Result<bool> {
        let high = self.pin.is_high().map_err(|_| HardwareError::SensorPin)?;
        Ok(high != self.active_low)
    }
}
