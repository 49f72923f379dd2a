//! Configuration validation.

use crate::error::{ConfigError, Error, PinRole, Result};

use super::axis::AxisConfig;
use super::limits::TravelLimits;
use super::units::is_whole;
use super::SystemConfig;

/// Lowest valid board pin number.
pub const MIN_PIN: u8 = 1;

/// Highest valid board pin number.
pub const MAX_PIN: u8 = 40;

/// Validate a system configuration.
///
/// Every axis must pass [`validate_axis`].
pub fn validate_config(config: &SystemConfig) -> Result<()> {
    for (_name, axis) in config.axes.iter() {
        validate_axis(axis)?;
    }

    Ok(())
}

/// Validate one axis configuration.
///
/// Checks:
/// - Pins lie in the board range and do not collide
/// - Linear axes name a sensor pin
/// - Step size is positive
/// - Step periods are positive with min <= max
/// - Delta period is positive and divides the period span evenly
/// - Coordinate range satisfies min <= max
pub fn validate_axis(config: &AxisConfig) -> Result<()> {
    validate_pins(config)?;

    if !(config.step_size > 0.0) {
        return Err(Error::Config(ConfigError::InvalidStepSize(config.step_size)));
    }

    let min = config.min_step_period.0;
    let max = config.max_step_period.0;
    if !(min > 0.0) || !(max > 0.0) || min > max {
        return Err(Error::Config(ConfigError::InvalidStepPeriods { min, max }));
    }

    let delta = config.delta_step_period.0;
    if !(delta > 0.0) || !is_whole((max - min) / delta) {
        return Err(Error::Config(ConfigError::InvalidDeltaStep(delta)));
    }

    let limits = TravelLimits::new(config.min_coord, config.max_coord);
    if !limits.is_valid() {
        return Err(Error::Config(ConfigError::InvalidCoordRange {
            min: config.min_coord,
            max: config.max_coord,
        }));
    }

    Ok(())
}

/// Validate pin numbers and check they are pairwise distinct.
pub fn validate_pins(config: &AxisConfig) -> Result<()> {
    check_range(PinRole::Dir, config.dir_pin)?;
    check_range(PinRole::Step, config.step_pin)?;

    if config.dir_pin == config.step_pin {
        return Err(Error::Config(ConfigError::DuplicatePin {
            first: PinRole::Dir,
            second: PinRole::Step,
            pin: config.dir_pin,
        }));
    }

    if !config.kind.needs_endstop() {
        return Ok(());
    }

    let sensor = config
        .sensor_pin
        .ok_or(Error::Config(ConfigError::MissingSensorPin))?;
    check_range(PinRole::Sensor, sensor)?;

    if sensor == config.dir_pin {
        return Err(Error::Config(ConfigError::DuplicatePin {
            first: PinRole::Dir,
            second: PinRole::Sensor,
            pin: sensor,
        }));
    }

    if sensor == config.step_pin {
        return Err(Error::Config(ConfigError::DuplicatePin {
            first: PinRole::Step,
            second: PinRole::Sensor,
            pin: sensor,
        }));
    }

    Ok(())
}

fn check_range(role: PinRole, pin: u8) -> Result<()> {
    if (MIN_PIN..=MAX_PIN).contains(&pin) {
        Ok(())
    } else {
        Err(Error::Config(ConfigError::PinOutOfRange { role, pin }))
    }
}
