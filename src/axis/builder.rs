//! Builder pattern for AxisDriver.

use heapless::String;

use crate::config::{AxisConfig, SystemConfig};
use crate::error::{ConfigError, Error, Result};
use crate::hal::{EndstopSensor, NoEndstop, StepActuator};

use super::driver::AxisDriver;

/// Builder for creating AxisDriver instances.
///
/// Starts without an endstop; calling [`endstop`](Self::endstop) switches
/// the endstop type.
pub struct AxisDriverBuilder<A, E = NoEndstop>
where
    A: StepActuator,
    E: EndstopSensor,
{
    config: Option<AxisConfig>,
    actuator: Option<A>,
    endstop: Option<E>,
}

impl<A> Default for AxisDriverBuilder<A, NoEndstop>
where
    A: StepActuator,
{
    fn default() -> Self {
        Self::new()
    }
}

impl<A> AxisDriverBuilder<A, NoEndstop>
where
    A: StepActuator,
{
    /// Create a new builder.
    pub fn new() -> Self {
        Self {
            config: None,
            actuator: None,
            endstop: None,
        }
    }
}

impl<A, E> AxisDriverBuilder<A, E>
where
    A: StepActuator,
    E: EndstopSensor,
{
    /// Set the axis configuration.
    pub fn config(mut self, config: AxisConfig) -> Self {
        self.config = Some(config);
        self
    }

    /// Configure from SystemConfig by axis name.
    pub fn from_config(self, config: &SystemConfig, axis_name: &str) -> Result<Self> {
        let axis = config.axis(axis_name).ok_or_else(|| {
            Error::Config(ConfigError::AxisNotFound(
                String::try_from(axis_name).unwrap_or_default(),
            ))
        })?;

        Ok(self.config(axis.clone()))
    }

    /// Set the step actuator.
    pub fn actuator(mut self, actuator: A) -> Self {
        self.actuator = Some(actuator);
        self
    }

    /// Set the endstop sensor.
    pub fn endstop<E2: EndstopSensor>(self, endstop: E2) -> AxisDriverBuilder<A, E2> {
        AxisDriverBuilder {
            config: self.config,
            actuator: self.actuator,
            endstop: Some(endstop),
        }
    }

    /// Build the AxisDriver.
    ///
    /// # Errors
    ///
    /// Returns an error if a required field is missing or the configuration
    /// is rejected by [`AxisDriver::new`].
    pub fn build(self) -> Result<AxisDriver<A, E>> {
        let config = self
            .config
            .ok_or(Error::Config(ConfigError::MissingField("config")))?;

        let actuator = self
            .actuator
            .ok_or(Error::Config(ConfigError::MissingField("actuator")))?;

        AxisDriver::new(config, actuator, self.endstop)
    }
}
