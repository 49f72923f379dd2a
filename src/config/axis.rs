//! Axis configuration from TOML.

use serde::Deserialize;

use super::units::Seconds;

/// Kind of motion the axis performs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum AxisKind {
    /// Linear axis, homed against an endstop sensor.
    #[serde(alias = "LIN")]
    Linear,
    /// Rotational axis, homed by direct assignment.
    #[serde(alias = "ROT")]
    Rotational,
}

impl AxisKind {
    /// Whether the axis needs an endstop sensor to home.
    #[inline]
    pub fn needs_endstop(self) -> bool {
        matches!(self, AxisKind::Linear)
    }
}

/// Complete axis configuration.
///
/// Fixed once an [`AxisDriver`](crate::AxisDriver) is built from it.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct AxisConfig {
    /// Linear or rotational.
    pub kind: AxisKind,

    /// DIR pin number on the board header.
    pub dir_pin: u8,

    /// STEP pin number on the board header.
    pub step_pin: u8,

    /// Endstop sensor pin number. Required for linear axes, ignored otherwise.
    #[serde(default)]
    pub sensor_pin: Option<u8>,

    /// Distance travelled per step pulse, in coordinate units.
    pub step_size: f64,

    /// Shortest step half-period (top speed).
    pub min_step_period: Seconds,

    /// Longest step half-period (start/stop speed, also used for homing).
    pub max_step_period: Seconds,

    /// Half-period change between adjacent speed levels.
    pub delta_step_period: Seconds,

    /// Minimum coordinate; the axis sits here after homing.
    pub min_coord: f64,

    /// Maximum coordinate.
    pub max_coord: f64,

    /// Invert direction pin logic.
    #[serde(default)]
    pub invert_direction: bool,
}

impl AxisConfig {
    /// Pin of the endstop sensor, if the axis kind uses one.
    #[inline]
    pub fn endstop_pin(&self) -> Option<u8> {
        if self.kind.needs_endstop() {
            self.sensor_pin
        } else {
            None
        }
    }
}
