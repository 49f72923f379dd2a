//! Error types for axis-driver.
//!
//! Configuration errors are raised once, at construction or load time. Axis
//! errors are raised by `homing` and `move_to` when a precondition fails.
//! Hardware errors come from the embedded-hal collaborators.

use core::fmt;

/// Result type alias using the library's Error type.
pub type Result<T> = core::result::Result<T, Error>;

/// Unified error type for all axis-driver operations.
#[derive(Debug, Clone, PartialEq)]
pub enum Error {
    /// Configuration parsing or validation error
    Config(ConfigError),
    /// Axis operation rejected or failed
    Axis(AxisError),
    /// Pin I/O failure in a hardware collaborator
    Hardware(HardwareError),
}

/// Configuration-related errors. Never retried.
#[derive(Debug, Clone, PartialEq)]
pub enum ConfigError {
    /// Failed to parse TOML configuration
    ParseError(heapless::String<128>),
    /// Axis name not found in configuration
    AxisNotFound(heapless::String<32>),
    /// Two pin roles share the same pin number
    DuplicatePin {
        /// First pin role
        first: PinRole,
        /// Second pin role
        second: PinRole,
        /// The shared pin number
        pin: u8,
    },
    /// Pin number outside the board header range
    PinOutOfRange {
        /// Offending pin role
        role: PinRole,
        /// Offending pin number
        pin: u8,
    },
    /// Linear axis configured without a sensor pin
    MissingSensorPin,
    /// Linear axis built without an endstop sensor
    MissingEndstop,
    /// Step size must be > 0
    InvalidStepSize(f64),
    /// Step periods must be > 0 with min <= max
    InvalidStepPeriods {
        /// Minimum half-period in seconds
        min: f64,
        /// Maximum half-period in seconds
        max: f64,
    },
    /// Delta step period must be > 0 and evenly divide max - min
    InvalidDeltaStep(f64),
    /// Coordinate range must satisfy min <= max
    InvalidCoordRange {
        /// Minimum coordinate
        min: f64,
        /// Maximum coordinate
        max: f64,
    },
    /// A required builder field was not provided
    MissingField(&'static str),
    /// File I/O error (std only)
    #[cfg(feature = "std")]
    IoError(heapless::String<128>),
}

/// Errors raised by axis operations.
#[derive(Debug, Clone, PartialEq)]
pub enum AxisError {
    /// Another homing or move is in flight; retry later
    Busy,
    /// Move requested before homing completed
    NotHomed,
    /// Target lies outside the configured coordinate range
    OutOfBounds {
        /// Requested target coordinate
        target: f64,
        /// Minimum coordinate
        min: f64,
        /// Maximum coordinate
        max: f64,
    },
    /// Linear homing exhausted its step budget without an endstop trigger.
    ///
    /// Usually a disconnected sensor or a wiring fault.
    HomingFault {
        /// Pulses issued before giving up
        steps: u32,
    },
}

/// Hardware collaborator errors.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum HardwareError {
    /// STEP pin operation failed
    StepPin,
    /// DIR pin operation failed
    DirPin,
    /// Endstop sensor pin read failed
    SensorPin,
}

/// Role of a configured pin, used in validation errors.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum PinRole {
    /// STEP output
    Step,
    /// DIR output
    Dir,
    /// Endstop sensor input
    Sensor,
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Config(e) => write!(f, "Configuration error: {}", e),
            Error::Axis(e) => write!(f, "Axis error: {}", e),
            Error::Hardware(e) => write!(f, "Hardware error: {}", e),
        }
    }
}

impl fmt::Display for PinRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PinRole::Step => write!(f, "step"),
            PinRole::Dir => write!(f, "direction"),
            PinRole::Sensor => write!(f, "sensor"),
        }
    }
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::ParseError(msg) => write!(f, "Parse error: {}", msg),
            ConfigError::AxisNotFound(name) => write!(f, "Axis '{}' not found", name),
            ConfigError::DuplicatePin { first, second, pin } => {
                write!(f, "Pin {} used for both {} and {}", pin, first, second)
            }
            ConfigError::PinOutOfRange { role, pin } => {
                write!(f, "Invalid {} pin: {}. Must be 1-40", role, pin)
            }
            ConfigError::MissingSensorPin => write!(f, "Linear axis requires a sensor pin"),
            ConfigError::MissingEndstop => write!(f, "Linear axis requires an endstop sensor"),
            ConfigError::InvalidStepSize(v) => write!(f, "Invalid step size: {}. Must be > 0", v),
            ConfigError::InvalidStepPeriods { min, max } => {
                write!(f, "Invalid step periods: min ({}) and max ({}) must be > 0 with min <= max", min, max)
            }
            ConfigError::InvalidDeltaStep(v) => {
                write!(f, "Invalid delta step period: {}. Must be > 0 and divide max - min evenly", v)
            }
            ConfigError::InvalidCoordRange { min, max } => {
                write!(f, "Invalid coordinate range: min ({}) must be <= max ({})", min, max)
            }
            ConfigError::MissingField(field) => write!(f, "{} is required", field),
            #[cfg(feature = "std")]
            ConfigError::IoError(msg) => write!(f, "I/O error: {}", msg),
        }
    }
}

impl fmt::Display for AxisError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AxisError::Busy => write!(f, "Axis is busy"),
            AxisError::NotHomed => write!(f, "Homing has not been performed"),
            AxisError::OutOfBounds { target, max, .. } if target > max => {
                write!(f, "Target coordinate {} is above maximum coordinate {}", target, max)
            }
            AxisError::OutOfBounds { target, min, .. } => {
                write!(f, "Target coordinate {} is below minimum coordinate {}", target, min)
            }
            AxisError::HomingFault { steps } => {
                write!(f, "Endstop not reached after {} steps, check sensor wiring", steps)
            }
        }
    }
}

impl fmt::Display for HardwareError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            HardwareError::StepPin => write!(f, "STEP pin operation failed"),
            HardwareError::DirPin => write!(f, "DIR pin operation failed"),
            HardwareError::SensorPin => write!(f, "Endstop pin read failed"),
        }
    }
}

// Conversion impls
impl From<ConfigError> for Error {
    fn from(e: ConfigError) -> Self {
        Error::Config(e)
    }
}

impl From<AxisError> for Error {
    fn from(e: AxisError) -> Self {
        Error::Axis(e)
    }
}

impl From<HardwareError> for Error {
    fn from(e: HardwareError) -> Self {
        Error::Hardware(e)
    }
}

#[cfg(feature = "std")]
impl std::error::Error for Error {}

#[cfg(feature = "std")]
impl std::error::Error for ConfigError {}

#[cfg(feature = "std")]
impl std::error::Error for AxisError {}

#[cfg(feature = "std")]
impl std::error::Error for HardwareError {}
