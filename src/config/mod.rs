//! Configuration module for axis-driver.
//!
//! Provides types for loading and validating axis configurations from TOML
//! files (with `std` feature) or pre-built values.

mod axis;
mod limits;
mod system;
mod timing;
pub mod units;
#[cfg(feature = "std")]
mod loader;
mod validation;

pub use axis::{AxisConfig, AxisKind};
pub use limits::TravelLimits;
pub use system::SystemConfig;
pub use timing::StepTiming;
pub use validation::{validate_axis, validate_config, validate_pins, MAX_PIN, MIN_PIN};

#[cfg(feature = "std")]
pub use loader::{load_config, parse_config};

// Re-export unit types at config level
pub use units::{Seconds, Steps};
