//! # axis-driver
//!
//! Single-axis stepper driver with endstop homing and trapezoidal step
//! timing, built on embedded-hal 1.0.
//!
//! ## Features
//!
//! - **Homing**: linear axes seek an endstop at the slowest speed with a
//!   bounded step budget; rotational axes home in place
//! - **Trapezoidal step plans**: discrete speed levels, computed without
//!   allocation and inspectable before a move
//! - **Travel limits**: targets outside `[min_coord, max_coord]` are rejected
//!   before any pulse is issued
//! - **Busy gate**: at most one homing or move runs on an axis at a time
//! - **no_std compatible**: core library works without standard library
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use axis_driver::{AxisDriverBuilder, PinEndstop, PulseActuator};
//!
//! let config = axis_driver::load_config("axes.toml")?;
//!
//! let x = config.axis("x").expect("axis x configured");
//!
//! let axis = AxisDriverBuilder::new()
//!     .from_config(&config, "x")?
//!     .actuator(PulseActuator::from_config(step_pin, dir_pin, delay, x))
//!     .endstop(PinEndstop::active_low(sensor_pin))
//!     .build()?;
//!
//! axis.homing()?;
//! axis.move_to(120.0)?;
//! ```
//!
//! ## Feature Flags
//!
//! - `std` (default): Enables file I/O, TOML parsing and `tracing` logging
//! - `alloc`: Enables heap allocation for no_std with allocator
//! - `defmt`: Enables defmt logging for embedded targets

#![cfg_attr(not(feature = "std"), no_std)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![deny(unsafe_code)]
#![allow(clippy::result_large_err)]

#[cfg(feature = "alloc")]
extern crate alloc;

// Must come first so the logging macros are visible to every module
#[macro_use]
mod fmt;

// Core modules
pub mod axis;
pub mod config;
pub mod error;
pub mod hal;
pub mod motion;

// Re-exports for ergonomic API
pub use axis::{AxisClaim, AxisDriver, AxisDriverBuilder, AxisStatus, HomingState};
pub use config::{validate_axis, validate_config, AxisConfig, AxisKind, StepTiming, SystemConfig};
pub use error::{AxisError, ConfigError, Error, HardwareError, Result};
pub use hal::{EndstopSensor, NoEndstop, PinEndstop, PulseActuator, StepActuator};
pub use motion::{Direction, MotionPhase, PlanExecutor, StepPlan};

// Configuration loading (std only)
#[cfg(feature = "std")]
pub use config::{load_config, parse_config};

// Unit types
pub use config::units::{Seconds, Steps};
