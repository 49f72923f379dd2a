//! Unit types for physical quantities.
//!
//! Step timing is expressed in [`Seconds`] and converted to nanoseconds only
//! at the pin layer. Positions are tracked as whole [`Steps`] from the homing
//! origin so that repeated moves never accumulate floating-point drift.

use core::ops::{Add, Sub};

use serde::Deserialize;

/// Tolerance used when snapping a ratio to the integer just above it.
///
/// `0.3 / 0.1` evaluates to `2.9999999999999996` in binary floating point;
/// it must count as three whole steps.
const RATIO_EPSILON: f64 = 1e-6;

/// Duration in seconds.
///
/// Used for step half-periods: the time the STEP line is held high, and
/// separately held low, for one pulse.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Deserialize)]
#[serde(transparent)]
pub struct Seconds(pub f64);

impl Seconds {
    /// Create a new Seconds value.
    #[inline]
    pub const fn new(value: f64) -> Self {
        Self(value)
    }

    /// Get the raw value.
    #[inline]
    pub const fn value(self) -> f64 {
        self.0
    }

    /// Convert to whole nanoseconds. Negative durations convert to zero.
    #[inline]
    pub fn as_nanos(self) -> u64 {
        let ns = libm::round(self.0 * 1_000_000_000.0);
        if !(ns > 0.0) {
            0
        } else if ns >= u64::MAX as f64 {
            u64::MAX
        } else {
            ns as u64
        }
    }

    /// Check that two durations agree within `tolerance` seconds.
    #[inline]
    pub fn approx_eq(self, other: Self, tolerance: f64) -> bool {
        libm::fabs(self.0 - other.0) <= tolerance
    }
}

impl Add for Seconds {
    type Output = Self;

    fn add(self, rhs: Self) -> Self::Output {
        Self(self.0 + rhs.0)
    }
}

impl Sub for Seconds {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self::Output {
        Self(self.0 - rhs.0)
    }
}

/// Axis position in steps from the homing origin.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Default)]
pub struct Steps(pub i64);

impl Steps {
    /// Create a new Steps value.
    #[inline]
    pub const fn new(value: i64) -> Self {
        Self(value)
    }

    /// Get the raw value.
    #[inline]
    pub const fn value(self) -> i64 {
        self.0
    }

    /// Get absolute value as u64.
    #[inline]
    pub fn abs(self) -> u64 {
        self.0.unsigned_abs()
    }

    /// Convert to a coordinate given the origin and the distance per step.
    #[inline]
    pub fn to_coord(self, origin: f64, step_size: f64) -> f64 {
        origin + self.0 as f64 * step_size
    }
}

impl Add for Steps {
    type Output = Self;

    fn add(self, rhs: Self) -> Self::Output {
        Self(self.0 + rhs.0)
    }
}

impl Sub for Steps {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self::Output {
        Self(self.0 - rhs.0)
    }
}

/// Floor a non-negative ratio to a whole count.
///
/// Ratios within [`RATIO_EPSILON`] of the next integer snap up to it.
/// Negative and NaN ratios yield zero.
pub fn whole_count(ratio: f64) -> u32 {
    if !(ratio > 0.0) {
        return 0;
    }
    let nearest = libm::round(ratio);
    let count = if libm::fabs(ratio - nearest) < RATIO_EPSILON {
        nearest
    } else {
        libm::floor(ratio)
    };
    if count >= u32::MAX as f64 {
        u32::MAX
    } else {
        count as u32
    }
}

/// Floor a non-negative ratio to a whole count, without snapping.
///
/// Negative and NaN ratios yield zero.
pub fn floor_count(ratio: f64) -> u32 {
    if !(ratio > 0.0) {
        return 0;
    }
    let count = libm::floor(ratio);
    if count >= u32::MAX as f64 {
        u32::MAX
    } else {
        count as u32
    }
}

/// Check whether `ratio` is a whole number within [`RATIO_EPSILON`].
pub fn is_whole(ratio: f64) -> bool {
    libm::fabs(ratio - libm::round(ratio)) < RATIO_EPSILON
}
