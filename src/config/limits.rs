//! Coordinate travel limits.

use crate::error::AxisError;

/// Closed coordinate range `[min, max]` the axis may travel in.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TravelLimits {
    /// Minimum coordinate (homing origin).
    pub min: f64,
    /// Maximum coordinate.
    pub max: f64,
}

impl TravelLimits {
    /// Create new travel limits.
    pub fn new(min: f64, max: f64) -> Self {
        Self { min, max }
    }

    /// Check if limits are valid (min <= max).
    pub fn is_valid(&self) -> bool {
        self.min <= self.max
    }

    /// Check if a position is within limits.
    pub fn contains(&self, position: f64) -> bool {
        position >= self.min && position <= self.max
    }

    /// Length of the travel range.
    pub fn span(&self) -> f64 {
        self.max - self.min
    }

    /// Reject a target outside the range.
    pub fn check(&self, target: f64) -> Result<(), AxisError> {
        if self.contains(target) {
            Ok(())
        } else {
            Err(AxisError::OutOfBounds {
                target,
                min: self.min,
                max: self.max,
            })
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_limits_inclusive() {
        let limits = TravelLimits::new(0.0, 100.0);

        assert!(limits.check(0.0).is_ok());
        assert!(limits.check(100.0).is_ok());
        assert!(limits.check(50.0).is_ok());
        assert!(limits.check(100.5).is_err());
        assert!(limits.check(-0.1).is_err());
    }

    #[test]
    fn test_nan_target_rejected() {
        let limits = TravelLimits::new(0.0, 100.0);
        assert!(matches!(
            limits.check(f64::NAN),
            Err(AxisError::OutOfBounds { .. })
        ));
    }

    #[test]
    fn test_degenerate_range() {
        let limits = TravelLimits::new(5.0, 5.0);
        assert!(limits.is_valid());
        assert_eq!(limits.span(), 0.0);
        assert!(limits.contains(5.0));
        assert!(!TravelLimits::new(5.0, 4.0).is_valid());
    }
}
