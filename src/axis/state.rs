//! Axis state: homing progress and the busy gate.

use core::cell::Cell;

use crate::error::AxisError;

/// Homing progress of an axis.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum HomingState {
    /// Position unknown; moves are rejected.
    #[default]
    Unhomed,
    /// Homing routine in progress.
    Homing,
    /// Origin established; moves are accepted.
    Homed,
}

impl HomingState {
    /// State name for display/debugging.
    pub fn name(self) -> &'static str {
        match self {
            HomingState::Unhomed => "Unhomed",
            HomingState::Homing => "Homing",
            HomingState::Homed => "Homed",
        }
    }
}

/// Mutual-exclusion gate for axis operations.
///
/// At most one [`BusyGuard`] exists per gate. The flag lives in a `Cell`, so
/// the gate is `!Sync`; hosts that share an axis across threads put the
/// whole driver behind a mutex.
#[derive(Debug, Default)]
pub struct BusyGate {
    busy: Cell<bool>,
}

impl BusyGate {
    /// Create an open gate.
    pub const fn new() -> Self {
        Self {
            busy: Cell::new(false),
        }
    }

    /// Whether an operation currently holds the gate.
    #[inline]
    pub fn is_busy(&self) -> bool {
        self.busy.get()
    }

    /// Take the gate, or fail with [`AxisError::Busy`] if it is held.
    pub fn acquire(&self) -> Result<BusyGuard<'_>, AxisError> {
        if self.busy.replace(true) {
            return Err(AxisError::Busy);
        }
        Ok(BusyGuard { gate: self })
    }
}

/// Holds a [`BusyGate`] until dropped.
///
/// Dropping releases the gate on every exit path, including `?` returns.
#[derive(Debug)]
#[must_use = "the gate is released as soon as the guard is dropped"]
pub struct BusyGuard<'a> {
    gate: &'a BusyGate,
}

impl Drop for BusyGuard<'_> {
    fn drop(&mut self) {
        self.gate.busy.set(false);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_gate_is_exclusive() {
        let gate = BusyGate::new();
        assert!(!gate.is_busy());

        let guard = gate.acquire().unwrap();
        assert!(gate.is_busy());
        assert_eq!(gate.acquire().unwrap_err(), AxisError::Busy);
        assert!(gate.is_busy());

        drop(guard);
        assert!(!gate.is_busy());
        assert!(gate.acquire().is_ok());
    }

    #[test]
    fn test_guard_released_on_early_return() {
        fn failing(gate: &BusyGate) -> Result<(), AxisError> {
            let _guard = gate.acquire()?;
            Err(AxisError::NotHomed)
        }

        let gate = BusyGate::new();
        assert_eq!(failing(&gate), Err(AxisError::NotHomed));
        assert!(!gate.is_busy());
    }

    #[test]
    fn test_default_state() {
        assert_eq!(HomingState::default(), HomingState::Unhomed);
        assert_eq!(HomingState::Homed.name(), "Homed");
    }
}
