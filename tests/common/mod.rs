//! Test doubles shared by the integration tests.

#![allow(dead_code)]

use std::cell::{Cell, RefCell};
use std::collections::VecDeque;
use std::rc::Rc;

use axis_driver::{
    AxisConfig, AxisKind, Direction, EndstopSensor, HardwareError, Result, Seconds, StepActuator,
};

/// Shared record of every pulse an actuator emitted.
#[derive(Clone, Default)]
pub struct StepLog(Rc<RefCell<Vec<(Direction, f64)>>>);

impl StepLog {
    pub fn len(&self) -> usize {
        self.0.borrow().len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn pauses(&self) -> Vec<f64> {
        self.0.borrow().iter().map(|(_, p)| *p).collect()
    }

    pub fn directions(&self) -> Vec<Direction> {
        self.0.borrow().iter().map(|(d, _)| *d).collect()
    }

    pub fn clear(&self) {
        self.0.borrow_mut().clear();
    }
}

/// Actuator that records pulses and can fail on demand.
pub struct RecordingActuator {
    log: StepLog,
    fail_at: Option<usize>,
}

impl RecordingActuator {
    pub fn new(log: StepLog) -> Self {
        Self { log, fail_at: None }
    }

    /// Fail the pulse with index `pulse` (0-based, counted over the log).
    pub fn failing_at(log: StepLog, pulse: usize) -> Self {
        Self {
            log,
            fail_at: Some(pulse),
        }
    }
}

impl StepActuator for RecordingActuator {
    fn step(&mut self, direction: Direction, half_period: Seconds) -> Result<()> {
        if self.fail_at == Some(self.log.len()) {
            return Err(HardwareError::StepPin.into());
        }
        self.log.0.borrow_mut().push((direction, half_period.value()));
        Ok(())
    }
}

/// Endstop that replays a script of readings, then a fixed value.
pub struct ScriptedEndstop {
    readings: VecDeque<bool>,
    after: bool,
    samples: Rc<Cell<usize>>,
}

impl ScriptedEndstop {
    /// Reads untriggered `n - 1` times, then triggered on sample `n`.
    pub fn trigger_on(n: usize) -> Self {
        let mut readings: VecDeque<bool> = std::iter::repeat(false).take(n.saturating_sub(1)).collect();
        readings.push_back(true);
        Self {
            readings,
            after: true,
            samples: Rc::default(),
        }
    }

    /// Triggers on sample `n` only, then reads untriggered forever.
    pub fn trigger_once(n: usize) -> Self {
        Self {
            after: false,
            ..Self::trigger_on(n)
        }
    }

    /// Never triggers.
    pub fn never() -> Self {
        Self {
            readings: VecDeque::new(),
            after: false,
            samples: Rc::default(),
        }
    }

    /// Handle counting how many times the sensor was sampled.
    pub fn sample_count(&self) -> Rc<Cell<usize>> {
        Rc::clone(&self.samples)
    }
}

impl EndstopSensor for ScriptedEndstop {
    fn is_triggered(&mut self) -> Result<bool> {
        self.samples.set(self.samples.get() + 1);
        Ok(self.readings.pop_front().unwrap_or(self.after))
    }
}

/// Linear axis: 0..100 in steps of 1.0, three speed levels (1-3 ms).
pub fn linear_config() -> AxisConfig {
    AxisConfig {
        kind: AxisKind::Linear,
        dir_pin: 38,
        step_pin: 40,
        sensor_pin: Some(36),
        step_size: 1.0,
        min_step_period: Seconds(0.001),
        max_step_period: Seconds(0.003),
        delta_step_period: Seconds(0.001),
        min_coord: 0.0,
        max_coord: 100.0,
        invert_direction: false,
    }
}

/// Rotational axis: 0..360 degrees in steps of 1.8.
pub fn rotational_config() -> AxisConfig {
    AxisConfig {
        kind: AxisKind::Rotational,
        dir_pin: 11,
        step_pin: 13,
        sensor_pin: None,
        step_size: 1.8,
        min_step_period: Seconds(0.001),
        max_step_period: Seconds(0.005),
        delta_step_period: Seconds(0.001),
        min_coord: 0.0,
        max_coord: 360.0,
        invert_direction: false,
    }
}

pub fn assert_pauses(actual: &[f64], expected: &[f64]) {
    assert_eq!(actual.len(), expected.len(), "{:?} vs {:?}", actual, expected);
    for (a, e) in actual.iter().zip(expected) {
        assert!((a - e).abs() < 1e-9, "{:?} vs {:?}", actual, expected);
    }
}
