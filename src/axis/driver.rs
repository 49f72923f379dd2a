//! Single-axis stepper driver.
//!
//! Generic over the step actuator and endstop collaborators.

use core::cell::{Cell, RefCell};

use crate::config::units::floor_count;
use crate::config::{validate_axis, AxisConfig, AxisKind, StepTiming, TravelLimits};
use crate::error::{AxisError, ConfigError, Error, Result};
use crate::hal::{EndstopSensor, NoEndstop, StepActuator};
use crate::motion::{Direction, PlanExecutor, StepPlan};

use super::position::Position;
use super::state::{BusyGate, BusyGuard, HomingState};

/// Snapshot of the axis for periodic status reports.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AxisStatus {
    /// Whether homing has completed.
    pub homing_done: bool,
    /// Current coordinate, `None` until homed.
    pub current_coord: Option<f64>,
    /// Whether an operation is in flight or the axis is claimed.
    pub busy: bool,
}

/// Exclusive claim on an axis held by an outer layer.
///
/// While the claim lives, `homing` and `move_to` fail with
/// [`AxisError::Busy`].
#[derive(Debug)]
pub struct AxisClaim<'a> {
    _guard: BusyGuard<'a>,
}

struct Hardware<A, E> {
    actuator: A,
    endstop: Option<E>,
}

/// Stepper driver for one linear or rotational axis.
///
/// Generic over:
/// - `A`: step pulse generator (must implement [`StepActuator`])
/// - `E`: endstop sensor (must implement [`EndstopSensor`]); rotational axes
///   use the default [`NoEndstop`]
///
/// All operations take `&self` and block until done. State lives in cells,
/// so the driver is `!Sync`: one caller at a time, enforced by the busy gate
/// at runtime and by the compiler across threads.
pub struct AxisDriver<A, E = NoEndstop>
where
    A: StepActuator,
    E: EndstopSensor,
{
    /// Validated configuration.
    config: AxisConfig,

    /// Speed levels for the step planner.
    timing: StepTiming,

    /// Coordinate range accepted by `move_to`.
    limits: TravelLimits,

    /// Maximum pulses issued while seeking the endstop.
    homing_budget: u32,

    /// Collaborators, borrowed for the duration of one operation.
    hardware: RefCell<Hardware<A, E>>,

    /// Position relative to the homing origin.
    position: Cell<Position>,

    /// Homing progress.
    homing: Cell<HomingState>,

    /// Exclusivity gate for homing and moves.
    gate: BusyGate,
}

impl<A, E> AxisDriver<A, E>
where
    A: StepActuator,
    E: EndstopSensor,
{
    /// Create a driver from a configuration and its collaborators.
    ///
    /// # Errors
    ///
    /// Returns a [`ConfigError`] if the configuration fails validation
    /// (including pin collisions) or a linear axis has no endstop.
    pub fn new(config: AxisConfig, actuator: A, endstop: Option<E>) -> Result<Self> {
        validate_axis(&config)?;

        if config.kind.needs_endstop() && endstop.is_none() {
            return Err(Error::Config(ConfigError::MissingEndstop));
        }

        let timing = StepTiming::from_config(&config);
        let limits = TravelLimits::new(config.min_coord, config.max_coord);
        let homing_budget = floor_count(limits.span() / config.step_size);

        info!(
            "axis ready: {:?}, {} speed levels, homing budget {} steps",
            config.kind,
            timing.intervals,
            homing_budget
        );

        Ok(Self {
            position: Cell::new(Position::new(config.min_coord, config.step_size)),
            config,
            timing,
            limits,
            homing_budget,
            hardware: RefCell::new(Hardware { actuator, endstop }),
            homing: Cell::new(HomingState::Unhomed),
            gate: BusyGate::new(),
        })
    }

    /// Get the configuration.
    #[inline]
    pub fn config(&self) -> &AxisConfig {
        &self.config
    }

    /// Linear or rotational.
    #[inline]
    pub fn kind(&self) -> AxisKind {
        self.config.kind
    }

    /// Get the derived step timing.
    #[inline]
    pub fn timing(&self) -> &StepTiming {
        &self.timing
    }

    /// Number of discrete speed levels.
    #[inline]
    pub fn step_intervals(&self) -> u32 {
        self.timing.intervals
    }

    /// Pulses linear homing may issue before declaring a fault.
    #[inline]
    pub fn homing_budget(&self) -> u32 {
        self.homing_budget
    }

    /// Current homing state.
    #[inline]
    pub fn homing_state(&self) -> HomingState {
        self.homing.get()
    }

    /// Whether homing has completed.
    #[inline]
    pub fn homing_done(&self) -> bool {
        self.homing.get() == HomingState::Homed
    }

    /// Whether an operation holds the axis.
    #[inline]
    pub fn is_busy(&self) -> bool {
        self.gate.is_busy()
    }

    /// Current coordinate, or `None` until homing completes.
    pub fn current_coord(&self) -> Option<f64> {
        if self.homing_done() {
            Some(self.position.get().coord())
        } else {
            None
        }
    }

    /// Status snapshot for publishing.
    pub fn status(&self) -> AxisStatus {
        AxisStatus {
            homing_done: self.homing_done(),
            current_coord: self.current_coord(),
            busy: self.is_busy(),
        }
    }

    /// Step plan this axis would use for `pulses` pulses.
    pub fn plan_for(&self, pulses: u32) -> StepPlan {
        StepPlan::new(pulses, &self.timing)
    }

    /// Step plan a move to `target` would run from the current position.
    ///
    /// `None` when the move would be rejected as not homed or out of bounds.
    pub fn plan_to(&self, target: f64) -> Option<StepPlan> {
        if !self.homing_done() || self.limits.check(target).is_err() {
            return None;
        }
        Some(self.plan_for(self.position.get().pulses_to(target)))
    }

    /// Claim the axis without moving it.
    ///
    /// # Errors
    ///
    /// Returns [`AxisError::Busy`] if an operation or another claim holds it.
    pub fn claim(&self) -> Result<AxisClaim<'_>> {
        let guard = self.gate.acquire()?;
        Ok(AxisClaim { _guard: guard })
    }

    /// Establish the coordinate origin.
    ///
    /// Rotational axes are homed immediately. Linear axes step toward
    /// `min_coord` at the slowest speed, sampling the endstop after every
    /// pulse, until it triggers.
    ///
    /// # Errors
    ///
    /// - [`AxisError::Busy`] if another operation holds the axis.
    /// - [`AxisError::HomingFault`] if the endstop never triggers within
    ///   [`homing_budget`](Self::homing_budget) pulses. The axis is left
    ///   unhomed.
    /// - Hardware errors from the collaborators; the axis is left unhomed.
    pub fn homing(&self) -> Result<()> {
        let _guard = self.gate.acquire().map_err(|e| {
            warn!("homing rejected: axis busy");
            e
        })?;

        self.homing.set(HomingState::Homing);
        info!("homing {:?} axis", self.config.kind);

        let result = match self.config.kind {
            AxisKind::Rotational => Ok(0),
            AxisKind::Linear => self.seek_endstop(),
        };

        match result {
            Ok(steps) => {
                let mut position = self.position.get();
                position.set_origin();
                self.position.set(position);
                self.homing.set(HomingState::Homed);
                info!("homing done after {} steps, at {}", steps, position.coord());
                Ok(())
            }
            Err(e) => {
                self.homing.set(HomingState::Unhomed);
                error!("homing failed after up to {} steps", self.homing_budget);
                Err(e)
            }
        }
    }

    /// Move to an absolute coordinate and block until the last pulse.
    ///
    /// The distance is quantized down to whole steps. The position is
    /// updated after every pulse, so a hardware error mid-move leaves
    /// [`current_coord`](Self::current_coord) matching the pulses issued.
    ///
    /// # Errors
    ///
    /// - [`AxisError::Busy`] if another operation holds the axis.
    /// - [`AxisError::NotHomed`] before homing completes.
    /// - [`AxisError::OutOfBounds`] if `target` is outside
    ///   `[min_coord, max_coord]`. No pulse is issued.
    /// - Hardware errors from the actuator.
    pub fn move_to(&self, target: f64) -> Result<()> {
        let _guard = self.gate.acquire().map_err(|e| {
            warn!("move to {} rejected: axis busy", target);
            e
        })?;

        if !self.homing_done() {
            warn!("move to {} rejected: axis not homed", target);
            return Err(Error::Axis(AxisError::NotHomed));
        }

        if let Err(e) = self.limits.check(target) {
            warn!(
                "move to {} rejected: outside [{}, {}]",
                target,
                self.limits.min,
                self.limits.max
            );
            return Err(Error::Axis(e));
        }

        let mut position = self.position.get();
        let direction = Direction::from_delta(position.delta_to(target));
        let plan = StepPlan::new(position.pulses_to(target), &self.timing);

        debug!(
            "move {} -> {}: {} pulses {:?}",
            position.coord(),
            target,
            plan.len(),
            direction
        );

        let mut hardware = self
            .hardware
            .try_borrow_mut()
            .map_err(|_| Error::Axis(AxisError::Busy))?;

        let mut executor = PlanExecutor::new(plan);
        loop {
            let phase = executor.phase();
            let issued = executor.current_step();
            let Some(pause) = executor.next() else {
                break;
            };

            if let Err(e) = hardware.actuator.step(direction, pause) {
                error!(
                    "move aborted while {:?} after {} of {} pulses",
                    phase,
                    issued,
                    executor.total_steps()
                );
                return Err(e);
            }
            position.move_steps(direction.sign());
            self.position.set(position);
        }

        debug!("move done at {}", position.coord());
        Ok(())
    }

    /// Give the collaborators back.
    pub fn release(self) -> (A, Option<E>) {
        let hardware = self.hardware.into_inner();
        (hardware.actuator, hardware.endstop)
    }

    /// Step toward the endstop until it triggers. Returns pulses issued.
    fn seek_endstop(&self) -> Result<u32> {
        let mut hardware = self
            .hardware
            .try_borrow_mut()
            .map_err(|_| Error::Axis(AxisError::Busy))?;
        let Hardware { actuator, endstop } = &mut *hardware;
        let endstop = endstop
            .as_mut()
            .ok_or(Error::Config(ConfigError::MissingEndstop))?;

        let pause = self.timing.max_period;
        for issued in 1..=self.homing_budget {
            actuator.step(Direction::Negative, pause)?;
            if endstop.is_triggered()? {
                return Ok(issued);
            }
        }

        Err(Error::Axis(AxisError::HomingFault {
            steps: self.homing_budget,
        }))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Seconds;

    #[derive(Default)]
    struct CountingActuator {
        steps: u32,
    }

    impl StepActuator for CountingActuator {
        fn step(&mut self, _direction: Direction, _half_period: Seconds) -> Result<()> {
            self.steps += 1;
            Ok(())
        }
    }

    struct TriggerAfter(u32);

    impl EndstopSensor for TriggerAfter {
        fn is_triggered(&mut self) -> Result<bool> {
            self.0 = self.0.saturating_sub(1);
            Ok(self.0 == 0)
        }
    }

    fn config(kind: AxisKind) -> AxisConfig {
        AxisConfig {
            kind,
            dir_pin: 38,
            step_pin: 40,
            sensor_pin: Some(36),
            step_size: 0.5,
            min_step_period: Seconds(0.001),
            max_step_period: Seconds(0.003),
            delta_step_period: Seconds(0.001),
            min_coord: 0.0,
            max_coord: 50.0,
            invert_direction: false,
        }
    }

    #[test]
    fn test_linear_requires_endstop() {
        let result = AxisDriver::<_, NoEndstop>::new(
            config(AxisKind::Linear),
            CountingActuator::default(),
            None,
        );
        assert!(matches!(
            result,
            Err(Error::Config(ConfigError::MissingEndstop))
        ));
    }

    #[test]
    fn test_derived_values() {
        let driver = AxisDriver::new(
            config(AxisKind::Linear),
            CountingActuator::default(),
            Some(TriggerAfter(3)),
        )
        .unwrap();

        assert_eq!(driver.step_intervals(), 3);
        assert_eq!(driver.homing_budget(), 100);
        assert_eq!(driver.current_coord(), None);
        assert_eq!(driver.homing_state(), HomingState::Unhomed);
    }

    #[test]
    fn test_linear_homing_counts_pulses() {
        let driver = AxisDriver::new(
            config(AxisKind::Linear),
            CountingActuator::default(),
            Some(TriggerAfter(7)),
        )
        .unwrap();

        driver.homing().unwrap();
        assert!(driver.homing_done());
        assert_eq!(driver.current_coord(), Some(0.0));

        let (actuator, _) = driver.release();
        assert_eq!(actuator.steps, 7);
    }

    #[test]
    fn test_claim_blocks_operations() {
        let driver = AxisDriver::<_, NoEndstop>::new(
            config(AxisKind::Rotational),
            CountingActuator::default(),
            None,
        )
        .unwrap();

        let claim = driver.claim().unwrap();
        assert!(driver.is_busy());
        assert_eq!(driver.homing(), Err(Error::Axis(AxisError::Busy)));
        assert_eq!(driver.move_to(1.0), Err(Error::Axis(AxisError::Busy)));
        drop(claim);

        assert!(!driver.is_busy());
        driver.homing().unwrap();
        driver.move_to(10.0).unwrap();
        assert_eq!(driver.status().current_coord, Some(10.0));

        let (actuator, _) = driver.release();
        assert_eq!(actuator.steps, 20);
    }

    #[test]
    fn test_plan_to() {
        let driver = AxisDriver::<_, NoEndstop>::new(
            config(AxisKind::Rotational),
            CountingActuator::default(),
            None,
        )
        .unwrap();

        assert!(driver.plan_to(5.0).is_none());
        driver.homing().unwrap();

        let plan = driver.plan_to(5.0).unwrap();
        assert_eq!(plan.len(), 10);
        assert!(plan.is_trapezoidal());
        assert!(driver.plan_to(50.5).is_none());
    }
}
