//! Home a linear axis and run a few moves.
//!
//! Demonstrates building an axis from TOML configuration, homing against an
//! endstop and inspecting step plans before moving.
//!
//! The pins are simulated, so this runs without hardware.

use axis_driver::{parse_config, AxisDriverBuilder, PinEndstop, PulseActuator};

const CONFIG: &str = r#"
[axes.x]
kind = "linear"
dir_pin = 38
step_pin = 40
sensor_pin = 36
step_size = 0.5
min_step_period = 0.0002
max_step_period = 0.001
delta_step_period = 0.0002
min_coord = 0.0
max_coord = 200.0
"#;

/// Delay provider backed by the OS scheduler.
struct ThreadDelay;

impl embedded_hal::delay::DelayNs for ThreadDelay {
    fn delay_ns(&mut self, ns: u32) {
        // On hardware this would be a timer
        std::thread::sleep(std::time::Duration::from_nanos(u64::from(ns)));
    }
}

/// Output pin that only remembers its level.
struct SimPin {
    high: bool,
}

impl embedded_hal::digital::ErrorType for SimPin {
    type Error = core::convert::Infallible;
}

impl embedded_hal::digital::OutputPin for SimPin {
    fn set_high(&mut self) -> Result<(), Self::Error> {
        self.high = true;
        Ok(())
    }

    fn set_low(&mut self) -> Result<(), Self::Error> {
        self.high = false;
        Ok(())
    }
}

/// Active-low endstop that closes after a fixed number of reads.
struct SimEndstop {
    reads_until_closed: u32,
}

impl embedded_hal::digital::ErrorType for SimEndstop {
    type Error = core::convert::Infallible;
}

impl embedded_hal::digital::InputPin for SimEndstop {
    fn is_high(&mut self) -> Result<bool, Self::Error> {
        self.reads_until_closed = self.reads_until_closed.saturating_sub(1);
        Ok(self.reads_until_closed > 0)
    }

    fn is_low(&mut self) -> Result<bool, Self::Error> {
        self.is_high().map(|high| !high)
    }
}

fn main() -> Result<(), axis_driver::Error> {
    println!("=== Home and Move Example ===\n");

    let config = parse_config(CONFIG)?;
    let axis_config = config.axis("x").ok_or(axis_driver::Error::Config(
        axis_driver::ConfigError::MissingField("axes.x"),
    ))?;

    let actuator = PulseActuator::from_config(
        SimPin { high: false },
        SimPin { high: false },
        ThreadDelay,
        axis_config,
    );

    let axis = AxisDriverBuilder::new()
        .from_config(&config, "x")?
        .actuator(actuator)
        .endstop(PinEndstop::active_low(SimEndstop {
            reads_until_closed: 40,
        }))
        .build()?;

    println!("Speed levels: {}", axis.step_intervals());
    println!("Homing budget: {} steps", axis.homing_budget());
    println!("State: {}", axis.homing_state().name());

    axis.homing()?;
    println!("Homed at {:?}\n", axis.current_coord());

    for target in [25.0, 1.5, 120.25, 0.0] {
        if let Some(plan) = axis.plan_to(target) {
            println!(
                "Move to {:>7.2}: {:>3} pulses ({} accel, {} cruise, {} decel), {:.4} s",
                target,
                plan.len(),
                plan.accel_steps,
                plan.cruise_steps,
                plan.decel_steps,
                plan.total_duration().value()
            );
        }

        axis.move_to(target)?;
        println!("  now at {:?}", axis.current_coord());
    }

    match axis.move_to(500.0) {
        Err(e) => println!("\nRejected: {}", e),
        Ok(()) => println!("\nUnexpected: move beyond travel accepted"),
    }

    println!("\nStatus: {:?}", axis.status());
    Ok(())
}
