// SPDX-License-Identifier: MIT
// © 2025–2026 Christopher Liu

//! Commanded motor state and the direction-change sequence.
//!
//! `MotorState` owns the actuator and is the only thing allowed to drive it. It is touched only
//! from the command-dispatch context, never from an ISR.
//!
//! Reversing under power is what damages the bridge, so a polarity change always runs:
//!
//! 1. power to exactly `0.0` at the old polarity
//! 2. store the new direction
//! 3. switch polarity
//! 4. reapply the stored power at the new polarity

use crate::drivers::actuator::{Direction, MotorActuator};
use crate::error::{Error, Result};

/// Largest accepted power percentage.
pub const MAX_POWER: u8 = 100;

pub struct MotorState<A: MotorActuator> {
    actuator: A,
    power: u8,
    direction: Direction,
}

impl<A: MotorActuator> MotorState<A> {
    /// Take ownership of the actuator and put it into the idle state: forward, zero power.
    pub fn new(mut actuator: A) -> Self {
        actuator.set_polarity(Direction::Forward);
        actuator.set_power_fraction(0.0);
        Self {
            actuator,
            power: 0,
            direction: Direction::Forward,
        }
    }

    /// Commanded power, percent.
    #[inline]
    pub fn power(&self) -> u8 {
        self.power
    }

    #[inline]
    pub fn direction(&self) -> Direction {
        self.direction
    }

    /// Parse and apply a power percentage from a console argument.
    pub fn set_power(&mut self, arg: &str) -> Result<u8> {
        let power = arg.parse::<u8>().map_err(|_| Error::InvalidArgument)?;
        self.apply_power(power)?;
        Ok(power)
    }

    /// Store `power` and drive it at the current polarity.
    pub fn apply_power(&mut self, power: u8) -> Result<()> {
        if power > MAX_POWER {
            return Err(Error::InvalidArgument);
        }
        self.power = power;
        self.actuator.set_power_fraction(self.fraction());
        Ok(())
    }

    /// Parse and apply a direction token (`fwd` / `rev`) from a console argument.
    ///
    /// A bad token leaves the state and the actuator untouched.
    pub fn set_direction(&mut self, arg: &str) -> Result<Direction> {
        let direction = arg.parse::<Direction>()?;
        self.change_direction(direction);
        Ok(direction)
    }

    /// Switch to `direction`, cutting power for the polarity flip if it actually changes.
    ///
    /// Requesting the current direction just reasserts polarity and power.
    pub fn change_direction(&mut self, direction: Direction) {
        if direction != self.direction {
            self.actuator.set_power_fraction(0.0);
        }
        self.direction = direction;
        self.actuator.set_polarity(direction);
        self.actuator.set_power_fraction(self.fraction());
    }

    #[inline]
    fn fraction(&self) -> f32 {
        self.power as f32 / MAX_POWER as f32
    }

    pub fn actuator(&self) -> &A {
        &self.actuator
    }
}
