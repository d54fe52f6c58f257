// SPDX-License-Identifier: MIT
// © 2025–2026 Christopher Liu

//! Motor actuator contract.
//!
//! This is the only surface the motor state machine sees of the physical driver: a polarity
//! and a power fraction. How those become H-bridge levels and PWM duty is up to the driver.

use core::str::FromStr;

use crate::error::Error;

/// Commanded motor polarity.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum Direction {
    Forward,
    Reverse,
}

impl Direction {
    /// Console token for this direction.
    pub fn as_str(self) -> &'static str {
        match self {
            Direction::Forward => "fwd",
            Direction::Reverse => "rev",
        }
    }

    /// Numeric code reported when a direction is set (0 = forward, 1 = reverse).
    pub fn code(self) -> u8 {
        match self {
            Direction::Forward => 0,
            Direction::Reverse => 1,
        }
    }
}

impl FromStr for Direction {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Error> {
        match s {
            "fwd" => Ok(Direction::Forward),
            "rev" => Ok(Direction::Reverse),
            _ => Err(Error::InvalidArgument),
        }
    }
}

/// Capability to drive one motor channel.
///
/// Calls take effect immediately; implementations must not queue or reorder them.
pub trait MotorActuator {
    /// Select the bridge polarity.
    fn set_polarity(&mut self, direction: Direction);

    /// Set the drive level as a fraction of full scale, `0.0..=1.0`.
    fn set_power_fraction(&mut self, fraction: f32);
}

impl<A: MotorActuator + ?Sized> MotorActuator for &mut A {
    fn set_polarity(&mut self, direction: Direction) {
        (**self).set_polarity(direction);
    }

    fn set_power_fraction(&mut self, fraction: f32) {
        (**self).set_power_fraction(fraction);
    }
}

#[cfg(test)]
pub(crate) mod mock {
    use super::{Direction, MotorActuator};

    #[derive(Copy, Clone, Debug, PartialEq)]
    pub enum Call {
        Polarity(Direction),
        Power(f32),
    }

    /// Actuator that records every call in order.
    #[derive(Debug, Default)]
    pub struct Recorder {
        pub calls: Vec<Call>,
    }

    impl MotorActuator for Recorder {
        fn set_polarity(&mut self, direction: Direction) {
            self.calls.push(Call::Polarity(direction));
        }

        fn set_power_fraction(&mut self, fraction: f32) {
            self.calls.push(Call::Power(fraction));
        }
    }
}
