// SPDX-License-Identifier: MIT
// © 2025–2026 Christopher Liu

//! Arduino Motor Shield Rev3 (L298P) single-channel driver.
//!
//! Each shield channel is wired as direction + brake + PWM enable:
//!
//! | Signal | Channel A | Channel B | Function |
//! | ------ | --------- | --------- | -------- |
//! | DIR    | D12       | D13       | Bridge polarity (low = forward) |
//! | BRAKE  | D9        | D8        | Short brake when high |
//! | PWM    | D3        | D11       | Drive enable, duty = power |
//!
//! The brake is released on construction and left alone afterwards; stopping is done by
//! commanding zero duty so the motor coasts.

use embedded_hal::{digital::v2::OutputPin, PwmPin};

use crate::drivers::actuator::{Direction, MotorActuator};

pub struct MotorShield<Dir, Brake, Pwm> {
    dir: Dir,
    brake: Brake,
    pwm: Pwm,
}

impl<Dir, Brake, Pwm> MotorShield<Dir, Brake, Pwm>
where
    Dir: OutputPin,
    Brake: OutputPin,
    Pwm: PwmPin<Duty = u16>,
{
    /// Take over one shield channel, leaving it unpowered at forward polarity.
    pub fn new(dir: Dir, brake: Brake, pwm: Pwm) -> Self {
        let mut shield = Self { dir, brake, pwm };
        shield.pwm.set_duty(0);
        shield.pwm.enable();
        let _ = shield.brake.set_low();
        let _ = shield.dir.set_low();
        shield
    }
}

impl<Dir, Brake, Pwm> MotorActuator for MotorShield<Dir, Brake, Pwm>
where
    Dir: OutputPin,
    Brake: OutputPin,
    Pwm: PwmPin<Duty = u16>,
{
    fn set_polarity(&mut self, direction: Direction) {
        let _ = match direction {
            Direction::Forward => self.dir.set_low(),
            Direction::Reverse => self.dir.set_high(),
        };
    }

    fn set_power_fraction(&mut self, fraction: f32) {
        let fraction = fraction.clamp(0.0, 1.0);
        let max = self.pwm.get_max_duty();
        // Nearest count, not truncated.
        self.pwm.set_duty((fraction * max as f32 + 0.5) as u16);
    }
}
