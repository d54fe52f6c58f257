// SPDX-License-Identifier: MIT
// © 2025–2026 Christopher Liu

//! Indicator LED on any push-pull output.
//!
//! The tachometer and heartbeat LEDs are both driven through this wrapper. It remembers the
//! logical state so `toggle` never has to read the pin back, which keeps it usable from ISRs.

use embedded_hal::digital::v2::OutputPin;

/// Whether the LED lights when the pin is driven high or low.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum ActiveLevel {
    High,
    Low,
}

pub struct Led<PIN: OutputPin> {
    pin: PIN,
    active: ActiveLevel,
    lit: bool,
}

impl<PIN: OutputPin> Led<PIN> {
    /// Wrap `pin`, starting dark.
    pub fn new(pin: PIN, active: ActiveLevel) -> Self {
        let mut led = Self {
            pin,
            active,
            lit: false,
        };
        led.set(false);
        led
    }

    pub fn active_high(pin: PIN) -> Self {
        Self::new(pin, ActiveLevel::High)
    }

    pub fn active_low(pin: PIN) -> Self {
        Self::new(pin, ActiveLevel::Low)
    }

    /// Drive the LED logically on (`true`) or off (`false`).
    pub fn set(&mut self, lit: bool) {
        let drive_high = lit == (self.active == ActiveLevel::High);
        // GPIO writes on this MCU are infallible; a failing pin only costs the indicator.
        let _ = if drive_high {
            self.pin.set_high()
        } else {
            self.pin.set_low()
        };
        self.lit = lit;
    }

    #[inline]
    pub fn on(&mut self) {
        self.set(true);
    }

    #[inline]
    pub fn off(&mut self) {
        self.set(false);
    }

    #[inline]
    pub fn toggle(&mut self) {
        self.set(!self.lit);
    }

    #[inline]
    pub fn is_on(&self) -> bool {
        self.lit
    }
}

#[cfg(test)]
pub(crate) mod mock {
    use core::convert::Infallible;
    use embedded_hal::digital::v2::OutputPin;

    /// Output pin that only remembers its level.
    #[derive(Debug, Default)]
    pub struct MockPin {
        pub high: bool,
        pub writes: usize,
    }

    impl OutputPin for MockPin {
        type Error = Infallible;

        fn set_low(&mut self) -> Result<(), Infallible> {
            self.high = false;
            self.writes += 1;
            Ok(())
        }

        fn set_high(&mut self) -> Result<(), Infallible> {
            self.high = true;
            self.writes += 1;
            Ok(())
        }
    }
}
