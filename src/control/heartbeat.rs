// SPDX-License-Identifier: MIT
// © 2025–2026 Christopher Liu

//! Liveness blink driven from the periodic ticker.

use embedded_hal::digital::v2::OutputPin;

use crate::hw::led::Led;

pub struct Heartbeat<PIN: OutputPin> {
    led: Led<PIN>,
}

impl<PIN: OutputPin> Heartbeat<PIN> {
    pub fn new(led: Led<PIN>) -> Self {
        Self { led }
    }

    /// Called once per ticker period. Never blocks.
    #[inline]
    pub fn on_tick(&mut self) {
        self.led.toggle();
    }

    pub fn led(&self) -> &Led<PIN> {
        &self.led
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::hw::led::mock::MockPin;

    #[test]
    fn blinks_once_per_two_ticks() {
        let mut hb = Heartbeat::new(Led::active_high(MockPin::default()));
        let seen: Vec<bool> = (0..4)
            .map(|_| {
                hb.on_tick();
                hb.led().is_on()
            })
            .collect();
        assert_eq!(seen, [true, false, true, false]);
    }
}
