// SPDX-License-Identifier: MIT
// © 2025–2026 Christopher Liu

//! Free-running millisecond stopwatch on TIM2.
//!
//! TIM2 is 32 bits wide, so at 1 kHz it wraps after ~49.7 days; `elapsed_ms` is only ever
//! compared against the last reset, which keeps wrap harmless.

use stm32f7xx_hal::pac;

use crate::config::STOPWATCH_TICK_HZ;
use crate::drivers::FreeRunningTimer;

/// The timer clock cannot be divided down to 1 kHz with a 16-bit prescaler.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub struct PrescalerOutOfRange {
    pub timclk_hz: u32,
}

pub struct Stopwatch {
    tim: pac::TIM2,
}

impl Stopwatch {
    /// Configure TIM2 as an up-counter ticking once per millisecond.
    ///
    /// `timclk_hz` is the APB1 timer clock (`clocks.timclk1()`).
    pub fn tim2(tim2: pac::TIM2, timclk_hz: u32) -> Result<Self, PrescalerOutOfRange> {
        let psc = (timclk_hz / STOPWATCH_TICK_HZ)
            .checked_sub(1)
            .filter(|psc| *psc <= 0xFFFF)
            .ok_or(PrescalerOutOfRange { timclk_hz })?;

        let rcc = unsafe { &*pac::RCC::ptr() };
        rcc.apb1enr.modify(|_, w| w.tim2en().set_bit());

        let tim = tim2;

        // Disable counter while configuring
        tim.cr1.modify(|_, w| w.cen().clear_bit());

        tim.psc.write(|w| unsafe { w.bits(psc) });

        // Auto-reload: max 32-bit
        tim.arr.write(|w| unsafe { w.bits(0xFFFF_FFFF) });

        // Load the prescaler now rather than at the first overflow
        tim.egr.write(|w| w.ug().set_bit());

        // Reset the counter
        tim.cnt.write(|w| unsafe { w.bits(0) });

        // Enable the counter
        tim.cr1.modify(|_, w| w.cen().set_bit());

        Ok(Self { tim })
    }
}

impl FreeRunningTimer for Stopwatch {
    #[inline]
    fn elapsed_ms(&self) -> u32 {
        self.tim.cnt.read().bits()
    }

    #[inline]
    fn reset(&mut self) {
        self.tim.cnt.write(|w| unsafe { w.bits(0) });
    }
}
