// SPDX-License-Identifier: MIT
// © 2025–2026 Christopher Liu

//! Tachometer period capture.
//!
//! One pulse per shaft revolution arrives on an EXTI line. The rising edge closes the current
//! period and opens the next one; the falling edge only clears the activity LED.
//!
//! The measured period is the only state shared between interrupt and thread context. It lives
//! in an [`IntervalCell`], written exclusively by [`TachometerCapture::on_rising_edge`] and read
//! by the command handlers. Readers get the last completed period, which may be one
//! revolution stale; no critical section is taken.

use core::sync::atomic::{AtomicU32, Ordering};

use embedded_hal::digital::v2::OutputPin;

use crate::config::MS_PER_MINUTE;
use crate::error::{Error, Result};
use crate::hw::led::Led;

/// Free-running millisecond timer the capture measures periods against.
pub trait FreeRunningTimer {
    /// Milliseconds since the last `reset`, wrapping at `u32::MAX`.
    fn elapsed_ms(&self) -> u32;

    /// Restart counting from zero.
    fn reset(&mut self);
}

/// Last completed tachometer period, in milliseconds.
///
/// Single writer (rising-edge ISR), single reader (command dispatch). A `u32` is one machine
/// word on Cortex-M, so plain atomic loads and stores are enough.
pub struct IntervalCell {
    ms: AtomicU32,
}

impl IntervalCell {
    /// No period has been captured yet.
    const UNSET: u32 = u32::MAX;

    pub const fn new() -> Self {
        Self {
            ms: AtomicU32::new(Self::UNSET),
        }
    }

    /// Publish a freshly measured period. Interrupt context only.
    #[inline]
    pub fn write(&self, ms: u32) {
        // Keep a real measurement from aliasing the sentinel.
        self.ms.store(ms.min(Self::UNSET - 1), Ordering::Release);
    }

    /// Last published period, or `None` before the first one.
    #[inline]
    pub fn read(&self) -> Option<u32> {
        match self.ms.load(Ordering::Acquire) {
            Self::UNSET => None,
            ms => Some(ms),
        }
    }

    /// Shaft speed derived from the last period, one pulse per revolution.
    pub fn read_speed(&self) -> Result<u32> {
        match self.read() {
            None | Some(0) => Err(Error::NoSignal),
            Some(ms) => Ok(MS_PER_MINUTE / ms),
        }
    }
}

impl Default for IntervalCell {
    fn default() -> Self {
        Self::new()
    }
}

/// ISR-side half of the tachometer: stopwatch plus activity LED.
pub struct TachometerCapture<'a, T, PIN>
where
    T: FreeRunningTimer,
    PIN: OutputPin,
{
    interval: &'a IntervalCell,
    timer: T,
    led: Led<PIN>,
    armed: bool,
}

impl<'a, T, PIN> TachometerCapture<'a, T, PIN>
where
    T: FreeRunningTimer,
    PIN: OutputPin,
{
    pub fn new(interval: &'a IntervalCell, timer: T, led: Led<PIN>) -> Self {
        Self {
            interval,
            timer,
            led,
            armed: false,
        }
    }

    /// Rising edge: close the running period, publish it and restart the stopwatch.
    ///
    /// The first edge after reset has no previous edge to measure from, so it only arms.
    pub fn on_rising_edge(&mut self) {
        let elapsed = self.timer.elapsed_ms();
        self.timer.reset();
        if self.armed {
            self.interval.write(elapsed);
        }
        self.armed = true;
        self.led.on();
    }

    /// Falling edge: indicator only.
    #[inline]
    pub fn on_falling_edge(&mut self) {
        self.led.off();
    }

    pub fn led(&self) -> &Led<PIN> {
        &self.led
    }
}
