// SPDX-License-Identifier: MIT
// © 2025–2026 Christopher Liu

//! Periodic SysTick exception.
//!
//! SysTick is clocked from HCLK/8 so that a few hundred milliseconds still fit its 24-bit
//! reload register at full core speed. The handler itself is the `SysTick` exception in
//! `main.rs`; this type only programs the period and owns the peripheral.

use cortex_m::peripheral::{syst::SystClkSource, SYST};

const RELOAD_MAX: u32 = 0x00FF_FFFF;

/// Requested period does not fit the 24-bit reload register.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub struct PeriodOutOfRange {
    pub period_ms: u32,
}

/// Keeps SYST claimed while the ticker runs.
pub struct Ticker {
    _syst: SYST,
}

impl Ticker {
    /// Start SysTick firing every `period_ms`, with its exception enabled.
    ///
    /// `hclk_hz` is the AHB clock (`clocks.hclk()`).
    pub fn start(mut syst: SYST, hclk_hz: u32, period_ms: u32) -> Result<Self, PeriodOutOfRange> {
        let ticks = (hclk_hz as u64 / 8) * period_ms as u64 / 1_000;
        let reload = ticks
            .checked_sub(1)
            .filter(|r| *r >= 1 && *r <= RELOAD_MAX as u64)
            .ok_or(PeriodOutOfRange { period_ms })? as u32;

        syst.disable_counter();
        syst.set_clock_source(SystClkSource::External);
        syst.set_reload(reload);
        syst.clear_current();
        syst.enable_interrupt();
        syst.enable_counter();

        Ok(Self { _syst: syst })
    }
}
