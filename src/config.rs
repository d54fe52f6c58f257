// SPDX-License-Identifier: MIT
// © 2025–2026 Christopher Liu

//! Compile-time configuration for the motor console.

/// Console baud rate on USART3 (ST-LINK virtual COM port).
pub const BAUD_RATE: u32 = 9_600;

/// Printed once the board is up and the motor is in its idle state.
pub const BANNER: &str = "AVC Test Device Ready";

/// Longest command line accepted by the console, excluding the terminator.
pub const MAX_LINE_LEN: usize = 128;

/// Heartbeat LED toggle period.
pub const HEARTBEAT_PERIOD_MS: u32 = 250;

/// Motor shield PWM carrier frequency.
pub const PWM_FREQ_HZ: u32 = 20_000;

/// Tick rate of the free-running tachometer stopwatch (1 tick = 1 ms).
pub const STOPWATCH_TICK_HZ: u32 = 1_000;

/// Milliseconds per minute, numerator of the RPM conversion.
pub const MS_PER_MINUTE: u32 = 60_000;
