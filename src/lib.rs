// SPDX-License-Identifier: MIT
// © 2025–2026 Christopher Liu

//! # Motor Console Firmware
//!
//! Serial-console DC motor controller for an STM32F767ZI Nucleo-144 carrying an Arduino Motor
//! Shield Rev3. Line commands set power and direction on shield channel A; a one-pulse-per-rev
//! tachometer on an EXTI line provides the speed readout.
//!
//! ## Crate Structure
//!
//! | Module | Purpose |
//! | ------ | -------- |
//! | [`hw`] | MCU-level wrappers around USART, PWM, timers, EXTI, LEDs |
//! | [`drivers`] | Device-level drivers (motor shield, tachometer) |
//! | [`control`] | Motor state machine and heartbeat |
//! | [`protocol`] | Command table, dispatcher and line buffer |
//! | [`app`] | Console loop tying the above together |
//!
//! ## Execution contexts
//!
//! - Thread mode runs [`app::App`]: line assembly, dispatch, all motor writes.
//! - The EXTI ISR runs [`drivers::TachometerCapture`] and is the only writer of the shared
//!   [`drivers::IntervalCell`].
//! - The SysTick exception runs [`control::Heartbeat`].
//!
//! ## Getting Started
//!
//! Run the host tests:
//!
//! ```bash
//! cargo test
//! cargo test --features quiet-unknown
//! ```
//!
//! Unknown-command handling differs between the two builds, so run both.
//!
//! Flash the board:
//!
//! ```bash
//! cargo run --release --target thumbv7em-none-eabihf
//! ```
//!
//! ## License
//!
//! Licensed under the **MIT License**.
//! See the `LICENSE` file in the repository root for full terms.
//!
//! © 2025–2026 Christopher Liu

#![cfg_attr(not(test), no_std)]

pub mod app;
pub mod config;
pub mod control;
pub mod drivers;
pub mod error;
pub mod hw;
pub mod protocol;

pub use error::{Error, Result};
