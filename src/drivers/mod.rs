// SPDX-License-Identifier: MIT
// © 2025–2026 Christopher Liu

//! # Device-Specific Drivers
//!
//! This module contains device-specific drivers that sit above the raw `hw/` layer and below the
//! application logic.
//!
//! ## Existing drivers
//!
//! - [`actuator`] – `MotorActuator` contract and `Direction`
//! - [`motor_shield`] – Arduino Motor Shield Rev3 channel (DIR + BRAKE + PWM)
//! - [`tachometer`] – One-pulse-per-revolution period capture and RPM readout

pub mod actuator;
pub mod motor_shield;
pub mod tachometer;

pub use actuator::{Direction, MotorActuator};
pub use motor_shield::MotorShield;
pub use tachometer::{FreeRunningTimer, IntervalCell, TachometerCapture};
