// SPDX-License-Identifier: MIT
// © 2025–2026 Christopher Liu

//! # Motor State and Periodic Tasks
//!
//! ## Modules
//!
//! - [`motor_state`] - Commanded power/direction and the safe reversal sequence.
//! - [`heartbeat`] - Liveness LED toggled from the periodic ticker.

pub mod heartbeat;
pub mod motor_state;

pub use heartbeat::Heartbeat;
pub use motor_state::MotorState;
