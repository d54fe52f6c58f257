// SPDX-License-Identifier: MIT
// © 2025–2026 Christopher Liu

//! MCU-level wrappers.
//!
//! `led` is generic over embedded-hal pins and builds everywhere. The rest talk to STM32F7
//! registers and only exist on the bare-metal target.

pub mod led;

#[cfg(target_os = "none")]
pub mod edge;
#[cfg(target_os = "none")]
pub mod pins;
#[cfg(target_os = "none")]
pub mod pwm;
#[cfg(target_os = "none")]
pub mod stopwatch;
#[cfg(target_os = "none")]
pub mod ticker;
#[cfg(target_os = "none")]
pub mod usart;

pub use led::Led;

#[cfg(target_os = "none")]
pub use edge::EdgeInput;
#[cfg(target_os = "none")]
pub use pwm::Tim1Ch3Pwm;
#[cfg(target_os = "none")]
pub use stopwatch::Stopwatch;
#[cfg(target_os = "none")]
pub use ticker::Ticker;
#[cfg(target_os = "none")]
pub use usart::Usart;
