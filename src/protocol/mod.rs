// SPDX-License-Identifier: MIT
// © 2025–2026 Christopher Liu

//! Line-oriented serial command protocol.

pub mod commands;
pub mod console;
pub mod dispatcher;

pub use commands::{Command, CommandEntry, COMMAND_TABLE};
pub use console::{CharStream, LineBuffer};
pub use dispatcher::{Dispatcher, Reply};
