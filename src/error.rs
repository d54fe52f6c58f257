// SPDX-License-Identifier: MIT
// © 2025–2026 Christopher Liu

//! Error type shared by the command handlers and the console loop.
//!
//! Nothing here is fatal: every variant is rendered back to the console as a one-line reply and
//! the loop carries on with the next line.

use core::fmt;

#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum Error {
    /// Argument did not parse, or parsed to a value outside the command's vocabulary.
    InvalidArgument,
    /// Speed was requested before a full tachometer period has been captured.
    NoSignal,
    /// First token of the line matches no command table entry.
    UnknownCommand,
    /// Line grew past the console buffer before a terminator arrived.
    LineOverflow,
    /// Line bytes are not valid UTF-8.
    InvalidInput,
}

pub type Result<T> = core::result::Result<T, Error>;

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::InvalidArgument => f.write_str("invalid argument"),
            Error::NoSignal => f.write_str("no signal"),
            Error::UnknownCommand => f.write_str("unknown command"),
            Error::LineOverflow => write!(
                f,
                "line too long (max {} bytes)",
                crate::config::MAX_LINE_LEN
            ),
            Error::InvalidInput => f.write_str("invalid input"),
        }
    }
}
