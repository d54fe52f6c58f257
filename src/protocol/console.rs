// SPDX-License-Identifier: MIT
// © 2025–2026 Christopher Liu

//! Byte-at-a-time line assembly for the serial console.
//!
//! Bytes are echoed as they arrive. `\r` or `\n` ends the line: a newline is echoed and the
//! buffered text is handed on. A line longer than the buffer is rejected as a whole when its
//! terminator arrives; the excess bytes are still echoed but not stored.

use core::fmt;

use crate::error::{Error, Result};

/// Polled serial byte stream.
pub trait CharStream: fmt::Write {
    /// A byte is waiting to be read.
    fn readable(&mut self) -> bool;

    /// Next byte from the stream. Only called after `readable` returned `true`.
    fn read_byte(&mut self) -> u8;

    fn write_byte(&mut self, byte: u8);
}

/// Fixed-capacity line buffer.
pub struct LineBuffer<const N: usize> {
    buf: [u8; N],
    len: usize,
    overflowed: bool,
}

impl<const N: usize> LineBuffer<N> {
    pub const fn new() -> Self {
        Self {
            buf: [0; N],
            len: 0,
            overflowed: false,
        }
    }

    #[inline]
    fn is_terminator(byte: u8) -> bool {
        byte == b'\r' || byte == b'\n'
    }

    /// Feed one byte, echoing to `stream`. Returns `true` when `byte` completed a line.
    pub fn push<S: CharStream>(&mut self, byte: u8, stream: &mut S) -> bool {
        if Self::is_terminator(byte) {
            stream.write_byte(b'\n');
            return true;
        }

        stream.write_byte(byte);
        if self.len < N {
            self.buf[self.len] = byte;
            self.len += 1;
        } else {
            self.overflowed = true;
        }
        false
    }

    /// The completed line, or why it cannot be used.
    pub fn line(&self) -> Result<&str> {
        if self.overflowed {
            return Err(Error::LineOverflow);
        }
        core::str::from_utf8(&self.buf[..self.len]).map_err(|_| Error::InvalidInput)
    }

    /// Start the next line.
    pub fn clear(&mut self) {
        self.len = 0;
        self.overflowed = false;
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.len
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }
}

impl<const N: usize> Default for LineBuffer<N> {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
pub(crate) mod mock {
    use super::CharStream;
    use std::collections::VecDeque;
    use std::fmt;

    /// In-memory console: scripted input, captured output.
    #[derive(Default)]
    pub struct Loopback {
        pub input: VecDeque<u8>,
        pub output: Vec<u8>,
    }

    impl Loopback {
        pub fn with_input(bytes: &[u8]) -> Self {
            Self {
                input: bytes.iter().copied().collect(),
                output: Vec::new(),
            }
        }

        /// Echo and replies so far, with any non-UTF-8 echo shown as U+FFFD.
        pub fn output(&self) -> String {
            String::from_utf8_lossy(&self.output).into_owned()
        }
    }

    impl fmt::Write for Loopback {
        fn write_str(&mut self, s: &str) -> fmt::Result {
            self.output.extend_from_slice(s.as_bytes());
            Ok(())
        }
    }

    impl CharStream for Loopback {
        fn readable(&mut self) -> bool {
            !self.input.is_empty()
        }

        fn read_byte(&mut self) -> u8 {
            self.input.pop_front().unwrap_or(0)
        }

        fn write_byte(&mut self, byte: u8) {
            self.output.push(byte);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::mock::Loopback;
    use super::*;

    /// Feed `bytes`, collecting every completed line (or its error).
    fn feed<const N: usize>(lb: &mut LineBuffer<N>, bytes: &[u8]) -> (Vec<Result<String>>, String) {
        let mut s = Loopback::default();
        let mut lines = Vec::new();
        for &b in bytes {
            if lb.push(b, &mut s) {
                lines.push(lb.line().map(str::to_owned));
                lb.clear();
            }
        }
        (lines, s.output())
    }

    #[test]
    fn echoes_and_completes_on_either_terminator() {
        let mut lb = LineBuffer::<16>::new();
        let (lines, echo) = feed(&mut lb, b"pwr?\rdir?\n");
        assert_eq!(lines, [Ok("pwr?".to_owned()), Ok("dir?".to_owned())]);
        assert_eq!(echo, "pwr?\ndir?\n");
    }

    #[test]
    fn crlf_yields_an_empty_second_line() {
        let mut lb = LineBuffer::<16>::new();
        let (lines, _) = feed(&mut lb, b"help\r\n");
        assert_eq!(lines, [Ok("help".to_owned()), Ok(String::new())]);
    }

    #[test]
    fn overflow_rejects_the_whole_line_then_recovers() {
        let mut lb = LineBuffer::<4>::new();
        let (lines, echo) = feed(&mut lb, b"pwr 100\npwr?\n");
        assert_eq!(lines, [Err(Error::LineOverflow), Ok("pwr?".to_owned())]);
        assert_eq!(echo, "pwr 100\npwr?\n");
    }

    #[test]
    fn exactly_full_line_is_accepted() {
        let mut lb = LineBuffer::<4>::new();
        let (lines, _) = feed(&mut lb, b"spd?\n");
        assert_eq!(lines, [Ok("spd?".to_owned())]);
    }

    #[test]
    fn non_utf8_is_reported() {
        let mut lb = LineBuffer::<8>::new();
        let (lines, echo) = feed(&mut lb, &[0xFF, 0xFE, b'\n', b'h', b'i', b'\n']);
        assert_eq!(lines, [Err(Error::InvalidInput), Ok("hi".to_owned())]);
        assert_eq!(echo, "\u{FFFD}\u{FFFD}\nhi\n");
    }

    #[test]
    fn clear_resets_length() {
        let mut lb = LineBuffer::<8>::new();
        let mut s = Loopback::default();
        lb.push(b'x', &mut s);
        assert_eq!(lb.len(), 1);
        lb.clear();
        assert!(lb.is_empty());
    }
}
