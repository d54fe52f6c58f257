// SPDX-License-Identifier: MIT
// © 2025–2026 Christopher Liu

//! USART console stream.
//!
//! Wraps both halves of a HAL serial port as a polled [`CharStream`]. Replies use bare `\n`
//! line endings; set your terminal to add CR on LF.
//!
//! To access the console on the host machine, connect to the ST-LINK USB port and use
//! ```text
//! $ screen /dev/ttyACM0 9600
//! ```
//!
//! To close the terminal, press `Ctrl+A` then `Ctrl+\` then `y`.

use core::fmt;
use nb::block;

use stm32f7xx_hal::{
    prelude::*,
    serial::{Instance, Pins, Rx, Serial, Tx},
};

use crate::protocol::CharStream;

pub struct Usart<U: Instance> {
    tx: Tx<U>,
    rx: Rx<U>,
    /// Byte taken off the receiver by `readable` but not yet consumed.
    pending: Option<u8>,
}

impl<U: Instance> Usart<U> {
    pub fn new<PINS: Pins<U>>(serial: Serial<U, PINS>) -> Self {
        let (tx, rx) = serial.split();
        Self {
            tx,
            rx,
            pending: None,
        }
    }

    #[inline]
    pub fn write_byte(&mut self, b: u8) {
        let _ = block!(self.tx.write(b));
    }

    pub fn write_str(&mut self, s: &str) {
        for &b in s.as_bytes() {
            self.write_byte(b);
        }
    }

    /// Non-blocking receive. Overrun, framing and noise errors drop the byte.
    fn try_read(&mut self) -> Option<u8> {
        match self.rx.read() {
            Ok(b) => Some(b),
            Err(nb::Error::WouldBlock) | Err(nb::Error::Other(_)) => None,
        }
    }
}

impl<U: Instance> CharStream for Usart<U> {
    fn readable(&mut self) -> bool {
        if self.pending.is_none() {
            self.pending = self.try_read();
        }
        self.pending.is_some()
    }

    fn read_byte(&mut self) -> u8 {
        loop {
            if let Some(b) = self.pending.take().or_else(|| self.try_read()) {
                return b;
            }
        }
    }

    fn write_byte(&mut self, byte: u8) {
        Usart::write_byte(self, byte);
    }
}

// Implement `core::fmt::Write` so we can use `write!` / `writeln!` on `Usart`.
impl<U: Instance> fmt::Write for Usart<U> {
    fn write_str(&mut self, s: &str) -> fmt::Result {
        Usart::write_str(self, s);
        Ok(())
    }
}
