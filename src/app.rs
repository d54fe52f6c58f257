// SPDX-License-Identifier: MIT
// © 2025–2026 Christopher Liu

//! Console loop: the root of the thread-mode side of the firmware.
//!
//! Owns the line buffer and the dispatcher (and through it the motor state). Interrupt
//! handlers never reach in here; the only thing they share with it is the tachometer
//! [`IntervalCell`].

use core::fmt::Write;

use crate::config::{BANNER, MAX_LINE_LEN};
use crate::control::MotorState;
use crate::drivers::actuator::MotorActuator;
use crate::drivers::tachometer::IntervalCell;
use crate::protocol::{CharStream, Dispatcher, LineBuffer};

pub struct App<'a, A: MotorActuator> {
    line: LineBuffer<MAX_LINE_LEN>,
    dispatcher: Dispatcher<'a, A>,
}

impl<'a, A: MotorActuator> App<'a, A> {
    /// Bring the motor to its idle state and wire it to the tachometer reading.
    pub fn new(actuator: A, interval: &'a IntervalCell) -> Self {
        Self {
            line: LineBuffer::new(),
            dispatcher: Dispatcher::new(MotorState::new(actuator), interval),
        }
    }

    pub fn banner<S: CharStream>(&self, stream: &mut S) {
        let _ = writeln!(stream, "{}", BANNER);
    }

    /// Drain every byte currently readable, dispatching each completed line.
    pub fn poll<S: CharStream>(&mut self, stream: &mut S) {
        while stream.readable() {
            let byte = stream.read_byte();
            if !self.line.push(byte, stream) {
                continue;
            }
            // Console writes cannot fail on the target; a lost reply is not worth stalling for.
            let _ = match self.line.line() {
                Ok(line) => self.dispatcher.dispatch(line, stream),
                Err(e) => writeln!(stream, "error: {}", e),
            };
            self.line.clear();
        }
    }

    /// Poll forever. The only wait is the busy check on `readable`.
    pub fn run<S: CharStream>(&mut self, stream: &mut S) -> ! {
        loop {
            self.poll(stream);
        }
    }

    pub fn dispatcher(&self) -> &Dispatcher<'a, A> {
        &self.dispatcher
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::drivers::actuator::mock::{Call, Recorder};
    use crate::drivers::actuator::Direction;
    use crate::protocol::console::mock::Loopback;

    #[test]
    fn banner_and_idle_motor_at_startup() {
        let cell = IntervalCell::new();
        let app = App::new(Recorder::default(), &cell);
        let mut s = Loopback::default();
        app.banner(&mut s);
        assert_eq!(s.output(), "AVC Test Device Ready\n");
        assert_eq!(
            app.dispatcher().motor().actuator().calls,
            [Call::Polarity(Direction::Forward), Call::Power(0.0)]
        );
    }

    #[test]
    fn session_echoes_and_replies() {
        let cell = IntervalCell::new();
        let mut app = App::new(Recorder::default(), &cell);
        let mut s = Loopback::with_input(b"pwr 55\rpwr?\r\n");
        app.poll(&mut s);
        assert_eq!(
            s.output(),
            "pwr 55\nsetting pwr = 55\npwr?\npwr = 55\n\n"
        );
        assert_eq!(app.dispatcher().motor().power(), 55);
    }

    #[test]
    fn partial_line_waits_for_terminator() {
        let cell = IntervalCell::new();
        let mut app = App::new(Recorder::default(), &cell);
        let mut s = Loopback::with_input(b"dir r");
        app.poll(&mut s);
        assert_eq!(s.output(), "dir r");

        s.input.extend(b"ev\n");
        app.poll(&mut s);
        assert_eq!(s.output(), "dir rev\nSetting motor direction to 1\n");
        assert_eq!(app.dispatcher().motor().direction(), Direction::Reverse);
    }

    #[test]
    fn overlong_line_is_rejected_without_side_effects() {
        let cell = IntervalCell::new();
        let mut app = App::new(Recorder::default(), &cell);
        let mut input = b"pwr 9".to_vec();
        input.resize(MAX_LINE_LEN + 10, b'9');
        input.extend(b"\npwr?\n");
        let mut s = Loopback::with_input(&input);

        app.poll(&mut s);
        let out = s.output();
        assert!(out.contains("\nerror: line too long (max 128 bytes)\n"));
        assert!(out.ends_with("pwr?\npwr = 0\n"));
        assert_eq!(app.dispatcher().motor().power(), 0);
    }

    #[test]
    fn invalid_utf8_line_is_reported_and_skipped() {
        let cell = IntervalCell::new();
        let mut app = App::new(Recorder::default(), &cell);
        let mut s = Loopback::with_input(&[b'p', 0xFF, b' ', b'5', b'\n']);
        app.poll(&mut s);
        assert_eq!(s.output, b"p\xFF 5\nerror: invalid input\n");
        assert_eq!(app.dispatcher().motor().power(), 0);

        s.output.clear();
        s.input.extend(b"pwr 5\n");
        app.poll(&mut s);
        assert_eq!(s.output(), "pwr 5\nsetting pwr = 5\n");
    }

    #[test]
    fn speed_follows_the_shared_cell() {
        let cell = IntervalCell::new();
        let mut app = App::new(Recorder::default(), &cell);
        let mut s = Loopback::with_input(b"spd?\n");
        app.poll(&mut s);
        assert_eq!(s.output(), "spd?\nerror: no signal\n");

        cell.write(1_000);
        s.output.clear();
        s.input.extend(b"spd?\n");
        app.poll(&mut s);
        assert_eq!(s.output(), "spd?\nspeed = 60\n");
    }
}
