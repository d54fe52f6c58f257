// SPDX-License-Identifier: MIT
// © 2025–2026 Christopher Liu

//! Line dispatcher.
//!
//! Splits a console line into a command token and an optional argument, runs the matching
//! handler exactly once and renders its reply. Tokens after the argument are ignored.

use core::fmt::{self, Write};

use crate::control::MotorState;
use crate::drivers::actuator::{Direction, MotorActuator};
use crate::drivers::tachometer::IntervalCell;
use crate::error::Result;
use crate::protocol::commands::{self, Command, COMMAND_TABLE};

/// Successful handler output, rendered as one or more reply lines.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum Reply {
    Power(u8),
    PowerSet(u8),
    Direction(Direction),
    DirectionSet(Direction),
    Speed(u32),
    Help,
}

impl Reply {
    pub fn render<W: Write>(&self, out: &mut W) -> fmt::Result {
        match *self {
            Reply::Power(p) => writeln!(out, "pwr = {}", p),
            Reply::PowerSet(p) => writeln!(out, "setting pwr = {}", p),
            Reply::Direction(d) => writeln!(out, "dir = {}", d.as_str()),
            Reply::DirectionSet(d) => writeln!(out, "Setting motor direction to {}", d.code()),
            Reply::Speed(rpm) => writeln!(out, "speed = {}", rpm),
            Reply::Help => {
                for entry in COMMAND_TABLE {
                    writeln!(out, "{}: {}", entry.name, entry.help)?;
                }
                Ok(())
            }
        }
    }
}

pub struct Dispatcher<'a, A: MotorActuator> {
    motor: MotorState<A>,
    interval: &'a IntervalCell,
}

impl<'a, A: MotorActuator> Dispatcher<'a, A> {
    pub fn new(motor: MotorState<A>, interval: &'a IntervalCell) -> Self {
        Self { motor, interval }
    }

    /// Handle one complete line, writing any reply to `out`.
    ///
    /// Blank lines are ignored. Handler errors become `error: <reason>` replies.
    pub fn dispatch<W: Write>(&mut self, line: &str, out: &mut W) -> fmt::Result {
        let mut tokens = line.split_whitespace();
        let Some(token) = tokens.next() else {
            return Ok(());
        };
        let arg = tokens.next().unwrap_or("");

        let Some(entry) = commands::lookup(token) else {
            return Self::unknown(token, out);
        };

        match self.handle(entry.command, arg) {
            Ok(reply) => reply.render(out),
            Err(e) => writeln!(out, "error: {}", e),
        }
    }

    /// Run the handler for `command` against the motor and tachometer state.
    pub fn handle(&mut self, command: Command, arg: &str) -> Result<Reply> {
        match command {
            Command::GetPower => Ok(Reply::Power(self.motor.power())),
            Command::SetPower => self.motor.set_power(arg).map(Reply::PowerSet),
            Command::GetDirection => Ok(Reply::Direction(self.motor.direction())),
            Command::SetDirection => self.motor.set_direction(arg).map(Reply::DirectionSet),
            Command::GetSpeed => self.interval.read_speed().map(Reply::Speed),
            Command::Help => Ok(Reply::Help),
        }
    }

    #[cfg(not(feature = "quiet-unknown"))]
    fn unknown<W: Write>(token: &str, out: &mut W) -> fmt::Result {
        writeln!(out, "{}: {}", crate::error::Error::UnknownCommand, token)
    }

    #[cfg(feature = "quiet-unknown")]
    fn unknown<W: Write>(_token: &str, _out: &mut W) -> fmt::Result {
        Ok(())
    }

    pub fn motor(&self) -> &MotorState<A> {
        &self.motor
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::drivers::actuator::mock::{Call, Recorder};

    fn run(d: &mut Dispatcher<'_, Recorder>, line: &str) -> String {
        let mut out = String::new();
        d.dispatch(line, &mut out).unwrap();
        out
    }

    fn dispatcher(cell: &IntervalCell) -> Dispatcher<'_, Recorder> {
        Dispatcher::new(MotorState::new(Recorder::default()), cell)
    }

    #[test]
    fn set_then_query_power() {
        let cell = IntervalCell::new();
        let mut d = dispatcher(&cell);
        assert_eq!(run(&mut d, "pwr 55\n"), "setting pwr = 55\n");
        assert_eq!(run(&mut d, "pwr?\n"), "pwr = 55\n");
    }

    #[test]
    fn direction_round_trip() {
        let cell = IntervalCell::new();
        let mut d = dispatcher(&cell);
        assert_eq!(run(&mut d, "dir?"), "dir = fwd\n");
        assert_eq!(run(&mut d, "dir rev"), "Setting motor direction to 1\n");
        assert_eq!(run(&mut d, "dir?"), "dir = rev\n");
        assert_eq!(run(&mut d, "dir fwd"), "Setting motor direction to 0\n");
    }

    #[test]
    fn bad_arguments_reply_with_an_error_and_leave_state() {
        let cell = IntervalCell::new();
        let mut d = dispatcher(&cell);
        run(&mut d, "pwr 30");
        let calls = d.motor().actuator().calls.len();

        assert_eq!(run(&mut d, "pwr lots"), "error: invalid argument\n");
        assert_eq!(run(&mut d, "pwr"), "error: invalid argument\n");
        assert_eq!(run(&mut d, "dir sideways"), "error: invalid argument\n");
        assert_eq!(d.motor().power(), 30);
        assert_eq!(d.motor().direction(), Direction::Forward);
        assert_eq!(d.motor().actuator().calls.len(), calls);
    }

    #[test]
    fn speed_without_signal_does_not_divide() {
        let cell = IntervalCell::new();
        let mut d = dispatcher(&cell);
        assert_eq!(run(&mut d, "spd?"), "error: no signal\n");
    }

    #[test]
    fn speed_from_captured_period() {
        let cell = IntervalCell::new();
        cell.write(500);
        let mut d = dispatcher(&cell);
        assert_eq!(run(&mut d, "spd?"), "speed = 120\n");
    }

    #[test]
    fn help_lists_the_table_in_order() {
        let cell = IntervalCell::new();
        let mut d = dispatcher(&cell);
        assert_eq!(
            run(&mut d, "help"),
            "pwr?: Print motor power\n\
             pwr: Set motor power\n\
             dir?: Print motor direction\n\
             dir: Set motor direction\n\
             spd?: Print motor speed (rpm)\n\
             help: Print some nice help\n"
        );
    }

    #[test]
    fn unknown_command_leaves_state_alone() {
        let cell = IntervalCell::new();
        let mut d = dispatcher(&cell);
        let calls = d.motor().actuator().calls.clone();

        let out = run(&mut d, "bogus 12\n");
        if cfg!(feature = "quiet-unknown") {
            assert_eq!(out, "");
        } else {
            assert_eq!(out, "unknown command: bogus\n");
        }
        assert_eq!(d.motor().actuator().calls, calls);
        assert_eq!(d.motor().power(), 0);
    }

    #[test]
    fn blank_lines_and_extra_tokens() {
        let cell = IntervalCell::new();
        let mut d = dispatcher(&cell);
        assert_eq!(run(&mut d, ""), "");
        assert_eq!(run(&mut d, "   \t"), "");
        assert_eq!(run(&mut d, "  pwr   70  trailing junk"), "setting pwr = 70\n");
    }

    #[test]
    fn reversal_through_the_console_is_sequenced() {
        let cell = IntervalCell::new();
        let mut d = dispatcher(&cell);
        run(&mut d, "pwr 40");
        let start = d.motor().actuator().calls.len();

        run(&mut d, "dir rev");
        assert_eq!(
            d.motor().actuator().calls[start..],
            [
                Call::Power(0.0),
                Call::Polarity(Direction::Reverse),
                Call::Power(0.4)
            ]
        );
    }
}
