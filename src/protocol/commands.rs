// SPDX-License-Identifier: MIT
// © 2025–2026 Christopher Liu

//! Console command vocabulary.
//!
//! | Command | Argument | Reply |
//! | ------- | -------- | ----- |
//! | `pwr?`  | -        | `pwr = <n>` |
//! | `pwr`   | `0..=100` | `setting pwr = <n>` |
//! | `dir?`  | -        | `dir = fwd\|rev` |
//! | `dir`   | `fwd\|rev` | `Setting motor direction to <0\|1>` |
//! | `spd?`  | -        | `speed = <rpm>` |
//! | `help`  | -        | one `<name>: <help>` line per entry |
//!
//! Names are matched against the whole first token, so `pwr` never shadows `pwr?` (or the
//! other way round) regardless of table order.

/// Handler selected by a table entry.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum Command {
    GetPower,
    SetPower,
    GetDirection,
    SetDirection,
    GetSpeed,
    Help,
}

#[derive(Copy, Clone, Debug)]
pub struct CommandEntry {
    pub name: &'static str,
    pub command: Command,
    pub help: &'static str,
}

/// The command table, in `help` order.
pub const COMMAND_TABLE: &[CommandEntry] = &[
    CommandEntry {
        name: "pwr?",
        command: Command::GetPower,
        help: "Print motor power",
    },
    CommandEntry {
        name: "pwr",
        command: Command::SetPower,
        help: "Set motor power",
    },
    CommandEntry {
        name: "dir?",
        command: Command::GetDirection,
        help: "Print motor direction",
    },
    CommandEntry {
        name: "dir",
        command: Command::SetDirection,
        help: "Set motor direction",
    },
    CommandEntry {
        name: "spd?",
        command: Command::GetSpeed,
        help: "Print motor speed (rpm)",
    },
    CommandEntry {
        name: "help",
        command: Command::Help,
        help: "Print some nice help",
    },
];

/// Find the entry whose name equals `token` in the built-in table.
#[inline]
pub fn lookup(token: &str) -> Option<&'static CommandEntry> {
    lookup_in(COMMAND_TABLE, token)
}

/// Find the entry whose name equals `token` in `table`.
pub fn lookup_in<'t>(table: &'t [CommandEntry], token: &str) -> Option<&'t CommandEntry> {
    table.iter().find(|entry| entry.name == token)
}
