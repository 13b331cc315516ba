//! The fixed command vocabulary understood by the engine.

use crate::error::CoreError;
use std::fmt;
use std::str::FromStr;

/// A command the engine can execute.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Command {
    /// `write <key> <value>`
    Write,
    /// `read <key>`
    Read,
    /// `remove <key>`
    Remove,
    /// `begin`
    Begin,
    /// `commit`
    Commit,
    /// `discard`
    Discard,
}

impl Command {
    /// Every command, in vocabulary order.
    pub const ALL: [Self; 6] = [
        Self::Write,
        Self::Read,
        Self::Remove,
        Self::Begin,
        Self::Commit,
        Self::Discard,
    ];

    /// Returns the command's name as typed by users.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Write => "write",
            Self::Read => "read",
            Self::Remove => "remove",
            Self::Begin => "begin",
            Self::Commit => "commit",
            Self::Discard => "discard",
        }
    }

    /// Returns the number of arguments the command takes.
    #[must_use]
    pub const fn arity(self) -> usize {
        match self {
            Self::Write => 2,
            Self::Read | Self::Remove => 1,
            Self::Begin | Self::Commit | Self::Discard => 0,
        }
    }
}

impl FromStr for Command {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|command| command.as_str() == s)
            .ok_or_else(|| CoreError::unsupported_command(s))
    }
}

impl fmt::Display for Command {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
