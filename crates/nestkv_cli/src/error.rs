//! Error types for the REPL.

use nestkv_core::CoreError;
use std::io;
use thiserror::Error;

/// Result type for REPL operations.
pub type ReplResult<T> = Result<T, ReplError>;

/// Errors raised while reading, parsing or running a line.
#[derive(Debug, Error)]
pub enum ReplError {
    /// The line contained no command.
    #[error("no command given")]
    NoCommand,

    /// The first word is not a known command.
    #[error("unsupported command: {command}")]
    UnsupportedCommand {
        /// The rejected command name.
        command: String,
    },

    /// The command was given the wrong number of arguments.
    #[error("invalid number of arguments: {command} (required: {required})")]
    InvalidArgumentCount {
        /// Upper-cased command name.
        command: String,
        /// Number of arguments the command takes.
        required: usize,
    },

    /// The input line could not be decoded.
    #[error("input line is not valid UTF-8")]
    InvalidEncoding,

    /// The engine rejected the command.
    #[error(transparent)]
    Core(#[from] CoreError),

    /// Reading input or writing output failed.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),
}

impl ReplError {
    /// Creates an unsupported command error.
    pub fn unsupported_command(command: impl Into<String>) -> Self {
        Self::UnsupportedCommand {
            command: command.into(),
        }
    }

    /// Creates an invalid argument count error.
    pub fn invalid_argument_count(command: &str, required: usize) -> Self {
        Self::InvalidArgumentCount {
            command: command.to_uppercase(),
            required,
        }
    }
}
