//! Error types for NestKV core.

use thiserror::Error;

/// Result type for core operations.
pub type CoreResult<T> = Result<T, CoreError>;

/// Errors reported by the transaction engine.
///
/// Every failure is detected before the engine mutates any state, so a
/// returned error always means nothing changed.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CoreError {
    /// No visible entry exists for the key.
    #[error("key not found: {key}")]
    KeyNotFound {
        /// The key that was looked up.
        key: String,
    },

    /// `commit` was called with no open transaction.
    #[error("there is no current transaction to commit")]
    NoActiveTransaction,

    /// The command name is not part of the vocabulary.
    #[error("unsupported command: {command}")]
    UnsupportedCommand {
        /// The rejected command name.
        command: String,
    },
}

impl CoreError {
    /// Creates a key not found error.
    pub fn key_not_found(key: impl Into<String>) -> Self {
        Self::KeyNotFound { key: key.into() }
    }

    /// Creates an unsupported command error.
    pub fn unsupported_command(command: impl Into<String>) -> Self {
        Self::UnsupportedCommand {
            command: command.into(),
        }
    }
}
