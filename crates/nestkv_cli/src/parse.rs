//! Input line parsing.

use crate::config::ReplConfig;
use crate::error::{ReplError, ReplResult};
use nestkv_core::Command;

/// REPL-only command that ends the session.
pub const EXIT: &str = "exit";

/// A validated input line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Input {
    /// Leave the REPL.
    Exit,
    /// Run a command against the store.
    Command {
        /// The command to run.
        command: Command,
        /// First argument, empty if the command takes none.
        key: String,
        /// Second argument, empty unless the command is `write`.
        value: String,
    },
}

/// Parses and validates one input line.
///
/// The line is trimmed, lower-cased when `config.case_insensitive` is set,
/// and split on whitespace. The first word names the command; the rest must
/// match its arity exactly.
///
/// # Errors
///
/// - [`ReplError::NoCommand`] for a blank line
/// - [`ReplError::UnsupportedCommand`] for an unknown first word
/// - [`ReplError::InvalidArgumentCount`] for a wrong number of arguments
pub fn parse(line: &str, config: &ReplConfig) -> ReplResult<Input> {
    let line = if config.case_insensitive {
        line.trim().to_lowercase()
    } else {
        line.trim().to_string()
    };

    let fields: Vec<&str> = line.split_whitespace().collect();
    let Some((&name, args)) = fields.split_first() else {
        return Err(ReplError::NoCommand);
    };

    let command = if name == EXIT {
        None
    } else {
        let command = name
            .parse::<Command>()
            .map_err(|_| ReplError::unsupported_command(name))?;
        Some(command)
    };

    let required = command.map_or(0, Command::arity);
    if args.len() != required {
        return Err(ReplError::invalid_argument_count(name, required));
    }

    let Some(command) = command else {
        return Ok(Input::Exit);
    };

    let mut args = args.iter().map(|arg| (*arg).to_string());
    Ok(Input::Command {
        command,
        key: args.next().unwrap_or_default(),
        value: args.next().unwrap_or_default(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse_default(line: &str) -> ReplResult<Input> {
        parse(line, &ReplConfig::default())
    }

    #[test]
    fn parse_write() {
        let input = parse_default("write a hi").unwrap();
        assert_eq!(
            input,
            Input::Command {
                command: Command::Write,
                key: "a".to_string(),
                value: "hi".to_string(),
            }
        );
    }

    #[test]
    fn parse_zero_arity_has_empty_arguments() {
        let input = parse_default("begin").unwrap();
        assert_eq!(
            input,
            Input::Command {
                command: Command::Begin,
                key: String::new(),
                value: String::new(),
            }
        );
    }

    #[test]
    fn parse_exit() {
        assert_eq!(parse_default("exit").unwrap(), Input::Exit);
    }

    #[test]
    fn parse_trims_and_collapses_whitespace() {
        let input = parse_default("  read \t  a  \n").unwrap();
        assert_eq!(
            input,
            Input::Command {
                command: Command::Read,
                key: "a".to_string(),
                value: String::new(),
            }
        );
    }

    #[test]
    fn parse_lowercases_whole_line() {
        let input = parse_default("WRITE Key Value").unwrap();
        assert_eq!(
            input,
            Input::Command {
                command: Command::Write,
                key: "key".to_string(),
                value: "value".to_string(),
            }
        );
    }

    #[test]
    fn parse_case_sensitive_keeps_case() {
        let config = ReplConfig::new().case_insensitive(false);
        let input = parse("write Key Value", &config).unwrap();
        assert_eq!(
            input,
            Input::Command {
                command: Command::Write,
                key: "Key".to_string(),
                value: "Value".to_string(),
            }
        );
        assert!(matches!(
            parse("WRITE a b", &config),
            Err(ReplError::UnsupportedCommand { .. })
        ));
    }

    #[test]
    fn parse_error_table() {
        enum Want {
            Ok,
            NoCommand,
            Unsupported,
            ArgCount,
        }

        let cases = [
            ("", Want::NoCommand),
            ("   ", Want::NoCommand),
            ("unsupported-comand", Want::Unsupported),
            ("write 1 2", Want::Ok),
            ("write", Want::ArgCount),
            ("write 1 2 3 ", Want::ArgCount),
            ("read a", Want::Ok),
            ("read a b", Want::ArgCount),
            ("read", Want::ArgCount),
            ("remove a", Want::Ok),
            ("remove", Want::ArgCount),
            ("remove a b", Want::ArgCount),
            ("discard", Want::Ok),
            ("discard 4", Want::ArgCount),
            ("begin", Want::Ok),
            ("begin 4", Want::ArgCount),
            ("commit", Want::Ok),
            ("commit 4", Want::ArgCount),
            ("exit", Want::Ok),
            ("exit 4", Want::ArgCount),
        ];

        for (line, want) in cases {
            let got = parse_default(line);
            let matched = match want {
                Want::Ok => got.is_ok(),
                Want::NoCommand => matches!(got, Err(ReplError::NoCommand)),
                Want::Unsupported => matches!(got, Err(ReplError::UnsupportedCommand { .. })),
                Want::ArgCount => matches!(got, Err(ReplError::InvalidArgumentCount { .. })),
            };
            assert!(matched, "unexpected result for {:?}: {:?}", line, got);
        }
    }

    #[test]
    fn parse_argument_count_reports_requirement() {
        let err = parse_default("write a").unwrap_err();
        assert!(matches!(
            err,
            ReplError::InvalidArgumentCount { ref command, required: 2 } if command == "WRITE"
        ));
    }
}
