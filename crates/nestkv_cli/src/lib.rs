//! NestKV REPL
//!
//! Line-oriented front end for the NestKV transaction engine.
//!
//! # Commands
//!
//! - `write <key> <value>` - Set a key
//! - `read <key>` - Print a key's value
//! - `remove <key>` - Remove a key
//! - `begin` - Open a nested transaction
//! - `commit` - Commit the innermost transaction
//! - `discard` - Drop the innermost transaction
//! - `exit` - Leave the REPL

#![deny(unsafe_code)]
#![warn(missing_docs)]

mod config;
mod error;
mod parse;
mod repl;

pub use config::ReplConfig;
pub use error::{ReplError, ReplResult};
pub use parse::{parse, Input, EXIT};
pub use repl::Repl;
