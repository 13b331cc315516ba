//! The read-eval-print loop.

use crate::config::ReplConfig;
use crate::error::{ReplError, ReplResult};
use crate::parse::{parse, Input};
use nestkv_core::Store;
use std::io::{BufRead, Write};
use tracing::{debug, warn};

/// Whether the loop keeps going after a line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Flow {
    Continue,
    Exit,
}

/// A REPL session over a single [`Store`].
#[derive(Debug, Default)]
pub struct Repl {
    store: Store,
    config: ReplConfig,
}

impl Repl {
    /// Creates a session over `store`.
    #[must_use]
    pub fn new(store: Store, config: ReplConfig) -> Self {
        Self { store, config }
    }

    /// Returns the underlying store.
    #[must_use]
    pub fn store(&self) -> &Store {
        &self.store
    }

    /// Runs the loop until `exit` or end of input.
    ///
    /// Values go to `out`; parse and engine errors go to `err` and the loop
    /// carries on.
    ///
    /// # Errors
    ///
    /// Returns an error only if reading `input` or writing to `out`/`err`
    /// fails.
    pub fn run<R, W, E>(&mut self, mut input: R, out: &mut W, err: &mut E) -> ReplResult<()>
    where
        R: BufRead,
        W: Write,
        E: Write,
    {
        let mut buf = Vec::new();
        loop {
            write!(out, "{}", self.config.prompt)?;
            out.flush()?;

            buf.clear();
            if input.read_until(b'\n', &mut buf)? == 0 {
                debug!("end of input");
                break;
            }

            let flow = match std::str::from_utf8(&buf) {
                Ok(line) => self.step(line, out, err)?,
                Err(_) => {
                    writeln!(err, "{}", ReplError::InvalidEncoding)?;
                    Flow::Continue
                }
            };
            if flow == Flow::Exit {
                break;
            }
        }

        if self.store.in_transaction() {
            warn!(
                depth = self.store.depth(),
                "session ended with open transactions, pending edits dropped"
            );
        }
        debug!(depth = self.store.depth(), "session ended");
        Ok(())
    }

    /// Evaluates one line.
    ///
    /// Returns `Ok(None)` for `exit`, otherwise the command's output, which
    /// is empty for commands that produce no value.
    ///
    /// # Errors
    ///
    /// Returns parse errors and engine errors. Neither changes the store.
    pub fn eval(&mut self, line: &str) -> ReplResult<Option<String>> {
        match parse(line, &self.config)? {
            Input::Exit => Ok(None),
            Input::Command {
                command,
                key,
                value,
            } => {
                let output = self.store.execute(command, &key, &value)?;
                debug!(%command, depth = self.store.depth(), "command executed");
                Ok(Some(output))
            }
        }
    }

    /// Evaluates one line and prints its outcome.
    fn step<W, E>(&mut self, line: &str, out: &mut W, err: &mut E) -> ReplResult<Flow>
    where
        W: Write,
        E: Write,
    {
        match self.eval(line) {
            Ok(None) => return Ok(Flow::Exit),
            Ok(Some(v)) if !v.is_empty() => writeln!(out, "{v}")?,
            Ok(Some(_)) => {}
            Err(e) => writeln!(err, "{e}")?,
        }
        Ok(Flow::Continue)
    }
}
