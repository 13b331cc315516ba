//! The transaction engine.

use crate::command::Command;
use crate::error::{CoreError, CoreResult};
use crate::operation::Operation;
use crate::transaction::Frame;
use crate::types::FrameId;
use nestkv_storage::{DurableMap, MapBackend};
use tracing::{debug, trace};

/// A key-value store with nested transactions.
///
/// The store owns a durable map and a stack of transaction frames. With no
/// transaction open, writes and removes go straight to the map. Inside a
/// transaction they are appended to the innermost frame's log; a commit moves
/// that log into the parent frame, and only once the stack unwinds to the
/// base frame is the accumulated log replayed onto the map.
///
/// ## Visibility
///
/// Reads see the innermost frame first, then each enclosing frame, then the
/// map. Within a frame the most recent operation on a key wins, and a
/// tombstone hides everything beneath it.
///
/// ## Replay
///
/// Flushing applies every recorded operation in chronological order. Several
/// writes to the same key are all applied; none are collapsed.
#[derive(Debug)]
pub struct Store<B = DurableMap> {
    /// Committed state.
    durable: B,
    /// Frame arena. Index 0 is the base frame; the current frame is always last.
    frames: Vec<Frame>,
    /// Innermost open frame.
    current: FrameId,
}

impl Store<DurableMap> {
    /// Creates an empty store backed by an in-memory [`DurableMap`].
    #[must_use]
    pub fn new() -> Self {
        Self::with_backend(DurableMap::new())
    }
}

impl Default for Store<DurableMap> {
    fn default() -> Self {
        Self::new()
    }
}

impl<B: MapBackend> Store<B> {
    /// Creates a store on top of an existing backend.
    ///
    /// The backend's current contents are treated as committed state.
    pub fn with_backend(durable: B) -> Self {
        Self {
            durable,
            frames: vec![Frame::base()],
            current: FrameId::BASE,
        }
    }

    /// Runs a command given by name.
    ///
    /// Arguments a command does not use are ignored. Commands that produce
    /// no value return an empty string.
    ///
    /// # Errors
    ///
    /// - [`CoreError::UnsupportedCommand`] if `command` is not in the vocabulary
    /// - Any error returned by the command itself (see [`Store::execute`])
    pub fn process(&mut self, command: &str, key: &str, value: &str) -> CoreResult<String> {
        let command: Command = command.parse()?;
        self.execute(command, key, value)
    }

    /// Runs a parsed command.
    ///
    /// # Errors
    ///
    /// - [`CoreError::KeyNotFound`] from `read` and `remove`
    /// - [`CoreError::NoActiveTransaction`] from `commit` at depth 0
    pub fn execute(&mut self, command: Command, key: &str, value: &str) -> CoreResult<String> {
        match command {
            Command::Write => {
                self.write(key, value);
                Ok(String::new())
            }
            Command::Read => self.read(key),
            Command::Remove => self.remove(key).map(|()| String::new()),
            Command::Begin => {
                self.begin();
                Ok(String::new())
            }
            Command::Commit => self.commit().map(|()| String::new()),
            Command::Discard => {
                self.discard();
                Ok(String::new())
            }
        }
    }

    /// Sets `key` to `value`.
    pub fn write(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.route(Operation::write(key, value));
    }

    /// Returns the value of `key` as seen from the current frame.
    ///
    /// # Errors
    ///
    /// Returns [`CoreError::KeyNotFound`] if the key was never written, or if
    /// the most recent visible operation on it is a tombstone.
    pub fn read(&self, key: &str) -> CoreResult<String> {
        self.resolve(key)
            .map(str::to_owned)
            .ok_or_else(|| CoreError::key_not_found(key))
    }

    /// Removes `key`.
    ///
    /// # Errors
    ///
    /// Returns [`CoreError::KeyNotFound`] if the key is not visible from the
    /// current frame. Nothing is recorded in that case.
    pub fn remove(&mut self, key: &str) -> CoreResult<()> {
        if self.resolve(key).is_none() {
            return Err(CoreError::key_not_found(key));
        }
        self.route(Operation::remove(key));
        Ok(())
    }

    /// Opens a nested transaction.
    pub fn begin(&mut self) {
        let id = FrameId::new(self.frames.len());
        self.frames.push(Frame::child(self.current));
        self.current = id;
        debug!(depth = self.depth(), "transaction begun");
    }

    /// Commits the innermost transaction into its parent.
    ///
    /// When this closes the outermost transaction, every operation collected
    /// along the way is replayed onto the durable map in order.
    ///
    /// # Errors
    ///
    /// Returns [`CoreError::NoActiveTransaction`] if no transaction is open.
    pub fn commit(&mut self) -> CoreResult<()> {
        let child = self.pop_frame().ok_or(CoreError::NoActiveTransaction)?;
        let count = child.operations().len();
        self.current_frame_mut().absorb(child);
        debug!(depth = self.depth(), operations = count, "transaction committed");

        if self.current.is_base() && self.current_frame().has_operations() {
            self.flush();
        }
        Ok(())
    }

    /// Drops the innermost transaction and everything it recorded.
    ///
    /// Does nothing when no transaction is open.
    pub fn discard(&mut self) {
        if let Some(frame) = self.pop_frame() {
            debug!(
                depth = self.depth(),
                dropped = frame.operations().len(),
                "transaction discarded"
            );
        }
    }

    /// Returns the number of open transactions.
    #[must_use]
    pub fn depth(&self) -> usize {
        self.frames.len() - 1
    }

    /// Returns `true` if at least one transaction is open.
    #[must_use]
    pub fn in_transaction(&self) -> bool {
        !self.current.is_base()
    }

    /// Returns the handle of the innermost frame.
    #[must_use]
    pub fn current_frame_id(&self) -> FrameId {
        self.current
    }

    /// Returns the operations recorded in the innermost frame, oldest first.
    ///
    /// Always empty when no transaction is open.
    #[must_use]
    pub fn pending_operations(&self) -> &[Operation] {
        self.current_frame().operations()
    }

    /// Returns the committed state.
    #[must_use]
    pub fn durable(&self) -> &B {
        &self.durable
    }

    fn frame(&self, id: FrameId) -> &Frame {
        &self.frames[id.as_usize()]
    }

    fn current_frame(&self) -> &Frame {
        self.frame(self.current)
    }

    fn current_frame_mut(&mut self) -> &mut Frame {
        &mut self.frames[self.current.as_usize()]
    }

    /// Walks the open frames innermost first, then falls back to the map.
    ///
    /// The base frame is never scanned: its log is empty outside `commit`.
    fn resolve(&self, key: &str) -> Option<&str> {
        let mut id = self.current;
        while let Some(parent) = self.frame(id).parent() {
            if let Some(op) = self.frame(id).latest(key) {
                return op.value();
            }
            id = parent;
        }
        self.durable.get(key)
    }

    /// Sends an operation to the map at depth 0, otherwise to the current log.
    fn route(&mut self, op: Operation) {
        if self.current.is_base() {
            trace!(key = op.key(), write = op.is_write(), "applying to durable map");
            op.apply_to(&mut self.durable);
        } else {
            self.current_frame_mut().record(op);
        }
    }

    /// Removes the current frame and makes its parent current.
    ///
    /// Returns `None` at the base frame, which is never removed.
    fn pop_frame(&mut self) -> Option<Frame> {
        let parent = self.current_frame().parent()?;
        let frame = self.frames.pop()?;
        self.current = parent;
        Some(frame)
    }

    /// Replays the base frame's log onto the map and clears it.
    fn flush(&mut self) {
        let ops = self.frames[FrameId::BASE.as_usize()].drain();
        debug!(operations = ops.len(), "flushing to durable map");
        for op in ops {
            op.apply_to(&mut self.durable);
        }
    }
}
