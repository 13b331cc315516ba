//! Transaction frame state.

use crate::operation::Operation;
use crate::types::FrameId;

/// One level of the transaction stack.
#[derive(Debug, Default)]
pub(crate) struct Frame {
    /// Frame beneath this one, `None` for the base frame.
    parent: Option<FrameId>,
    /// Pending operations, oldest first.
    operations: Vec<Operation>,
}

impl Frame {
    /// Creates the base frame.
    pub(crate) fn base() -> Self {
        Self::default()
    }

    /// Creates an empty frame stacked on `parent`.
    pub(crate) fn child(parent: FrameId) -> Self {
        Self {
            parent: Some(parent),
            operations: Vec::new(),
        }
    }

    /// Returns the parent frame, if any.
    pub(crate) fn parent(&self) -> Option<FrameId> {
        self.parent
    }

    pub(crate) fn has_operations(&self) -> bool {
        !self.operations.is_empty()
    }

    pub(crate) fn operations(&self) -> &[Operation] {
        &self.operations
    }

    /// Appends an operation to the log.
    pub(crate) fn record(&mut self, op: Operation) {
        self.operations.push(op);
    }

    /// Appends another frame's log after this one's, preserving order.
    pub(crate) fn absorb(&mut self, child: Frame) {
        self.operations.extend(child.operations);
    }

    /// Empties the log, returning what it held.
    pub(crate) fn drain(&mut self) -> Vec<Operation> {
        std::mem::take(&mut self.operations)
    }

    /// Returns the most recent operation on `key`.
    pub(crate) fn latest(&self, key: &str) -> Option<&Operation> {
        self.operations.iter().rev().find(|op| op.key() == key)
    }
}
