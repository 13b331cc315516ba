//! Core type definitions for NestKV.

use std::fmt;

/// Handle of a transaction frame in the engine's frame arena.
///
/// Frame `0` is always the base frame. Handles are reused once a frame is
/// committed or discarded.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct FrameId(usize);

impl FrameId {
    /// The base frame, present for the whole lifetime of a store.
    pub const BASE: Self = Self(0);

    /// Creates a frame handle from an arena index.
    #[must_use]
    pub const fn new(index: usize) -> Self {
        Self(index)
    }

    /// Returns the arena index.
    #[must_use]
    pub const fn as_usize(self) -> usize {
        self.0
    }

    /// Returns `true` for the base frame.
    #[must_use]
    pub const fn is_base(self) -> bool {
        self.0 == Self::BASE.0
    }
}

impl fmt::Display for FrameId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "frame:{}", self.0)
    }
}
