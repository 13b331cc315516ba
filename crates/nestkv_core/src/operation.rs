//! Operations recorded in transaction logs.

use nestkv_storage::MapBackend;

/// A single recorded change to the store.
///
/// Operations are immutable once created. Frames only append them, hand them
/// to a parent on commit, or drop them wholesale on discard.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Operation {
    /// Set `key` to `value`.
    Write {
        /// Target key.
        key: String,
        /// New value.
        value: String,
    },
    /// Tombstone: `key` was removed.
    Remove {
        /// Target key.
        key: String,
    },
}

impl Operation {
    /// Creates a write operation.
    pub fn write(key: impl Into<String>, value: impl Into<String>) -> Self {
        Self::Write {
            key: key.into(),
            value: value.into(),
        }
    }

    /// Creates a tombstone.
    pub fn remove(key: impl Into<String>) -> Self {
        Self::Remove { key: key.into() }
    }

    /// Returns the key this operation targets.
    #[must_use]
    pub fn key(&self) -> &str {
        match self {
            Self::Write { key, .. } | Self::Remove { key } => key,
        }
    }

    /// Returns the written value, or `None` for a tombstone.
    #[must_use]
    pub fn value(&self) -> Option<&str> {
        match self {
            Self::Write { value, .. } => Some(value),
            Self::Remove { .. } => None,
        }
    }

    /// Returns `true` for a write, `false` for a tombstone.
    #[must_use]
    pub fn is_write(&self) -> bool {
        matches!(self, Self::Write { .. })
    }

    /// Applies this operation to a map backend.
    pub(crate) fn apply_to<B: MapBackend>(self, map: &mut B) {
        match self {
            Self::Write { key, value } => map.set(key, value),
            Self::Remove { key } => {
                map.delete(&key);
            }
        }
    }
}
