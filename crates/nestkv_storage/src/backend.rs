//! Map backend trait definition.

/// The authoritative key-value map beneath the transaction engine.
///
/// # Invariants
///
/// - Keys are unique; `set` on an existing key replaces its value
/// - `delete` on a missing key is a no-op
/// - No ordering is guaranteed by `keys`
///
/// # Implementors
///
/// - [`super::DurableMap`] - In-memory hash map
pub trait MapBackend {
    /// Returns the value stored under `key`, if any.
    fn get(&self, key: &str) -> Option<&str>;

    /// Stores `value` under `key`, replacing any previous value.
    fn set(&mut self, key: String, value: String);

    /// Removes `key`.
    ///
    /// Returns `true` if the key was present.
    fn delete(&mut self, key: &str) -> bool;

    /// Returns the number of keys stored.
    fn len(&self) -> usize;

    /// Returns `true` if no keys are stored.
    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Returns `true` if `key` is stored.
    fn contains(&self, key: &str) -> bool {
        self.get(key).is_some()
    }

    /// Returns all stored keys, in no particular order.
    fn keys(&self) -> Vec<String>;
}
