//! In-memory durable map.

use crate::backend::MapBackend;
use std::collections::HashMap;

/// A key-value map held in process memory.
///
/// "Durable" here means committed: the map only ever holds state that no
/// open transaction can roll back. Nothing survives a process restart.
///
/// # Example
///
/// ```rust
/// use nestkv_storage::{DurableMap, MapBackend};
///
/// let mut map = DurableMap::new();
/// map.set("k".to_string(), "v".to_string());
/// assert_eq!(map.len(), 1);
/// ```
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct DurableMap {
    entries: HashMap<String, String>,
}

impl DurableMap {
    /// Creates a new empty map.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a map pre-populated with the given entries.
    ///
    /// Useful for seeding test scenarios.
    #[must_use]
    pub fn with_entries<I, K, V>(entries: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        Self {
            entries: entries
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }

    /// Returns a copy of all entries.
    #[must_use]
    pub fn entries(&self) -> HashMap<String, String> {
        self.entries.clone()
    }
}

impl MapBackend for DurableMap {
    fn get(&self, key: &str) -> Option<&str> {
        self.entries.get(key).map(String::as_str)
    }

    fn set(&mut self, key: String, value: String) {
        self.entries.insert(key, value);
    }

    fn delete(&mut self, key: &str) -> bool {
        self.entries.remove(key).is_some()
    }

    fn len(&self) -> usize {
        self.entries.len()
    }

    fn keys(&self) -> Vec<String> {
        self.entries.keys().cloned().collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn map_new_is_empty() {
        let map = DurableMap::new();
        assert!(map.is_empty());
        assert_eq!(map.len(), 0);
    }

    #[test]
    fn map_set_then_get() {
        let mut map = DurableMap::new();
        map.set("a".into(), "hi".into());
        assert_eq!(map.get("a"), Some("hi"));
        assert!(map.contains("a"));
    }

    #[test]
    fn map_set_replaces_value() {
        let mut map = DurableMap::new();
        map.set("a".into(), "hi".into());
        map.set("a".into(), "bye".into());
        assert_eq!(map.get("a"), Some("bye"));
        assert_eq!(map.len(), 1);
    }

    #[test]
    fn map_delete_present_key() {
        let mut map = DurableMap::new();
        map.set("a".into(), "hi".into());
        assert!(map.delete("a"));
        assert_eq!(map.get("a"), None);
    }

    #[test]
    fn map_delete_missing_key_is_noop() {
        let mut map = DurableMap::with_entries([("b", "x")]);
        assert!(!map.delete("a"));
        assert_eq!(map.len(), 1);
    }

    #[test]
    fn map_with_entries() {
        let map = DurableMap::with_entries([("a", "1"), ("b", "2")]);
        let mut keys = map.keys();
        keys.sort();
        assert_eq!(keys, vec!["a".to_string(), "b".to_string()]);
    }

    proptest! {
        #[test]
        fn map_last_set_wins(key in "[a-z]{1,8}", values in prop::collection::vec("[a-z]{0,8}", 1..10)) {
            let mut map = DurableMap::new();
            for value in &values {
                map.set(key.clone(), value.clone());
            }
            prop_assert_eq!(map.get(&key), values.last().map(String::as_str));
        }
    }
}
