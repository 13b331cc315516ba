//! Store fixtures and scenario helpers.

use nestkv_core::Store;
use nestkv_storage::DurableMap;

/// Creates a store whose durable map already holds `entries`.
pub fn seeded_store(entries: &[(&str, &str)]) -> Store {
    Store::with_backend(DurableMap::with_entries(entries.iter().copied()))
}

/// Runs `f` against a fresh store and returns the store afterwards.
pub fn with_store<F>(f: F) -> Store
where
    F: FnOnce(&mut Store),
{
    let mut store = Store::new();
    f(&mut store);
    store
}

/// Test scenario helpers.
pub mod scenarios {
    use super::*;

    /// Creates a store with `count` committed keys `key_0..key_{count-1}`.
    pub fn populated_store(count: usize) -> Store {
        with_store(|store| {
            for i in 0..count {
                store.write(format!("key_{}", i), format!("value_{}", i));
            }
        })
    }

    /// Creates a store with one open transaction per entry of `values`.
    ///
    /// Frame `n` writes `values[n]` to the key `"k"`, so the innermost value
    /// is visible and every outer frame holds an older one.
    pub fn nested_store(values: &[&str]) -> Store {
        with_store(|store| {
            for value in values {
                store.begin();
                store.write("k", *value);
            }
        })
    }
}
