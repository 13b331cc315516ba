//! Benchmark utilities for NestKV.

#![deny(unsafe_code)]
#![warn(missing_docs)]

use nestkv_core::Store;

/// Generate `count` distinct keys.
pub fn generate_keys(count: usize) -> Vec<String> {
    (0..count).map(|i| format!("key_{}", i)).collect()
}

/// Build a store with `depth` open transactions, each writing every key once.
pub fn stacked_store(depth: usize, keys: &[String]) -> Store {
    let mut store = Store::new();
    for level in 0..depth {
        store.begin();
        for key in keys {
            store.write(key.as_str(), format!("v{}", level));
        }
    }
    store
}
