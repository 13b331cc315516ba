//! # NestKV Storage
//!
//! The durable map that sits underneath the NestKV transaction engine.
//!
//! Backends are **plain associative containers**. They do not know about
//! transactions, frames or operation logs: the engine decides when to touch
//! them and in which order.
//!
//! ## Available Backends
//!
//! - [`DurableMap`] - Hash map held in process memory
//!
//! ## Example
//!
//! ```rust
//! use nestkv_storage::{DurableMap, MapBackend};
//!
//! let mut map = DurableMap::new();
//! map.set("a".to_string(), "hi".to_string());
//! assert_eq!(map.get("a"), Some("hi"));
//! assert!(map.delete("a"));
//! assert_eq!(map.get("a"), None);
//! ```

#![deny(unsafe_code)]
#![warn(missing_docs)]

mod backend;
mod memory;

pub use backend::MapBackend;
pub use memory::DurableMap;
