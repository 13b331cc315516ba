//! # NestKV Testkit
//!
//! Test utilities for NestKV.
//!
//! This crate provides:
//! - Store fixtures and ready-made scenarios
//! - Property-based test generators using proptest
//! - A reference model of the store's observable behaviour
//!
//! ## Usage
//!
//! ```rust
//! use nestkv_testkit::prelude::*;
//!
//! let store = scenarios::nested_store(&["a", "b"]);
//! assert_eq!(store.depth(), 2);
//! ```

#![deny(unsafe_code)]
#![warn(missing_docs)]

pub mod fixtures;
pub mod generators;
pub mod model;

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::fixtures::*;
    pub use crate::generators::*;
    pub use crate::model::*;
}

pub use fixtures::*;
pub use generators::*;
pub use model::*;
