//! # NestKV Core
//!
//! Nested transaction engine for NestKV.
//!
//! This crate provides:
//! - [`Store`], the transaction engine: a stack of frames over a durable map
//! - [`Operation`], the write/tombstone records held in frame logs
//! - [`Command`], the fixed command vocabulary and its arities
//! - [`CoreError`], the closed set of failures the engine reports
//!
//! ## Example
//!
//! ```rust
//! use nestkv_core::Store;
//!
//! let mut store = Store::new();
//! store.write("a", "hi");
//! store.begin();
//! store.write("a", "bye");
//! assert_eq!(store.read("a").unwrap(), "bye");
//! store.discard();
//! assert_eq!(store.read("a").unwrap(), "hi");
//! ```

#![deny(unsafe_code)]
#![warn(missing_docs)]

mod command;
mod error;
mod operation;
mod store;
mod transaction;
mod types;

pub use command::Command;
pub use error::{CoreError, CoreResult};
pub use operation::Operation;
pub use store::Store;
pub use types::FrameId;

/// Crate version string.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
