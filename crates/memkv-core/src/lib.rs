//! memkv-core — ordered in-memory key-value store.
//!
//! This crate exposes the [`Store`] container together with the shared
//! configuration and error types used by the shell and the binary.
//!
//! # Layout
//!
//! ```text
//! store   ── Store<K, V>, Snapshot<K, V>, borrowing iterators
//! config  ── layered TOML configuration (shell + logging)
//! error   ── errors raised while loading configuration
//! ```
//!
//! The store itself never fails and never locks; see [`store`] for the
//! obligations placed on embeddings that share it between threads.

pub mod config;
pub mod error;
pub mod store;

pub use error::ConfigError;
pub use store::{Snapshot, Store};
