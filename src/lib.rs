//! memkv — ordered in-memory key-value store.
//!
//! This crate re-exports the store and configuration from `memkv-core` and
//! the command shell from `memkv-shell`, so that integration tests and the
//! binary import everything from one place.
//!
//! # Architecture
//!
//! ```text
//! CLI (clap) ──► Shell ──► Session ──► Store<String, String>
//!                  ▲
//!               Config
//! ```
//!
//! The store is synchronization-free; the shell is its single owner.

pub mod logging;

pub use memkv_core::config::{Config, LoggingConfig, ShellConfig};
pub use memkv_core::store::{IntoIter, Iter, Range, Snapshot, Store};
pub use memkv_core::ConfigError;
pub use memkv_shell as shell;
