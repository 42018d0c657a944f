//! Error types for memkv-core.
//!
//! The store has no failure modes of its own: absence is reported through
//! `bool`, `Option`, and empty `Vec` results. Errors only arise at the edges,
//! while reading configuration.

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while loading a [`Config`](crate::config::Config).
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("config file not found: {}", .0.display())]
    NotFound(PathBuf),

    #[error("invalid configuration: {0}")]
    Invalid(#[from] config::ConfigError),
}
