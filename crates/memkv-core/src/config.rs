//! Configuration types for memkv.
//!
//! [`Config::load`] layers `~/.config/memkv/config.toml` (if present) on top of
//! the embedded defaults. [`Config::load_from`] does the same with an explicit
//! file, which must exist. [`Config::defaults`] returns the defaults without
//! touching the filesystem (useful in tests).

use crate::error::ConfigError;
use serde::Deserialize;
use std::path::{Path, PathBuf};

// ---------------------------------------------------------------------------
// Embedded defaults
// ---------------------------------------------------------------------------

const DEFAULT_CONFIG: &str = r#"
[shell]
prompt        = "memkv> "
echo_commands = false
list_limit    = 0

[logging]
filter = "warn"
"#;

// ---------------------------------------------------------------------------
// Public config types
// ---------------------------------------------------------------------------

/// Top-level configuration, loaded from `~/.config/memkv/config.toml`.
#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub shell: ShellConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
}

/// `[shell]` section of `config.toml`.
#[derive(Debug, Clone, Deserialize)]
pub struct ShellConfig {
    #[serde(default = "default_prompt")]
    pub prompt: String,
    /// Echo each command before its output; handy when replaying scripts.
    #[serde(default)]
    pub echo_commands: bool,
    /// Maximum number of entries printed by listing commands. `0` disables
    /// the limit.
    #[serde(default)]
    pub list_limit: usize,
}

fn default_prompt() -> String { "memkv> ".to_string() }

impl Default for ShellConfig {
    fn default() -> Self {
        Self {
            prompt: default_prompt(),
            echo_commands: false,
            list_limit: 0,
        }
    }
}

/// `[logging]` section of `config.toml`.
#[derive(Debug, Clone, Deserialize)]
pub struct LoggingConfig {
    /// `tracing_subscriber::EnvFilter` directive used when `RUST_LOG` is unset.
    #[serde(default = "default_filter")]
    pub filter: String,
}

fn default_filter() -> String { "warn".to_string() }

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            filter: default_filter(),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::defaults()
    }
}

impl Config {
    /// Load from `~/.config/memkv/config.toml`, layered on top of the built-in
    /// defaults. A missing file is not an error.
    pub fn load() -> Result<Self, ConfigError> {
        Self::layered(Some(&config_path()), false)
    }

    /// Load from an explicit file, layered on top of the built-in defaults.
    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        if !path.exists() {
            return Err(ConfigError::NotFound(path.to_path_buf()));
        }
        Self::layered(Some(path), true)
    }

    /// Like [`Config::load`], but a broken user file yields the defaults. The
    /// error is handed back so the caller can report it once logging is up.
    pub fn load_or_defaults() -> (Self, Option<ConfigError>) {
        Self::or_defaults(Self::load())
    }

    fn or_defaults(loaded: Result<Self, ConfigError>) -> (Self, Option<ConfigError>) {
        match loaded {
            Ok(cfg) => (cfg, None),
            Err(err) => (Self::defaults(), Some(err)),
        }
    }

    /// Return the built-in defaults without touching the filesystem.
    pub fn defaults() -> Self {
        Self {
            shell: ShellConfig::default(),
            logging: LoggingConfig::default(),
        }
    }

    fn layered(user: Option<&Path>, required: bool) -> Result<Self, ConfigError> {
        let mut builder = config::Config::builder()
            .add_source(config::File::from_str(DEFAULT_CONFIG, config::FileFormat::Toml));
        if let Some(path) = user {
            // Always TOML, whatever the file is called.
            builder = builder.add_source(
                config::File::from(path)
                    .format(config::FileFormat::Toml)
                    .required(required),
            );
        }
        Ok(builder.build()?.try_deserialize()?)
    }
}

// ---------------------------------------------------------------------------
// Path helpers
// ---------------------------------------------------------------------------

fn config_path() -> PathBuf {
    std::env::var("XDG_CONFIG_HOME")
        .map(PathBuf::from)
        .unwrap_or_else(|_| {
            PathBuf::from(std::env::var("HOME").unwrap_or_else(|_| ".".to_string()))
                .join(".config")
        })
        .join("memkv")
        .join("config.toml")
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
