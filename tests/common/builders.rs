#![allow(dead_code)]
//! Test builders — ergonomic constructors for stores and scripted sessions.
//!
//! These builders are designed for readability in test assertions, not for
//! production use. They panic on invalid input rather than returning `Result`.

use memkv::{ShellConfig, Store};

// ---------------------------------------------------------------------------
// StoreBuilder
// ---------------------------------------------------------------------------

/// Fluent builder for [`Store`] fixtures. Every `entry` goes through
/// `insert_or_assign`, so later duplicates win.
///
/// # Example
///
/// ```rust
/// let store = StoreBuilder::new()
///     .entry(1, "a")
///     .entry(3, "c")
///     .build();
/// ```
pub struct StoreBuilder<K, V> {
    entries: Vec<(K, V)>,
}

impl<K: Ord, V> StoreBuilder<K, V> {
    pub fn new() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    pub fn entry(mut self, key: impl Into<K>, value: impl Into<V>) -> Self {
        self.entries.push((key.into(), value.into()));
        self
    }

    pub fn build(self) -> Store<K, V> {
        self.entries.into_iter().collect()
    }
}

// ---------------------------------------------------------------------------
// Convenience constructors
// ---------------------------------------------------------------------------

/// The three-entry store used throughout the scenario tests:
/// `(1,"a"), (3,"c"), (2,"b")` inserted in that order.
pub fn abc_store() -> Store<u32, String> {
    StoreBuilder::new()
        .entry(1u32, "a")
        .entry(3u32, "c")
        .entry(2u32, "b")
        .build()
}

/// `n` entries keyed `0..n`, each value the key's decimal string with the
/// given suffix.
pub fn numbered_store(n: u32, suffix: &str) -> Store<u32, String> {
    (0..n).map(|i| (i, format!("{i}{suffix}"))).collect()
}

// ---------------------------------------------------------------------------
// Shell helpers
// ---------------------------------------------------------------------------

/// Run `script` through a non-interactive shell and return everything it
/// printed.
pub fn run_script(config: &ShellConfig, script: &str) -> String {
    let mut out = Vec::new();
    memkv::shell::run(config, script.as_bytes(), &mut out, false).expect("in-memory I/O cannot fail");
    String::from_utf8(out).expect("shell output is UTF-8")
}
