//! Session — the single owner of the shell's store.
//!
//! A [`Session`] holds one `Store<String, String>` and applies parsed
//! [`Command`]s to it. Output is returned as lines rather than written, so
//! the driver in [`run`](crate::run) decides where it goes.

use crate::command::{Command, HELP};
use memkv_core::config::ShellConfig;
use memkv_core::Store;
use std::ops::Bound;

/// What the driver should do after a command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// Print these lines and read the next command.
    Continue(Vec<String>),
    Quit,
}

#[derive(Debug, Default)]
pub struct Session {
    store: Store<String, String>,
    list_limit: usize,
}

impl Session {
    pub fn new(config: &ShellConfig) -> Self {
        Self {
            store: Store::new(),
            list_limit: config.list_limit,
        }
    }

    /// Read-only view of the session's store.
    pub fn store(&self) -> &Store<String, String> {
        &self.store
    }

    /// Apply one command to the store.
    pub fn execute(&mut self, command: Command) -> Outcome {
        let lines = match &command {
            Command::Set { key, value } => {
                let inserted = self.store.insert_or_assign(key.clone(), value.clone());
                vec![if inserted { "inserted" } else { "assigned" }.to_string()]
            }
            Command::Add { key, value } => {
                let inserted = self.store.try_insert(key.clone(), value.clone());
                vec![if inserted { "inserted" } else { "exists" }.to_string()]
            }
            Command::Get(key) => vec![self
                .store
                .find_by_key(key.as_str())
                .unwrap_or_else(|| "(absent)".to_string())],
            Command::Has(key) => vec![self.store.key_exists(key.as_str()).to_string()],
            Command::Del(key) => {
                self.store.erase_key(key.as_str());
                vec!["ok".to_string()]
            }
            Command::Find(value) => {
                let keys = self.store.find_by_value(value);
                let total = keys.len();
                self.listing(keys.into_iter(), total)
            }
            Command::Prefix(prefix) => {
                let matches = self.store.find_if(|k, _| k.starts_with(prefix.as_str()));
                let total = matches.len();
                self.listing(matches.into_iter().map(|(k, v)| format_entry(&k, &v)), total)
            }
            Command::Range { from, to } => {
                if from > to {
                    self.listing(std::iter::empty(), 0)
                } else {
                    let bounds = (Bound::Included(from.as_str()), Bound::Excluded(to.as_str()));
                    let total = self.store.range::<str, _>(bounds).count();
                    let lines = self
                        .store
                        .range::<str, _>(bounds)
                        .map(|(k, v)| format_entry(k, v));
                    self.listing(lines, total)
                }
            }
            Command::Purge(prefix) => {
                let before = self.store.len();
                self.store.erase_if(|k, _| k.starts_with(prefix.as_str()));
                vec![format!("removed {}", before - self.store.len())]
            }
            Command::List => {
                let lines = self.store.iter().map(|(k, v)| format_entry(k, v));
                self.listing(lines, self.store.len())
            }
            Command::Size => vec![self.store.len().to_string()],
            Command::Empty => vec![self.store.is_empty().to_string()],
            Command::Help => HELP.iter().map(|line| line.to_string()).collect(),
            Command::Quit => {
                tracing::debug!(size = self.store.len(), "shell: quit");
                return Outcome::Quit;
            }
        };

        tracing::debug!(command = ?command, size = self.store.len(), "shell: executed");
        Outcome::Continue(lines)
    }

    /// Collect listing lines, truncated to `list_limit` when one is set.
    fn listing(&self, lines: impl Iterator<Item = String>, total: usize) -> Vec<String> {
        if total == 0 {
            return vec!["(none)".to_string()];
        }
        let limit = if self.list_limit == 0 {
            total
        } else {
            self.list_limit.min(total)
        };
        let mut out: Vec<String> = lines.take(limit).collect();
        if total > limit {
            out.push(format!("... {} more", total - limit));
        }
        out
    }
}

fn format_entry(key: &str, value: &str) -> String {
    format!("{key} = {value}")
}
