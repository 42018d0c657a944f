//! Store — ordered in-memory mapping of unique keys to values.
//!
//! [`Store`] is the one container of this crate. Keys are unique and kept in
//! ascending order; every query hands back owned copies, so results stay valid
//! after the store is mutated or after a lock around it is released.
//!
//! # Insertion policies
//!
//! | method                        | key absent      | key present                |
//! |-------------------------------|-----------------|----------------------------|
//! | [`Store::insert_or_assign`]   | insert, `true`  | overwrite value, `false`   |
//! | [`Store::try_insert`]         | insert, `true`  | leave untouched, `false`   |
//!
//! # Synchronization
//!
//! The store does no locking of its own. Mutators take `&mut self` and
//! queries take `&self`, so sharing a store between threads requires the
//! owner to wrap it (`Mutex`, `RwLock`) or confine it to one task. Borrowing
//! traversals ([`Store::iter`], [`Store::range`]) hold a shared borrow for
//! their whole lifetime, which rules out mutation while a position is live.

use std::borrow::Borrow;
use std::collections::btree_map::{self, BTreeMap};
use std::iter::FusedIterator;
use std::ops::RangeBounds;

// ---------------------------------------------------------------------------
// Store
// ---------------------------------------------------------------------------

/// Ordered key-value store with upsert and insert-if-absent semantics.
///
/// # Example
///
/// ```rust
/// use memkv_core::Store;
///
/// let mut store = Store::new();
/// assert!(store.insert_or_assign(1, "a"));
/// assert!(store.insert_or_assign(3, "c"));
/// assert!(store.insert_or_assign(2, "b"));
///
/// assert!(!store.try_insert(2, "x"));
/// assert_eq!(store.find_by_key(&2), Some("b"));
///
/// store.erase_if(|k, _| *k > 1);
/// assert_eq!(store.len(), 1);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Store<K, V> {
    entries: BTreeMap<K, V>,
}

impl<K, V> Default for Store<K, V> {
    fn default() -> Self {
        Self::new()
    }
}

impl<K, V> Store<K, V> {
    /// Create an empty store.
    pub const fn new() -> Self {
        Self {
            entries: BTreeMap::new(),
        }
    }

    /// Number of entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Borrowing traversal of every entry in ascending key order.
    ///
    /// Each call starts a fresh traversal. The iterator borrows the store, so
    /// no insert or erase can happen until it is dropped.
    pub fn iter(&self) -> Iter<'_, K, V> {
        Iter {
            inner: self.entries.iter(),
        }
    }

    /// Keys in ascending order.
    pub fn keys(&self) -> impl DoubleEndedIterator<Item = &K> + ExactSizeIterator + '_ {
        self.entries.keys()
    }

    /// Values in ascending key order.
    pub fn values(&self) -> impl DoubleEndedIterator<Item = &V> + ExactSizeIterator + '_ {
        self.entries.values()
    }

    /// Owned copy of every entry, independent of later mutation.
    pub fn snapshot(&self) -> Snapshot<K, V>
    where
        K: Clone,
        V: Clone,
    {
        Snapshot {
            entries: self
                .entries
                .iter()
                .map(|(k, v)| (k.clone(), v.clone()))
                .collect(),
        }
    }
}

impl<K: Ord, V> Store<K, V> {
    /// Insert `key`, or overwrite its value if already present.
    ///
    /// Returns `true` when a new entry was created and `false` when an
    /// existing entry was reassigned.
    pub fn insert_or_assign(&mut self, key: K, value: V) -> bool {
        self.entries.insert(key, value).is_none()
    }

    /// Insert `key` only if it is absent.
    ///
    /// Returns `true` when a new entry was created. When the key already
    /// exists the stored entry is left unmodified, `value` is dropped, and
    /// `false` is returned.
    pub fn try_insert(&mut self, key: K, value: V) -> bool {
        match self.entries.entry(key) {
            btree_map::Entry::Vacant(slot) => {
                slot.insert(value);
                true
            }
            btree_map::Entry::Occupied(_) => false,
        }
    }

    pub fn key_exists<Q>(&self, key: &Q) -> bool
    where
        K: Borrow<Q>,
        Q: Ord + ?Sized,
    {
        self.entries.contains_key(key)
    }

    /// Copy of the value stored under `key`, or `None` if absent.
    pub fn find_by_key<Q>(&self, key: &Q) -> Option<V>
    where
        K: Borrow<Q>,
        Q: Ord + ?Sized,
        V: Clone,
    {
        self.entries.get(key).cloned()
    }

    /// Copies of every entry for which `predicate` holds, in ascending key
    /// order. Returns an empty `Vec` when nothing matches.
    pub fn find_if<F>(&self, mut predicate: F) -> Vec<(K, V)>
    where
        K: Clone,
        V: Clone,
        F: FnMut(&K, &V) -> bool,
    {
        let matches: Vec<(K, V)> = self
            .entries
            .iter()
            .filter(|&(k, v)| predicate(k, v))
            .map(|(k, v)| (k.clone(), v.clone()))
            .collect();
        tracing::trace!(
            scanned = self.entries.len(),
            matched = matches.len(),
            "store: find_if"
        );
        matches
    }

    /// Keys of every entry whose value equals `value`, in ascending order.
    pub fn find_by_value(&self, value: &V) -> Vec<K>
    where
        K: Clone,
        V: PartialEq,
    {
        let keys: Vec<K> = self
            .entries
            .iter()
            .filter(|&(_, v)| v == value)
            .map(|(k, _)| k.clone())
            .collect();
        tracing::trace!(
            scanned = self.entries.len(),
            matched = keys.len(),
            "store: find_by_value"
        );
        keys
    }

    /// Remove `key` if present. Absent keys are a no-op.
    pub fn erase_key<Q>(&mut self, key: &Q)
    where
        K: Borrow<Q>,
        Q: Ord + ?Sized,
    {
        self.entries.remove(key);
    }

    /// Remove every entry for which `predicate` holds, in a single pass.
    pub fn erase_if<F>(&mut self, mut predicate: F)
    where
        F: FnMut(&K, &V) -> bool,
    {
        let before = self.entries.len();
        self.entries.retain(|k, v| !predicate(k, &*v));
        tracing::trace!(
            removed = before - self.entries.len(),
            remaining = self.entries.len(),
            "store: erase_if"
        );
    }

    /// Borrowing traversal of the entries whose keys fall in `bounds`.
    ///
    /// # Panics
    ///
    /// Panics if the range start is greater than its end, or if start and
    /// end are equal and both excluded.
    pub fn range<Q, R>(&self, bounds: R) -> Range<'_, K, V>
    where
        K: Borrow<Q>,
        Q: Ord + ?Sized,
        R: RangeBounds<Q>,
    {
        Range {
            inner: self.entries.range(bounds),
        }
    }
}

impl<K: Ord, V> FromIterator<(K, V)> for Store<K, V> {
    /// Later duplicates overwrite earlier ones, as with
    /// [`Store::insert_or_assign`].
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut store = Store::new();
        store.extend(iter);
        store
    }
}

impl<K: Ord, V> Extend<(K, V)> for Store<K, V> {
    fn extend<I: IntoIterator<Item = (K, V)>>(&mut self, iter: I) {
        for (key, value) in iter {
            self.insert_or_assign(key, value);
        }
    }
}

impl<'a, K, V> IntoIterator for &'a Store<K, V> {
    type Item = (&'a K, &'a V);
    type IntoIter = Iter<'a, K, V>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<K, V> IntoIterator for Store<K, V> {
    type Item = (K, V);
    type IntoIter = IntoIter<K, V>;

    fn into_iter(self) -> Self::IntoIter {
        IntoIter {
            inner: self.entries.into_iter(),
        }
    }
}

// ---------------------------------------------------------------------------
// Iterators
// ---------------------------------------------------------------------------

/// Ascending traversal over a [`Store`], see [`Store::iter`].
#[derive(Debug, Clone)]
pub struct Iter<'a, K, V> {
    inner: btree_map::Iter<'a, K, V>,
}

impl<'a, K, V> Iterator for Iter<'a, K, V> {
    type Item = (&'a K, &'a V);

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl<K, V> DoubleEndedIterator for Iter<'_, K, V> {
    fn next_back(&mut self) -> Option<Self::Item> {
        self.inner.next_back()
    }
}

impl<K, V> ExactSizeIterator for Iter<'_, K, V> {}
impl<K, V> FusedIterator for Iter<'_, K, V> {}

/// Ascending traversal over a key range, see [`Store::range`].
#[derive(Debug, Clone)]
pub struct Range<'a, K, V> {
    inner: btree_map::Range<'a, K, V>,
}

impl<'a, K, V> Iterator for Range<'a, K, V> {
    type Item = (&'a K, &'a V);

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl<K, V> DoubleEndedIterator for Range<'_, K, V> {
    fn next_back(&mut self) -> Option<Self::Item> {
        self.inner.next_back()
    }
}

impl<K, V> FusedIterator for Range<'_, K, V> {}

/// Owning traversal produced by consuming a [`Store`].
#[derive(Debug)]
pub struct IntoIter<K, V> {
    inner: btree_map::IntoIter<K, V>,
}

impl<K, V> Iterator for IntoIter<K, V> {
    type Item = (K, V);

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl<K, V> DoubleEndedIterator for IntoIter<K, V> {
    fn next_back(&mut self) -> Option<Self::Item> {
        self.inner.next_back()
    }
}

impl<K, V> ExactSizeIterator for IntoIter<K, V> {}
impl<K, V> FusedIterator for IntoIter<K, V> {}

// ---------------------------------------------------------------------------
// Snapshot
// ---------------------------------------------------------------------------

/// Owned, ascending copy of a store's entries taken by [`Store::snapshot`].
///
/// A snapshot shares nothing with its store; it can be read after the store
/// changes or after the lock guarding the store has been released.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Snapshot<K, V> {
    entries: Vec<(K, V)>,
}

impl<K, V> Snapshot<K, V> {
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, (K, V)> {
        self.entries.iter()
    }

    /// Binary search for `key` among the copied entries.
    pub fn get<Q>(&self, key: &Q) -> Option<&V>
    where
        K: Borrow<Q>,
        Q: Ord + ?Sized,
    {
        self.entries
            .binary_search_by(|(k, _)| k.borrow().cmp(key))
            .ok()
            .map(|idx| &self.entries[idx].1)
    }

    pub fn into_entries(self) -> Vec<(K, V)> {
        self.entries
    }
}

impl<K, V> IntoIterator for Snapshot<K, V> {
    type Item = (K, V);
    type IntoIter = std::vec::IntoIter<(K, V)>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.into_iter()
    }
}

impl<'a, K, V> IntoIterator for &'a Snapshot<K, V> {
    type Item = &'a (K, V);
    type IntoIter = std::slice::Iter<'a, (K, V)>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
