//! Domain-specific assertion macros for memkv harnesses.
//!
//! These wrap `pretty_assertions` and add context-rich failure messages that
//! make it clear *which* store invariant was violated.

// ---------------------------------------------------------------------------
// Ordering assertions
// ---------------------------------------------------------------------------

/// Assert that a sequence of keys is strictly ascending (sorted, no
/// duplicates).
///
/// ```rust
/// assert_strictly_ascending!(store.keys());
/// ```
#[macro_export]
macro_rules! assert_strictly_ascending {
    ($keys:expr) => {{
        let keys: Vec<_> = $keys.into_iter().collect();
        if let Some(idx) = keys.windows(2).position(|w| w[0] >= w[1]) {
            panic!(
                "assert_strictly_ascending! failed at index {}:\n  {:?} >= {:?}\n  all keys: {:?}",
                idx,
                keys[idx],
                keys[idx + 1],
                keys
            );
        }
    }};
}

// ---------------------------------------------------------------------------
// Content assertions
// ---------------------------------------------------------------------------

/// Assert that a store holds exactly the given `(key, value)` entries, in
/// order.
///
/// ```rust
/// assert_entries!(store, [(1, "a"), (2, "b")]);
/// ```
#[macro_export]
macro_rules! assert_entries {
    ($store:expr, [$(($k:expr, $v:expr)),* $(,)?]) => {{
        let actual: Vec<_> = $store
            .iter()
            .map(|(k, v)| (k.clone(), v.clone()))
            .collect();
        // Same element type as `actual`; keys are taken as-is, values via `Into`.
        let mut expected = actual.clone();
        expected.clear();
        expected.extend([$(($k, $v.into())),*]);
        pretty_assertions::assert_eq!(actual, expected, "store entries differ");
    }};
}

/// Assert that a store has no entry for `key`.
#[macro_export]
macro_rules! assert_absent {
    ($store:expr, $key:expr) => {{
        let key = $key;
        if $store.key_exists(&key) {
            panic!(
                "assert_absent! failed: key {:?} is present with value {:?}",
                key,
                $store.find_by_key(&key)
            );
        }
    }};
}
