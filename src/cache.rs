//! Write-once memo map keyed by call input.
//!
//! Entries live as long as the map and are never invalidated. The lock is not held
//! while the value is computed, so a slow fetch does not block readers of other keys.

use ahash::AHashMap;
use std::fmt::Debug;
use std::hash::Hash;
use std::sync::{Mutex, MutexGuard, PoisonError};

#[derive(Debug)]
pub struct Memo<K, V> {
    entries: Mutex<AHashMap<K, V>>,
}

impl<K, V> Default for Memo<K, V> {
    fn default() -> Self {
        Self {
            entries: Mutex::new(AHashMap::new()),
        }
    }
}

impl<K, V> Memo<K, V>
where
    K: Eq + Hash + Debug,
    V: Clone,
{
    pub fn new() -> Self {
        Self::default()
    }

    fn lock(&self) -> MutexGuard<'_, AHashMap<K, V>> {
        self.entries.lock().unwrap_or_else(PoisonError::into_inner)
    }

    pub fn get(&self, key: &K) -> Option<V> {
        self.lock().get(key).cloned()
    }

    /// Cached value for `key`, or the result of `compute` stored under `key`.
    ///
    /// Errors are returned as-is and not cached. Hits are logged at `trace`.
    pub fn get_or_try_insert_with<E, F>(&self, key: K, compute: F) -> Result<V, E>
    where
        F: FnOnce() -> Result<V, E>,
    {
        if let Some(hit) = self.get(&key) {
            log::trace!("cache hit for {key:?}");
            return Ok(hit);
        }
        let value = compute()?;
        // First writer wins if two callers raced on the same key.
        Ok(self.lock().entry(key).or_insert(value).clone())
    }

    pub fn len(&self) -> usize {
        self.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.lock().is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;

    #[test]
    fn computes_once_per_key() {
        let memo: Memo<&str, usize> = Memo::new();
        let calls = Cell::new(0);
        let compute = |v: usize| {
            calls.set(calls.get() + 1);
            Ok::<_, ()>(v)
        };
        assert_eq!(memo.get_or_try_insert_with("a", || compute(1)), Ok(1));
        assert_eq!(memo.get_or_try_insert_with("a", || compute(99)), Ok(1));
        assert_eq!(memo.get_or_try_insert_with("b", || compute(2)), Ok(2));
        assert_eq!(calls.get(), 2);
        assert_eq!(memo.len(), 2);
    }

    #[test]
    fn errors_are_not_cached() {
        let memo: Memo<u8, String> = Memo::new();
        let err = memo.get_or_try_insert_with(1, || Err::<String, _>("boom"));
        assert_eq!(err, Err("boom"));
        assert!(memo.is_empty());
        let ok = memo.get_or_try_insert_with(1, || Ok::<_, &str>("fine".to_string()));
        assert_eq!(ok.as_deref(), Ok("fine"));
        assert_eq!(memo.get(&1).as_deref(), Some("fine"));
    }

    #[test]
    fn unit_key_holds_a_single_entry() {
        let memo: Memo<(), Vec<&str>> = Memo::new();
        let first = memo.get_or_try_insert_with((), || Ok::<_, ()>(vec!["AT", "DE"]));
        let second = memo.get_or_try_insert_with((), || Err(()));
        assert_eq!(first, second);
        assert_eq!(memo.len(), 1);
    }
}
