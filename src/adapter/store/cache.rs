//! Bounded least-recently-used map shared behind a lock.

use std::hash::Hash;
use std::num::NonZeroUsize;

use lru::LruCache;
use parking_lot::Mutex;

/// Thread-safe LRU map. Reads through [`get`](Self::get) refresh recency;
/// scans through [`collect`](Self::collect) do not.
pub struct LruStore<K: Hash + Eq, V> {
    inner: Mutex<LruCache<K, V>>,
}

impl<K: Hash + Eq, V: Clone> LruStore<K, V> {
    /// Create a store holding at most `capacity` entries (minimum 1).
    #[must_use]
    pub fn new(capacity: usize) -> Self {
        let capacity = NonZeroUsize::new(capacity).unwrap_or(NonZeroUsize::MIN);
        Self {
            inner: Mutex::new(LruCache::new(capacity)),
        }
    }

    /// Insert or replace, evicting the least recently used entry when full.
    /// Returns the evicted entry; replacing a key evicts nothing.
    pub fn put(&self, key: K, value: V) -> Option<(K, V)> {
        let mut inner = self.inner.lock();
        let replacing = inner.contains(&key);
        let evicted = inner.push(key, value);
        if replacing {
            None
        } else {
            evicted
        }
    }

    /// Insert or replace without evicting. Returns false, leaving the store
    /// untouched, when `key` is new and the store is full.
    pub fn put_if_room(&self, key: K, value: V) -> bool {
        let mut inner = self.inner.lock();
        if !inner.contains(&key) && inner.len() >= inner.cap().get() {
            return false;
        }
        inner.put(key, value);
        true
    }

    pub fn get(&self, key: &K) -> Option<V> {
        self.inner.lock().get(key).cloned()
    }

    pub fn contains(&self, key: &K) -> bool {
        self.inner.lock().contains(key)
    }

    /// Clone every value whose key matches `filter`.
    pub fn collect(&self, mut filter: impl FnMut(&K) -> bool) -> Vec<V> {
        self.inner
            .lock()
            .iter()
            .filter(|(key, _)| filter(key))
            .map(|(_, value)| value.clone())
            .collect()
    }

    pub fn len(&self) -> usize {
        self.inner.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn capacity(&self) -> usize {
        self.inner.lock().cap().get()
    }
}
