//! Bounded LRU keyed by model plus requested size.

use std::hash::Hash;
use std::sync::Arc;

use indexmap::IndexMap;

/// Capacity used when config doesn't override it.
pub const DEFAULT_MODEL_CACHE_CAPACITY: usize = 100;

/// Cache key: the same model requested at different sizes gets separate entries.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ModelKey<K> {
    pub model: K,
    pub width: u32,
    pub height: u32,
}

/// Fixed-capacity map ordered from least to most recently used.
///
/// Values are handed out as `Arc`s, so a hit returns the very instance that
/// was inserted.
#[derive(Debug)]
pub struct ModelCache<K, V> {
    entries: IndexMap<ModelKey<K>, Arc<V>>,
    capacity: usize,
}

impl<K, V> ModelCache<K, V>
where
    K: Clone + Eq + Hash,
{
    /// A zero capacity is bumped to 1. Pre-allocation is capped at the
    /// default capacity; larger caches grow as entries arrive.
    pub fn new(capacity: usize) -> Self {
        let capacity = capacity.max(1);
        Self {
            entries: IndexMap::with_capacity(capacity.min(DEFAULT_MODEL_CACHE_CAPACITY)),
            capacity,
        }
    }

    /// Look up an entry and mark it most recently used.
    pub fn get(&mut self, model: &K, width: u32, height: u32) -> Option<Arc<V>> {
        let key = ModelKey {
            model: model.clone(),
            width,
            height,
        };
        let index = self.entries.get_index_of(&key)?;
        let last = self.entries.len() - 1;
        self.entries.move_index(index, last);
        self.entries.get_index(last).map(|(_, v)| Arc::clone(v))
    }

    /// Insert (or replace) an entry as most recently used, evicting the least
    /// recently used ones beyond capacity. Returns the shared value.
    pub fn put(&mut self, model: K, width: u32, height: u32, value: V) -> Arc<V> {
        let key = ModelKey {
            model,
            width,
            height,
        };
        let value = Arc::new(value);
        self.entries.shift_remove(&key);
        self.entries.insert(key, Arc::clone(&value));
        while self.entries.len() > self.capacity {
            self.entries.shift_remove_index(0);
        }
        value
    }

    pub fn contains(&self, model: &K, width: u32, height: u32) -> bool {
        self.entries.contains_key(&ModelKey {
            model: model.clone(),
            width,
            height,
        })
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }
}
