//! Bounded memoization of color construction.

use std::collections::{BTreeMap, HashMap};
use std::hash::Hash;
use std::sync::atomic::{AtomicU64, Ordering};

use parking_lot::Mutex;
use tracing::trace;

use crate::arg::ColorArg;
use crate::color::Color;
use crate::error::ColorError;

/// Default number of constructions kept by a [`ColorCache`].
pub const DEFAULT_CAPACITY: usize = 512;

/// In-memory LRU cache.
///
/// Recency is tracked with a monotonically increasing stamp per entry, so
/// lookups and evictions are logarithmic in the number of entries.
#[derive(Debug)]
pub struct LruCache<K, V> {
    capacity: usize,
    items: HashMap<K, (V, u64)>,
    order: BTreeMap<u64, K>,
    tick: u64,
}

impl<K: Eq + Hash + Clone, V> LruCache<K, V> {
    pub fn new(capacity: usize) -> Self {
        Self {
            capacity,
            items: HashMap::with_capacity(capacity),
            order: BTreeMap::new(),
            tick: 0,
        }
    }

    /// Get a value and mark it as most recently used.
    pub fn get(&mut self, key: &K) -> Option<&V> {
        let tick = self.next_tick();
        let (value, stamp) = self.items.get_mut(key)?;
        if let Some(k) = self.order.remove(&*stamp) {
            self.order.insert(tick, k);
        }
        *stamp = tick;
        Some(&*value)
    }

    /// Insert a value, returning the key evicted to make room, if any.
    pub fn insert(&mut self, key: K, value: V) -> Option<K> {
        if self.capacity == 0 {
            return None;
        }

        let tick = self.next_tick();
        if let Some((slot, stamp)) = self.items.get_mut(&key) {
            *slot = value;
            if let Some(k) = self.order.remove(&*stamp) {
                self.order.insert(tick, k);
            }
            *stamp = tick;
            return None;
        }

        let mut evicted = None;
        if self.items.len() >= self.capacity
            && let Some((_, oldest)) = self.order.pop_first()
        {
            self.items.remove(&oldest);
            evicted = Some(oldest);
        }

        self.order.insert(tick, key.clone());
        self.items.insert(key, (value, tick));
        evicted
    }

    pub fn contains(&self, key: &K) -> bool {
        self.items.contains_key(key)
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    pub fn clear(&mut self) {
        self.items.clear();
        self.order.clear();
    }

    #[inline]
    fn next_tick(&mut self) -> u64 {
        self.tick += 1;
        self.tick
    }
}

/// Hit/miss counters of a [`ColorCache`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CacheStats {
    pub hits: u64,
    pub misses: u64,
    pub len: usize,
    pub capacity: usize,
}

/// Thread-safe LRU cache of resolved [`ColorArg`]s.
///
/// The cache only saves parsing work: a hit and a miss produce equal
/// colors. Random and already-built colors bypass it.
#[derive(Debug)]
pub struct ColorCache {
    entries: Mutex<LruCache<ColorArg, Color>>,
    hits: AtomicU64,
    misses: AtomicU64,
}

impl ColorCache {
    /// Create a cache holding at most `capacity` colors. Zero disables it.
    pub fn new(capacity: usize) -> Self {
        Self {
            entries: Mutex::new(LruCache::new(capacity)),
            hits: AtomicU64::new(0),
            misses: AtomicU64::new(0),
        }
    }

    /// Return the cached color for `arg`, or build it with `build` and remember it.
    ///
    /// Errors are returned as is and never cached.
    pub fn get_or_try_insert_with<F>(&self, arg: &ColorArg, build: F) -> Result<Color, ColorError>
    where
        F: FnOnce(&ColorArg) -> Result<Color, ColorError>,
    {
        if !arg.is_cacheable() {
            return build(arg);
        }

        if let Some(color) = self.entries.lock().get(arg).copied() {
            self.hits.fetch_add(1, Ordering::Relaxed);
            trace!(?arg, "Color cache hit");
            return Ok(color);
        }

        self.misses.fetch_add(1, Ordering::Relaxed);
        trace!(?arg, "Color cache miss");

        // Parse without holding the lock.
        let color = build(arg)?;
        if let Some(evicted) = self.entries.lock().insert(arg.clone(), color) {
            trace!(?evicted, "Evicted cached color");
        }
        Ok(color)
    }

    pub fn stats(&self) -> CacheStats {
        let entries = self.entries.lock();
        CacheStats {
            hits: self.hits.load(Ordering::Relaxed),
            misses: self.misses.load(Ordering::Relaxed),
            len: entries.len(),
            capacity: entries.capacity(),
        }
    }

    pub fn clear(&self) {
        self.entries.lock().clear();
    }
}

impl Default for ColorCache {
    fn default() -> Self {
        Self::new(DEFAULT_CAPACITY)
    }
}
