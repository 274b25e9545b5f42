#![forbid(unsafe_code)]

//! Bounded index-keyed cache for detached page items.
//!
//! Eviction is FIFO with a second-chance reference bit: an entry read since
//! it was queued is re-queued once (bit cleared) instead of evicted. This is
//! the main-queue policy of an S3-FIFO cache without the small and ghost
//! queues.
//!
//! ```
//! use tabpager_layout::IndexCache;
//!
//! let mut cache = IndexCache::new(2);
//! cache.insert(0, "a");
//! cache.insert(1, "b");
//! cache.get(0);
//! cache.insert(2, "c");
//! assert!(cache.contains(0));
//! assert!(!cache.contains(1));
//! ```

use std::collections::{HashMap, VecDeque};

/// Default number of detached items kept per pager.
pub const DEFAULT_CACHE_CAPACITY: usize = 16;

#[derive(Debug)]
struct Entry<T> {
    value: T,
    referenced: bool,
}

/// Cache statistics.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct CacheStats {
    /// Lookups that found an entry.
    pub hits: u64,
    /// Lookups that found nothing.
    pub misses: u64,
    /// Entries dropped to make room.
    pub evictions: u64,
    /// Current number of entries.
    pub len: usize,
    /// Maximum number of entries.
    pub capacity: usize,
}

/// Bounded map from page index to a detached item.
#[derive(Debug)]
pub struct IndexCache<T> {
    entries: HashMap<usize, Entry<T>>,
    /// Insertion order; holds exactly the keys of `entries`.
    queue: VecDeque<usize>,
    capacity: usize,
    hits: u64,
    misses: u64,
    evictions: u64,
}

impl<T> Default for IndexCache<T> {
    fn default() -> Self {
        Self::new(DEFAULT_CACHE_CAPACITY)
    }
}

impl<T> IndexCache<T> {
    /// Create a cache holding at most `capacity` entries (minimum 1).
    pub fn new(capacity: usize) -> Self {
        let capacity = capacity.max(1);
        Self {
            entries: HashMap::with_capacity(capacity),
            queue: VecDeque::with_capacity(capacity),
            capacity,
            hits: 0,
            misses: 0,
            evictions: 0,
        }
    }

    /// Insert an item. Returns the previous item stored under `index`.
    pub fn insert(&mut self, index: usize, value: T) -> Option<T> {
        if let Some(entry) = self.entries.get_mut(&index) {
            entry.referenced = true;
            return Some(std::mem::replace(&mut entry.value, value));
        }
        self.evict_to(self.capacity - 1);
        self.queue.push_back(index);
        self.entries.insert(
            index,
            Entry {
                value,
                referenced: false,
            },
        );
        None
    }

    /// Remove and return the item stored under `index`.
    pub fn take(&mut self, index: usize) -> Option<T> {
        match self.entries.remove(&index) {
            Some(entry) => {
                self.hits += 1;
                if let Some(pos) = self.queue.iter().position(|&k| k == index) {
                    self.queue.remove(pos);
                }
                Some(entry.value)
            }
            None => {
                self.misses += 1;
                None
            }
        }
    }

    /// Look up an item and mark it as recently used.
    pub fn get(&mut self, index: usize) -> Option<&T> {
        match self.entries.get_mut(&index) {
            Some(entry) => {
                self.hits += 1;
                entry.referenced = true;
                Some(&entry.value)
            }
            None => {
                self.misses += 1;
                None
            }
        }
    }

    /// Look up an item without touching statistics or recency.
    pub fn peek(&self, index: usize) -> Option<&T> {
        self.entries.get(&index).map(|entry| &entry.value)
    }

    /// Check whether an item is cached under `index`.
    pub fn contains(&self, index: usize) -> bool {
        self.entries.contains_key(&index)
    }

    /// Number of cached items.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// True when nothing is cached.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Maximum number of cached items.
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Change the capacity, evicting down to it if needed.
    pub fn set_capacity(&mut self, capacity: usize) {
        self.capacity = capacity.max(1);
        self.evict_to(self.capacity);
    }

    /// Drop every cached item. Safe to call at any time.
    pub fn clear(&mut self) {
        self.entries.clear();
        self.queue.clear();
    }

    /// Cached indices in queue order.
    pub fn indices(&self) -> impl Iterator<Item = usize> + '_ {
        self.queue.iter().copied()
    }

    /// Snapshot of the counters.
    pub fn stats(&self) -> CacheStats {
        CacheStats {
            hits: self.hits,
            misses: self.misses,
            evictions: self.evictions,
            len: self.entries.len(),
            capacity: self.capacity,
        }
    }

    fn evict_to(&mut self, limit: usize) {
        while self.entries.len() > limit {
            let Some(index) = self.queue.pop_front() else {
                break;
            };
            let second_chance = match self.entries.get_mut(&index) {
                Some(entry) if entry.referenced => {
                    entry.referenced = false;
                    true
                }
                _ => false,
            };
            if second_chance {
                self.queue.push_back(index);
            } else {
                self.entries.remove(&index);
                self.evictions += 1;
                tracing::trace!(message = "pager.cache.evict", index);
            }
        }
    }
}
