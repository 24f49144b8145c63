// SPDX-FileCopyrightText: 2025 Semiotic AI, Inc.
//
// SPDX-License-Identifier: Apache-2.0

//! Interval-keyed LRU cache with positional invalidation
//!
//! This module provides a bounded cache for values computed over closed
//! array intervals. When the backing array mutates, every cached entry whose
//! interval covers the mutated position can be dropped in one call.

use std::collections::{HashMap, VecDeque};

use tracing::{debug, trace};

use super::CacheStats;
use crate::types::Interval;

/// Fixed-capacity LRU cache keyed by closed intervals
///
/// The cache holds at most `capacity` entries. Every `get` or `put` that
/// touches a key refreshes its recency; when a `put` of a new key finds the
/// cache full, the least recently used entry is evicted first.
///
/// Interval keys are opaque to the cache: there is no range index, so
/// [`invalidate`](Self::invalidate) is a linear scan over all resident
/// entries testing containment. Capacity is expected to be small relative to
/// query volume, which keeps the scan cheap.
///
/// # Type Parameters
///
/// * `V` - The cached value type (must be `Clone`; hits return a clone)
///
/// # Examples
///
/// ```
/// use semiocache::{Interval, RangeLruCache};
///
/// let mut cache = RangeLruCache::new(2);
/// cache.put(Interval::new(0, 5), 42i64);
///
/// assert_eq!(cache.get(Interval::new(0, 5)), Some(42));
/// assert_eq!(cache.get(Interval::new(6, 10)), None);
///
/// // Position 3 falls inside [0, 5], so the entry is dropped
/// let removed = cache.invalidate(3);
/// assert_eq!(removed, 1);
/// assert!(cache.is_empty());
/// ```
///
/// # Performance
///
/// - Get/put: O(capacity) worst case for the recency bookkeeping, O(1)
///   average map operations
/// - Invalidate: O(capacity) containment scan
#[derive(Debug, Clone)]
pub struct RangeLruCache<V> {
    capacity: usize,
    entries: HashMap<Interval, V>,
    /// Recency order of resident keys, least recently used at the front.
    /// Holds exactly the key set of `entries` at all times.
    recency: VecDeque<Interval>,
    stats: CacheStats,
}

impl<V: Clone> RangeLruCache<V> {
    /// Creates a cache that holds at most `capacity` entries
    ///
    /// Capacity is fixed for the lifetime of the cache. It should be
    /// positive: a zero-capacity cache still accepts `put`s but evicts the
    /// previous entry on each one, retaining only the most recent.
    pub fn new(capacity: usize) -> Self {
        Self {
            capacity,
            entries: HashMap::with_capacity(capacity),
            recency: VecDeque::with_capacity(capacity),
            stats: CacheStats::default(),
        }
    }

    /// Retrieve the cached value for an interval, refreshing its recency
    ///
    /// Returns `None` on a miss; the caller is expected to compute the
    /// value and [`put`](Self::put) it back (cache-aside).
    pub fn get(&mut self, interval: Interval) -> Option<V> {
        match self.entries.get(&interval) {
            Some(value) => {
                let value = value.clone();
                self.touch(interval);
                self.stats.hits += 1;
                trace!(interval = %interval, "Range cache hit");
                Some(value)
            }
            None => {
                self.stats.misses += 1;
                trace!(interval = %interval, "Range cache miss");
                None
            }
        }
    }

    /// Insert or refresh a cached value
    ///
    /// If the interval is already resident its value is overwritten and its
    /// recency refreshed. Otherwise the least recently used entries are
    /// evicted until there is room, then the new entry is inserted at the
    /// most recently used position.
    pub fn put(&mut self, interval: Interval, value: V) {
        if self.entries.contains_key(&interval) {
            self.entries.insert(interval, value);
            self.touch(interval);
            return;
        }

        // Eviction runs before the insert so the capacity check also fires
        // for a zero-capacity cache.
        while self.entries.len() >= self.capacity {
            if !self.evict_lru() {
                break;
            }
        }

        self.entries.insert(interval, value);
        self.recency.push_back(interval);
    }

    /// Remove every entry whose interval contains `position`
    ///
    /// Must be called whenever the underlying array element at `position`
    /// changes: any cached result spanning that position is stale. Returns
    /// the number of entries removed; zero matches is a no-op.
    pub fn invalidate(&mut self, position: usize) -> usize {
        let before = self.entries.len();
        self.entries.retain(|interval, _| !interval.contains(position));
        self.recency.retain(|interval| !interval.contains(position));

        let removed = before - self.entries.len();
        if removed > 0 {
            self.stats.invalidations += removed as u64;
            debug!(position, removed, "Invalidated stale range cache entries");
        }
        removed
    }

    /// Check whether an interval is resident without refreshing its recency
    pub fn contains(&self, interval: Interval) -> bool {
        self.entries.contains_key(&interval)
    }

    /// Remove all entries, keeping the configured capacity
    pub fn clear(&mut self) {
        debug!(entries = self.entries.len(), "Clearing range cache");
        self.entries.clear();
        self.recency.clear();
    }

    /// The configured capacity
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Number of resident entries
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Check if the cache holds no entries
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Snapshot of the lifetime statistics for this cache
    pub fn stats(&self) -> CacheStats {
        CacheStats {
            entries: self.entries.len(),
            ..self.stats.clone()
        }
    }

    /// Move a resident key to the most recently used position
    fn touch(&mut self, interval: Interval) {
        if let Some(pos) = self.recency.iter().position(|key| *key == interval) {
            self.recency.remove(pos);
        }
        self.recency.push_back(interval);
    }

    /// Evicts the least recently used entry, returning whether one existed
    fn evict_lru(&mut self) -> bool {
        let Some(oldest) = self.recency.pop_front() else {
            // Nothing resident; a zero-capacity cache reaches this on every put
            return false;
        };

        debug!(interval = %oldest, "Evicting LRU range cache entry");
        self.entries.remove(&oldest);
        self.stats.evictions += 1;
        true
    }
}

#[cfg(test)]
impl<V: Clone> RangeLruCache<V> {
    /// Recency order snapshot, least recently used first
    fn recency_order(&self) -> Vec<Interval> {
        self.recency.iter().copied().collect()
    }
}
