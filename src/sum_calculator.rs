use tracing::{debug, trace};

use crate::cache::{CacheStats, RangeLruCache};
use crate::errors::RangeSumError;
use crate::types::Interval;

/// Range-sum queries over a mutable array, memoized through a bounded cache
///
/// The calculator owns the array and a [`RangeLruCache`] of previously
/// computed sums, wiring up the cache-aside pattern: a query checks the
/// cache first, computes and stores on a miss, and every
/// [`update`](Self::update) invalidates exactly the cached intervals that
/// span the mutated position.
///
/// # Examples
///
/// ```
/// use semiocache::{Interval, RangeSumCalculator};
///
/// let mut calc = RangeSumCalculator::new(vec![1, 2, 3, 4, 5], 16);
/// assert_eq!(calc.range_sum(Interval::new(1, 3)).unwrap(), 9);
///
/// // Mutating position 2 drops the cached [1, 3] sum
/// calc.update(2, 10).unwrap();
/// assert_eq!(calc.range_sum(Interval::new(1, 3)).unwrap(), 16);
/// ```
#[derive(Debug, Clone)]
pub struct RangeSumCalculator {
    values: Vec<i64>,
    cache: RangeLruCache<i64>,
}

impl RangeSumCalculator {
    /// Creates a calculator over `values` with a sum cache of the given capacity
    pub fn new(values: Vec<i64>, cache_capacity: usize) -> Self {
        Self {
            values,
            cache: RangeLruCache::new(cache_capacity),
        }
    }

    /// Sum of the values in `interval`, served from cache when possible
    ///
    /// The interval must satisfy `start <= end` and lie inside the array.
    /// A cache miss computes the sum directly and stores it before
    /// returning.
    pub fn range_sum(&mut self, interval: Interval) -> Result<i64, RangeSumError> {
        self.check_interval(interval)?;

        if let Some(sum) = self.cache.get(interval) {
            return Ok(sum);
        }

        let sum = self.sum_direct(interval);
        self.cache.put(interval, sum);
        trace!(interval = %interval, sum, "Computed and cached range sum");
        Ok(sum)
    }

    /// Set the value at `index`, invalidating every cached sum that spans it
    pub fn update(&mut self, index: usize, value: i64) -> Result<(), RangeSumError> {
        if index >= self.values.len() {
            return Err(RangeSumError::out_of_bounds(index, self.values.len()));
        }

        self.values[index] = value;
        let removed = self.cache.invalidate(index);
        debug!(index, value, removed, "Updated value and invalidated covering sums");
        Ok(())
    }

    /// Sum of the values in `interval`, bypassing the cache entirely
    ///
    /// Validates the interval the same way as [`range_sum`](Self::range_sum)
    /// but never reads or populates the cache. Useful as a correctness
    /// baseline.
    pub fn sum_uncached(&self, interval: Interval) -> Result<i64, RangeSumError> {
        self.check_interval(interval)?;
        Ok(self.sum_direct(interval))
    }

    /// Value at `index`, if it is within bounds
    pub fn get(&self, index: usize) -> Option<i64> {
        self.values.get(index).copied()
    }

    /// Length of the backing array
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Check if the backing array is empty
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Snapshot of the sum cache statistics
    pub fn cache_stats(&self) -> CacheStats {
        self.cache.stats()
    }

    fn sum_direct(&self, interval: Interval) -> i64 {
        self.values[interval.start..=interval.end].iter().sum()
    }

    fn check_interval(&self, interval: Interval) -> Result<(), RangeSumError> {
        if interval.start > interval.end {
            return Err(RangeSumError::invalid_interval(format!(
                "start {} exceeds end {}",
                interval.start, interval.end
            )));
        }
        if interval.end >= self.values.len() {
            return Err(RangeSumError::out_of_bounds(
                interval.end,
                self.values.len(),
            ));
        }
        Ok(())
    }
}
