// SPDX-FileCopyrightText: 2025 Semiotic AI, Inc.
//
// SPDX-License-Identifier: Apache-2.0

//! Interval key type for range-keyed caching

use serde::{Deserialize, Serialize};
use std::fmt;

/// A closed interval of array positions, inclusive on both ends
///
/// `Interval` is the key type for [`RangeLruCache`](crate::RangeLruCache): a
/// cached range sum over positions `start..=end` is stored under the interval
/// `(start, end)`.
///
/// Construction does not validate ordering. Callers must uphold
/// `start <= end`; an inverted interval behaves as an ordinary opaque key,
/// reports itself as empty, and contains no position.
///
/// # Examples
///
/// ```
/// use semiocache::Interval;
///
/// let interval = Interval::new(3, 8);
/// assert!(interval.contains(3));
/// assert!(interval.contains(8));
/// assert!(!interval.contains(9));
/// assert_eq!(interval.len(), 6);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Interval {
    pub start: usize,
    pub end: usize,
}

impl Interval {
    /// Create a new interval
    pub const fn new(start: usize, end: usize) -> Self {
        Self { start, end }
    }

    /// Get the number of positions this interval covers (inclusive)
    pub fn len(&self) -> usize {
        if self.end >= self.start {
            self.end.saturating_sub(self.start) + 1
        } else {
            0
        }
    }

    /// Check if this interval covers no positions
    pub fn is_empty(&self) -> bool {
        self.end < self.start
    }

    /// Check if this interval contains a specific position
    pub fn contains(&self, position: usize) -> bool {
        position >= self.start && position <= self.end
    }
}

impl From<(usize, usize)> for Interval {
    fn from((start, end): (usize, usize)) -> Self {
        Self { start, end }
    }
}

impl From<Interval> for (usize, usize) {
    fn from(interval: Interval) -> Self {
        (interval.start, interval.end)
    }
}

impl fmt::Display for Interval {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}, {}]", self.start, self.end)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_interval() {
        let interval = Interval::new(10, 20);
        assert_eq!(interval.start, 10);
        assert_eq!(interval.end, 20);
    }

    #[test]
    fn test_len_inclusive() {
        assert_eq!(Interval::new(0, 0).len(), 1);
        assert_eq!(Interval::new(0, 9).len(), 10);
        assert_eq!(Interval::new(5, 5).len(), 1);
    }

    #[test]
    fn test_len_inverted_is_zero() {
        assert_eq!(Interval::new(10, 5).len(), 0);
    }

    #[test]
    fn test_is_empty() {
        assert!(!Interval::new(0, 0).is_empty());
        assert!(!Interval::new(3, 8).is_empty());
        assert!(Interval::new(8, 3).is_empty());
    }

    #[test]
    fn test_contains_boundaries() {
        let interval = Interval::new(3, 8);
        assert!(interval.contains(3), "start is inclusive");
        assert!(interval.contains(8), "end is inclusive");
        assert!(interval.contains(5));
        assert!(!interval.contains(2));
        assert!(!interval.contains(9));
    }

    #[test]
    fn test_inverted_contains_nothing() {
        let interval = Interval::new(8, 3);
        assert!(!interval.contains(3));
        assert!(!interval.contains(5));
        assert!(!interval.contains(8));
    }

    #[test]
    fn test_tuple_conversions() {
        let interval = Interval::from((2, 7));
        assert_eq!(interval, Interval::new(2, 7));

        let tuple: (usize, usize) = interval.into();
        assert_eq!(tuple, (2, 7));
    }

    #[test]
    fn test_display() {
        assert_eq!(Interval::new(3, 8).to_string(), "[3, 8]");
    }

    #[test]
    fn test_serde_round_trip() {
        let interval = Interval::new(100, 200);
        let json = serde_json::to_string(&interval).unwrap();
        let back: Interval = serde_json::from_str(&json).unwrap();
        assert_eq!(back, interval);
    }
}
