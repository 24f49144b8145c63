//! Error types for the semiocache library.
//!
//! The two core structures never fail: a missing key is an `Option::None`,
//! not an error. Typed errors exist only at the layers that know about a
//! backing array or a numeric domain:
//!
//! - [`RangeSumError`] - Errors from the range-sum calculator (bounds and
//!   interval validation)
//! - [`MemoError`] - Errors from memoized recurrences (value overflow)
//!
//! [`SemiocacheError`] wraps both for callers that do not need to
//! distinguish the source; the module-specific types convert into it via
//! `From`, so `?` propagates naturally.

mod memo;
mod sum;

pub use memo::MemoError;
pub use sum::RangeSumError;

/// Unified error type for all semiocache operations.
///
/// # Examples
///
/// ```
/// use semiocache::{Interval, RangeSumCalculator, SemiocacheError};
///
/// fn sum_twice(calc: &mut RangeSumCalculator) -> Result<i64, SemiocacheError> {
///     let first = calc.range_sum(Interval::new(0, 2))?;
///     let second = calc.range_sum(Interval::new(0, 2))?;
///     Ok(first + second)
/// }
///
/// let mut calc = RangeSumCalculator::new(vec![1, 2, 3], 16);
/// assert_eq!(sum_twice(&mut calc).unwrap(), 12);
/// ```
#[derive(Debug, thiserror::Error)]
pub enum SemiocacheError {
    /// Error from range-sum calculations.
    #[error("Range sum error: {0}")]
    RangeSum(#[from] RangeSumError),

    /// Error from memoized recurrence evaluation.
    #[error("Memoization error: {0}")]
    Memo(#[from] MemoError),
}
