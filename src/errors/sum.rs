//! Error types for range-sum calculations.

/// Errors that can occur when querying or updating a range-sum calculator.
///
/// The calculator validates every interval against the backing array before
/// touching the cache, so a malformed query is reported here instead of
/// silently producing a nonsense sum.
#[derive(Debug, thiserror::Error)]
pub enum RangeSumError {
    /// Invalid interval provided for a range query.
    ///
    /// This occurs when the interval's start exceeds its end.
    #[error("Invalid interval: {reason}")]
    InvalidInterval {
        /// Description of why the interval is invalid
        reason: String,
    },

    /// A position or interval endpoint falls outside the backing array.
    #[error("Position {index} out of bounds for array of length {len}")]
    OutOfBounds {
        /// The offending position
        index: usize,
        /// Length of the backing array
        len: usize,
    },
}

impl RangeSumError {
    /// Create an `InvalidInterval` error with a reason.
    pub fn invalid_interval(reason: impl Into<String>) -> Self {
        RangeSumError::InvalidInterval {
            reason: reason.into(),
        }
    }

    /// Create an `OutOfBounds` error for a position.
    pub fn out_of_bounds(index: usize, len: usize) -> Self {
        RangeSumError::OutOfBounds { index, len }
    }
}
