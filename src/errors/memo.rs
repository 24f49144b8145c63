// SPDX-FileCopyrightText: 2025 Semiotic AI, Inc.
//
// SPDX-License-Identifier: Apache-2.0

//! Error types for memoized recurrence evaluation.

/// Errors that can occur while evaluating a memoized recurrence.
#[derive(Debug, thiserror::Error)]
pub enum MemoError {
    /// The requested term does not fit in the result type.
    ///
    /// Fibonacci numbers grow past `u128::MAX` at index 187; asking for a
    /// term at or beyond that index is reported instead of wrapping.
    #[error("Fibonacci number {n} overflows u128")]
    Overflow {
        /// The index whose term overflowed
        n: u64,
    },
}

impl MemoError {
    /// Create an `Overflow` error for a term index.
    pub fn overflow(n: u64) -> Self {
        MemoError::Overflow { n }
    }
}
