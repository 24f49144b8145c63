use tracing::trace;

use crate::errors::MemoError;
use crate::tree::SplayTree;

/// Largest index whose Fibonacci number fits in `u128`
pub const MAX_FIBONACCI_INDEX: u64 = 186;

/// Fibonacci number `n`, memoized through a splay tree
///
/// The recursion threads the tree through every call: each term is looked
/// up before recursing and inserted after it is computed, so a later call
/// reuses everything an earlier call cached. The access pattern is heavily
/// skewed toward small indices, which is exactly the workload the splay
/// tree keeps cheap.
///
/// Indices above [`MAX_FIBONACCI_INDEX`] overflow `u128` and are reported
/// as [`MemoError::Overflow`]; terms already cached before the overflow
/// remain valid in the tree.
///
/// # Examples
///
/// ```
/// use semiocache::{fibonacci_memo, SplayTree};
///
/// let mut tree = SplayTree::new();
/// assert_eq!(fibonacci_memo(10, &mut tree).unwrap(), 55);
///
/// // The second call is answered from the tree
/// assert_eq!(fibonacci_memo(10, &mut tree).unwrap(), 55);
/// ```
pub fn fibonacci_memo(n: u64, tree: &mut SplayTree<u64, u128>) -> Result<u128, MemoError> {
    if let Some(cached) = tree.search(&n) {
        trace!(n, "Fibonacci memo hit");
        return Ok(*cached);
    }
    if n <= 1 {
        return Ok(n as u128);
    }

    let prev = fibonacci_memo(n - 1, tree)?;
    let prev_prev = fibonacci_memo(n - 2, tree)?;
    let result = prev
        .checked_add(prev_prev)
        .ok_or_else(|| MemoError::overflow(n))?;

    tree.insert(n, result);
    Ok(result)
}

/// Fibonacci number `n` computed iteratively, no memoization
///
/// Correctness baseline for [`fibonacci_memo`] and the uncached side of
/// benchmarks. Fails with [`MemoError::Overflow`] at the same indices.
pub fn fibonacci_uncached(n: u64) -> Result<u128, MemoError> {
    if n == 0 {
        return Ok(0);
    }

    let (mut prev, mut current) = (0u128, 1u128);
    for index in 2..=n {
        let next = prev
            .checked_add(current)
            .ok_or_else(|| MemoError::overflow(index))?;
        prev = current;
        current = next;
    }
    Ok(current)
}
