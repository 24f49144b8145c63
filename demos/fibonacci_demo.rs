// SPDX-FileCopyrightText: 2025 Semiotic AI, Inc.
//
// SPDX-License-Identifier: Apache-2.0

//! Example demonstrating Fibonacci memoization through a splay tree
//!
//! This example shows how to:
//! 1. Thread one `SplayTree` through a series of memoized computations
//! 2. Observe the tree reshaping itself around the access pattern
//! 3. Handle the overflow error past the largest representable term
//!
//! Run with:
//! ```bash
//! cargo run --example fibonacci_demo
//! ```

use anyhow::Result;
use semiocache::{fibonacci_memo, fibonacci_uncached, SplayTree, MAX_FIBONACCI_INDEX};
use std::time::Instant;
use tracing::info;

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    let mut tree = SplayTree::new();

    for n in [10u64, 50, 100, 150, MAX_FIBONACCI_INDEX] {
        let started = Instant::now();
        let value = fibonacci_memo(n, &mut tree)?;
        let elapsed = started.elapsed();
        info!(
            n,
            value = %value,
            elapsed_us = elapsed.as_micros() as u64,
            memoized_terms = tree.len(),
            "Computed Fibonacci number"
        );
    }

    // The most recent lookup always sits at the root
    if let Some(root) = tree.root_key() {
        info!(root = *root, "Root after final computation");
    }

    let spot_check = fibonacci_uncached(100)?;
    anyhow::ensure!(
        fibonacci_memo(100, &mut tree)? == spot_check,
        "Memoized value diverged from iterative definition"
    );
    info!(n = 100u64, value = %spot_check, "Spot check against iterative definition passed");

    match fibonacci_memo(MAX_FIBONACCI_INDEX + 1, &mut tree) {
        Err(err) => info!(%err, "Requests past the u128 range fail cleanly"),
        Ok(_) => anyhow::bail!("Expected an overflow error past index {MAX_FIBONACCI_INDEX}"),
    }

    Ok(())
}
