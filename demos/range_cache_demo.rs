// SPDX-FileCopyrightText: 2025 Semiotic AI, Inc.
//
// SPDX-License-Identifier: Apache-2.0

//! Example demonstrating cached range-sum queries over a mutable array
//!
//! This example shows how to:
//! 1. Generate a reproducible mixed read/write workload
//! 2. Replay it through a `RangeSumCalculator` and through direct summation
//! 3. Compare the wall-clock cost of the two paths
//! 4. Read the cache statistics after a run
//!
//! Run with:
//! ```bash
//! ARRAY_LEN=50000 \
//! QUERY_COUNT=20000 \
//! CACHE_CAPACITY=1000 \
//! SEED=0 \
//! cargo run --example range_cache_demo
//! ```
//!
//! All environment variables are optional; the values above are the
//! defaults.

use anyhow::Result;
use semiocache::{Query, RangeSumCalculator, Workload, WorkloadConfigBuilder};
use std::time::Instant;
use tracing::info;

fn env_or(name: &str, default: u64) -> u64 {
    std::env::var(name)
        .ok()
        .and_then(|raw| raw.parse().ok())
        .unwrap_or(default)
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    let array_len = env_or("ARRAY_LEN", 50_000) as usize;
    let query_count = env_or("QUERY_COUNT", 20_000) as usize;
    let capacity = env_or("CACHE_CAPACITY", 1_000) as usize;
    let seed = env_or("SEED", 0);

    let config = WorkloadConfigBuilder::new()
        .array_len(array_len)
        .query_count(query_count)
        .range_fraction(0.7)
        .seed(seed)
        .build();
    info!(
        array_len,
        query_count, capacity, seed, "Generating workload"
    );
    let workload = Workload::generate(&config);

    let started = Instant::now();
    let uncached_checksum = replay_uncached(&workload);
    let uncached_elapsed = started.elapsed();
    info!(
        elapsed_ms = uncached_elapsed.as_millis() as u64,
        checksum = uncached_checksum,
        "Uncached replay finished"
    );

    let mut calc = RangeSumCalculator::new(workload.values.clone(), capacity);
    let started = Instant::now();
    let cached_checksum = replay_cached(&mut calc, &workload)?;
    let cached_elapsed = started.elapsed();
    info!(
        elapsed_ms = cached_elapsed.as_millis() as u64,
        checksum = cached_checksum,
        "Cached replay finished"
    );

    anyhow::ensure!(
        cached_checksum == uncached_checksum,
        "Cached and uncached replays disagree"
    );

    let stats = calc.cache_stats();
    info!(%stats, "Cache statistics");
    println!("{}", serde_json::to_string_pretty(&stats)?);

    Ok(())
}

fn replay_cached(calc: &mut RangeSumCalculator, workload: &Workload) -> Result<i64> {
    let mut checksum = 0i64;
    for query in &workload.queries {
        match *query {
            Query::Range(interval) => {
                checksum = checksum.wrapping_add(calc.range_sum(interval)?);
            }
            Query::Update { index, value } => calc.update(index, value)?,
        }
    }
    Ok(checksum)
}

fn replay_uncached(workload: &Workload) -> i64 {
    let mut values = workload.values.clone();
    let mut checksum = 0i64;
    for query in &workload.queries {
        match *query {
            Query::Range(interval) => {
                let sum: i64 = values[interval.start..=interval.end].iter().sum();
                checksum = checksum.wrapping_add(sum);
            }
            Query::Update { index, value } => values[index] = value,
        }
    }
    checksum
}
