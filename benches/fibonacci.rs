// SPDX-FileCopyrightText: 2025 Semiotic AI, Inc.
//
// SPDX-License-Identifier: Apache-2.0

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use semiocache::{fibonacci_memo, fibonacci_uncached, SplayTree};
use std::collections::HashMap;

// Baseline memoizer over std's hash map, for comparing lookup structures
fn fibonacci_hashmap(n: u64, memo: &mut HashMap<u64, u128>) -> u128 {
    if let Some(&cached) = memo.get(&n) {
        return cached;
    }
    if n <= 1 {
        return n as u128;
    }
    let value = fibonacci_hashmap(n - 1, memo) + fibonacci_hashmap(n - 2, memo);
    memo.insert(n, value);
    value
}

fn bench_single_term(c: &mut Criterion) {
    let mut group = c.benchmark_group("fibonacci_single_term");

    for &n in &[50u64, 120, 186] {
        group.bench_with_input(BenchmarkId::new("splay_memo", n), &n, |b, &n| {
            b.iter(|| {
                let mut tree = SplayTree::new();
                fibonacci_memo(black_box(n), &mut tree).unwrap()
            })
        });
        group.bench_with_input(BenchmarkId::new("hashmap_memo", n), &n, |b, &n| {
            b.iter(|| {
                let mut memo = HashMap::new();
                fibonacci_hashmap(black_box(n), &mut memo)
            })
        });
        group.bench_with_input(BenchmarkId::new("iterative", n), &n, |b, &n| {
            b.iter(|| fibonacci_uncached(black_box(n)).unwrap())
        });
    }

    group.finish();
}

fn bench_warm_tree(c: &mut Criterion) {
    let mut group = c.benchmark_group("fibonacci_warm_tree");

    // Every term is already memoized, so this measures pure splay lookups
    let mut tree = SplayTree::new();
    fibonacci_memo(186, &mut tree).unwrap();

    group.bench_function("sweep_0_to_186", |b| {
        b.iter(|| {
            let mut checksum = 0u128;
            for n in 0..=186u64 {
                checksum = checksum.wrapping_add(fibonacci_memo(black_box(n), &mut tree).unwrap());
            }
            checksum
        })
    });

    group.finish();
}

criterion_group!(benches, bench_single_term, bench_warm_tree);
criterion_main!(benches);
