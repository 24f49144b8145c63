//! Integration tests for cached range-sum queries
//!
//! Exercises `RangeSumCalculator` end to end: cached sums against direct
//! slice sums, invalidation on point updates, and full workload replays
//! checked against an uncached reference array.

use proptest::prelude::*;
use semiocache::{
    Interval, Query, RangeSumCalculator, RangeSumError, Workload, WorkloadConfigBuilder,
};

/// Replays a workload through a calculator while maintaining a plain
/// reference array, asserting every range result against a direct sum.
fn replay_and_check(workload: &Workload, cache_capacity: usize) {
    let mut calc = RangeSumCalculator::new(workload.values.clone(), cache_capacity);
    let mut reference = workload.values.clone();

    for query in &workload.queries {
        match *query {
            Query::Range(interval) => {
                let cached = calc.range_sum(interval).unwrap();
                let direct: i64 = reference[interval.start..=interval.end].iter().sum();
                assert_eq!(cached, direct, "Range {interval} diverged from reference");
            }
            Query::Update { index, value } => {
                calc.update(index, value).unwrap();
                reference[index] = value;
            }
        }
    }
}

#[test]
fn test_cached_sum_matches_direct_sum() {
    let mut calc = RangeSumCalculator::new(vec![2, 4, 6, 8, 10], 4);

    let interval = Interval::new(1, 3);
    assert_eq!(calc.range_sum(interval).unwrap(), 18);
    assert_eq!(calc.sum_uncached(interval).unwrap(), 18);

    // Second query is served from cache
    assert_eq!(calc.range_sum(interval).unwrap(), 18);
    let stats = calc.cache_stats();
    assert_eq!(stats.hits, 1);
    assert_eq!(stats.misses, 1);
}

#[test]
fn test_update_invalidates_overlapping_ranges_only() {
    let mut calc = RangeSumCalculator::new(vec![1; 12], 16);

    let low = Interval::new(0, 3);
    let high = Interval::new(8, 11);
    assert_eq!(calc.range_sum(low).unwrap(), 4);
    assert_eq!(calc.range_sum(high).unwrap(), 4);

    // Position 2 only covers the low range
    calc.update(2, 5).unwrap();

    assert_eq!(calc.range_sum(low).unwrap(), 8);
    assert_eq!(calc.range_sum(high).unwrap(), 4);

    let stats = calc.cache_stats();
    assert_eq!(stats.invalidations, 1);
    assert_eq!(stats.hits, 1, "Disjoint range should have stayed cached");
}

#[test]
fn test_overlapping_cached_ranges_all_drop_on_update() {
    let mut calc = RangeSumCalculator::new(vec![3; 10], 16);

    for interval in [Interval::new(0, 5), Interval::new(6, 9), Interval::new(3, 8)] {
        calc.range_sum(interval).unwrap();
    }

    // Position 4 falls inside [0, 5] and [3, 8] but not [6, 9]
    calc.update(4, 30).unwrap();
    let stats = calc.cache_stats();
    assert_eq!(stats.invalidations, 2);
    assert_eq!(stats.entries, 1);

    assert_eq!(calc.range_sum(Interval::new(0, 5)).unwrap(), 45);
    assert_eq!(calc.range_sum(Interval::new(3, 8)).unwrap(), 45);
    assert_eq!(calc.range_sum(Interval::new(6, 9)).unwrap(), 12);
}

#[test]
fn test_query_validation_errors() {
    let mut calc = RangeSumCalculator::new(vec![1, 2, 3], 4);

    assert!(matches!(
        calc.range_sum(Interval::new(2, 1)),
        Err(RangeSumError::InvalidInterval { .. })
    ));
    assert!(matches!(
        calc.range_sum(Interval::new(0, 3)),
        Err(RangeSumError::OutOfBounds { index: 3, len: 3 })
    ));
    assert!(matches!(
        calc.update(3, 9),
        Err(RangeSumError::OutOfBounds { index: 3, len: 3 })
    ));

    // Failed queries never touch the cache
    assert_eq!(calc.cache_stats().misses, 0);
}

#[test]
fn test_generated_workload_replay() {
    let config = WorkloadConfigBuilder::new()
        .array_len(512)
        .query_count(4_000)
        .range_fraction(0.7)
        .seed(7)
        .build();
    let workload = Workload::generate(&config);

    replay_and_check(&workload, 64);
}

#[test]
fn test_replay_is_deterministic_across_capacities() {
    let config = WorkloadConfigBuilder::new()
        .array_len(256)
        .query_count(2_000)
        .value_bounds(-500, 500)
        .seed(42)
        .build();
    let workload = Workload::generate(&config);

    // Capacity only changes hit rates, never answers
    for capacity in [0, 1, 8, 1_000] {
        replay_and_check(&workload, capacity);
    }
}

#[test]
fn test_stats_accounting_over_replay() {
    let config = WorkloadConfigBuilder::new()
        .array_len(128)
        .query_count(1_500)
        .seed(3)
        .build();
    let workload = Workload::generate(&config);
    let range_queries = workload
        .queries
        .iter()
        .filter(|query| matches!(query, Query::Range(_)))
        .count() as u64;

    let mut calc = RangeSumCalculator::new(workload.values.clone(), 32);
    for query in &workload.queries {
        match *query {
            Query::Range(interval) => {
                calc.range_sum(interval).unwrap();
            }
            Query::Update { index, value } => calc.update(index, value).unwrap(),
        }
    }

    let stats = calc.cache_stats();
    assert_eq!(stats.hits + stats.misses, range_queries);
    assert!(stats.entries <= 32);
}

fn arb_scenario() -> impl Strategy<Value = (Vec<i64>, Vec<Query>, usize)> {
    prop::collection::vec(-1_000i64..1_000, 1..40).prop_flat_map(|values| {
        let len = values.len();
        let queries = prop::collection::vec(
            prop_oneof![
                (0..len, 0..len).prop_map(|(a, b)| {
                    Query::Range(Interval::new(a.min(b), a.max(b)))
                }),
                (0..len, -1_000i64..1_000)
                    .prop_map(|(index, value)| Query::Update { index, value }),
            ],
            0..120,
        );
        (Just(values), queries, 0usize..6)
    })
}

proptest! {
    /// Property: cached answers equal brute-force answers for any query
    /// sequence and any cache capacity, including zero
    #[test]
    fn test_cache_never_changes_answers((values, queries, capacity) in arb_scenario()) {
        let workload = Workload { values, queries };
        replay_and_check(&workload, capacity);
    }
}
