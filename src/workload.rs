use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use serde::Serialize;
use tracing::debug;

use crate::types::Interval;

/// A single operation against a range-sum calculator
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Query {
    /// Sum the values covered by the interval
    Range(Interval),
    /// Overwrite the value at `index`
    Update { index: usize, value: i64 },
}

/// Configuration for synthetic query workloads
///
/// The defaults reproduce the classic mixed read/write benchmark shape:
/// a 100k-element array, 50k queries, 70% range sums and 30% point
/// updates with values drawn from `1..=1000`.
///
/// Use [`WorkloadConfigBuilder`] for a fluent API to construct instances.
#[derive(Debug, Clone)]
pub struct WorkloadConfig {
    /// Number of elements in the backing array
    pub array_len: usize,
    /// Number of queries to generate
    pub query_count: usize,
    /// Fraction of queries that are range sums, the rest are updates.
    /// Must lie in `0.0..=1.0`; the builder clamps it.
    pub range_fraction: f64,
    /// Smallest value generated for array elements and updates
    pub min_value: i64,
    /// Largest value generated for array elements and updates
    pub max_value: i64,
    /// RNG seed; the same seed always yields the same workload
    pub seed: u64,
}

impl Default for WorkloadConfig {
    fn default() -> Self {
        Self {
            array_len: 100_000,
            query_count: 50_000,
            range_fraction: 0.7,
            min_value: 1,
            max_value: 1_000,
            seed: 0,
        }
    }
}

/// Builder for [`WorkloadConfig`]
///
/// # Example
///
/// ```rust
/// use semiocache::WorkloadConfigBuilder;
///
/// let config = WorkloadConfigBuilder::new()
///     .array_len(1_000)
///     .query_count(500)
///     .seed(7)
///     .build();
///
/// assert_eq!(config.array_len, 1_000);
/// assert_eq!(config.range_fraction, 0.7); // Default mix kept
/// ```
#[derive(Debug, Default)]
pub struct WorkloadConfigBuilder {
    config: WorkloadConfig,
}

impl WorkloadConfigBuilder {
    /// Create a new builder with the default workload shape
    pub fn new() -> Self {
        Self {
            config: WorkloadConfig::default(),
        }
    }

    /// Set the backing array length
    pub fn array_len(mut self, len: usize) -> Self {
        self.config.array_len = len;
        self
    }

    /// Set the number of generated queries
    pub fn query_count(mut self, count: usize) -> Self {
        self.config.query_count = count;
        self
    }

    /// Set the fraction of range queries (clamped to `0.0..=1.0`)
    pub fn range_fraction(mut self, fraction: f64) -> Self {
        // gen_bool panics outside [0, 1]
        self.config.range_fraction = fraction.clamp(0.0, 1.0);
        self
    }

    /// Set the inclusive bounds for generated element values
    pub fn value_bounds(mut self, min: i64, max: i64) -> Self {
        self.config.min_value = min.min(max);
        self.config.max_value = min.max(max);
        self
    }

    /// Set the RNG seed
    pub fn seed(mut self, seed: u64) -> Self {
        self.config.seed = seed;
        self
    }

    /// Finish building the configuration
    pub fn build(self) -> WorkloadConfig {
        self.config
    }
}

/// A generated array plus the query sequence to replay against it
#[derive(Debug, Clone)]
pub struct Workload {
    /// Initial contents of the backing array
    pub values: Vec<i64>,
    /// Queries in replay order
    pub queries: Vec<Query>,
}

impl Workload {
    /// Generate a workload from `config`, deterministically per seed
    ///
    /// Range queries draw two distinct positions and order them, so every
    /// generated interval satisfies `start < end`. An `array_len` of zero
    /// yields an empty workload; a length of one restricts range queries
    /// to the single position.
    pub fn generate(config: &WorkloadConfig) -> Self {
        if config.array_len == 0 {
            return Self {
                values: Vec::new(),
                queries: Vec::new(),
            };
        }

        let mut rng = StdRng::seed_from_u64(config.seed);

        let values: Vec<i64> = (0..config.array_len)
            .map(|_| rng.gen_range(config.min_value..=config.max_value))
            .collect();

        let queries: Vec<Query> = (0..config.query_count)
            .map(|_| {
                if rng.gen_bool(config.range_fraction) {
                    Query::Range(random_interval(&mut rng, config.array_len))
                } else {
                    Query::Update {
                        index: rng.gen_range(0..config.array_len),
                        value: rng.gen_range(config.min_value..=config.max_value),
                    }
                }
            })
            .collect();

        debug!(
            array_len = config.array_len,
            query_count = queries.len(),
            seed = config.seed,
            "Generated workload"
        );

        Self { values, queries }
    }
}

/// Draw an ordered pair of distinct positions as a closed interval
fn random_interval(rng: &mut StdRng, len: usize) -> Interval {
    if len < 2 {
        return Interval::new(0, 0);
    }

    // Second draw skips the first position, so the pair is always distinct
    let first = rng.gen_range(0..len);
    let mut second = rng.gen_range(0..len - 1);
    if second >= first {
        second += 1;
    }

    Interval::new(first.min(second), first.max(second))
}
