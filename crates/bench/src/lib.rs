use std::fmt;
use std::hint::black_box;
use std::time::{Duration, Instant};

use criterion::BenchmarkGroup;
use criterion::measurement::Measurement;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use sorting::{SortAlgorithm, SortContext, algorithm_name, sort_with_ctx};

const SMALL_RUNTIME_SAMPLE_SIZE: usize = 15;
const SMALL_RUNTIME_WARM_UP_MS: u64 = 100;
const SMALL_RUNTIME_MEASURE_MS: u64 = 200;
const MEDIUM_RUNTIME_SAMPLE_SIZE: usize = 15;
const MEDIUM_RUNTIME_WARM_UP_MS: u64 = 500;
const MEDIUM_RUNTIME_MEASURE_MS: u64 = 1000;
const LARGE_RUNTIME_SAMPLE_SIZE: usize = 10;
const LARGE_RUNTIME_WARM_UP_MS: u64 = 800;
const LARGE_RUNTIME_MEASURE_MS: u64 = 1500;
pub const RNG_SEED: u64 = 0x5EED_2026;

/// Largest value produced by [`Pattern::Random`].
pub const RANDOM_MAX: i64 = 1000;
pub const DEFAULT_ARRAY_LENGTH: usize = 10_000;

pub fn apply_small_runtime_config<M: Measurement>(group: &mut BenchmarkGroup<'_, M>) {
    group.sample_size(SMALL_RUNTIME_SAMPLE_SIZE);
    group.warm_up_time(Duration::from_millis(SMALL_RUNTIME_WARM_UP_MS));
    group.measurement_time(Duration::from_millis(SMALL_RUNTIME_MEASURE_MS));
}

pub fn apply_medium_runtime_config<M: Measurement>(group: &mut BenchmarkGroup<'_, M>) {
    group.sample_size(MEDIUM_RUNTIME_SAMPLE_SIZE);
    group.warm_up_time(Duration::from_millis(MEDIUM_RUNTIME_WARM_UP_MS));
    group.measurement_time(Duration::from_millis(MEDIUM_RUNTIME_MEASURE_MS));
}

pub fn apply_large_runtime_config<M: Measurement>(group: &mut BenchmarkGroup<'_, M>) {
    group.sample_size(LARGE_RUNTIME_SAMPLE_SIZE);
    group.warm_up_time(Duration::from_millis(LARGE_RUNTIME_WARM_UP_MS));
    group.measurement_time(Duration::from_millis(LARGE_RUNTIME_MEASURE_MS));
}

pub fn default_rng() -> StdRng {
    StdRng::seed_from_u64(RNG_SEED)
}

/// Shape of a generated input array.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash, clap::ValueEnum)]
pub enum Pattern {
    /// Uniform integers in `0..=RANDOM_MAX`.
    Random,
    /// `0, 1, .., len - 1`.
    Sorted,
    /// Three ascending blocks, each restarting at zero.
    PartiallySorted,
}

pub const ALL_PATTERNS: [Pattern; 3] = [
    Pattern::Random,
    Pattern::Sorted,
    Pattern::PartiallySorted,
];

impl Pattern {
    pub fn label(self) -> &'static str {
        match self {
            Self::Random => "random",
            Self::Sorted => "sorted",
            Self::PartiallySorted => "partially_sorted",
        }
    }

    pub fn heading(self) -> &'static str {
        match self {
            Self::Random => "random array",
            Self::Sorted => "sorted array",
            Self::PartiallySorted => "partially sorted array",
        }
    }

    pub fn generate<R: Rng + ?Sized>(self, len: usize, rng: &mut R) -> Vec<i64> {
        match self {
            Self::Random => (0..len).map(|_| rng.random_range(0..=RANDOM_MAX)).collect(),
            Self::Sorted => (0..len as i64).collect(),
            Self::PartiallySorted => {
                let block = len / 3;
                let last = len - 2 * block;
                let mut data = Vec::with_capacity(len);
                data.extend(0..block as i64);
                data.extend(0..block as i64);
                data.extend(0..last as i64);
                data
            }
        }
    }
}

/// How often a sort is timed: `repeat` rounds of `number` back-to-back runs.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct TimingConfig {
    pub repeat: usize,
    pub number: usize,
}

impl Default for TimingConfig {
    fn default() -> Self {
        Self {
            repeat: 3,
            number: 10,
        }
    }
}

/// Total wall-clock time of each round. Every run sorts a fresh copy of
/// `input`; copying is not timed.
pub fn time_rounds(
    algo: SortAlgorithm,
    input: &[i64],
    timing: TimingConfig,
    ctx: &mut SortContext<i64>,
) -> Vec<Duration> {
    (0..timing.repeat)
        .map(|round| {
            let mut total = Duration::ZERO;
            for _ in 0..timing.number {
                let mut data = input.to_vec();
                let start = Instant::now();
                sort_with_ctx(algo, &mut data, ctx);
                total += start.elapsed();
                black_box(&data);
            }
            log::debug!(
                "{} round {round}: {:?} over {} runs",
                algorithm_name(algo),
                total,
                timing.number
            );
            total
        })
        .collect()
}

/// Fastest round of [`time_rounds`], or zero when no round ran.
pub fn min_execution_time(
    algo: SortAlgorithm,
    input: &[i64],
    timing: TimingConfig,
    ctx: &mut SortContext<i64>,
) -> Duration {
    fastest(&time_rounds(algo, input, timing, ctx))
}

/// Shortest of `rounds`, or zero when there are none.
pub fn fastest(rounds: &[Duration]) -> Duration {
    rounds.iter().copied().min().unwrap_or_default()
}

/// Sorts a copy of `input` with `algo` and checks it against `slice::sort`.
pub fn sorts_correctly(algo: SortAlgorithm, input: &[i64], ctx: &mut SortContext<i64>) -> bool {
    let mut data = input.to_vec();
    sort_with_ctx(algo, &mut data, ctx);
    matches_reference(input, &data)
}

/// Whether `output` is exactly `input` in ascending order, with no element
/// dropped or duplicated.
pub fn matches_reference(input: &[i64], output: &[i64]) -> bool {
    let mut expected = input.to_vec();
    expected.sort();
    expected == output
}

#[derive(Clone, Copy, Debug)]
pub struct Report {
    pub algorithm: SortAlgorithm,
    pub min_time: Duration,
}

impl fmt::Display for Report {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Algorithm: {}. Minimum execution time: {}",
            algorithm_name(self.algorithm),
            self.min_time.as_secs_f64()
        )
    }
}
