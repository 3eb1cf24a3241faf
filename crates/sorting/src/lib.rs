//! In-memory sorting algorithms built around one stable merge primitive.
//!
//! The centerpiece is [`hybrid_sort`]: insertion sort over fixed-size runs,
//! then bottom-up merging of adjacent runs with a doubling window. The other
//! algorithms exist for comparison and are reachable through
//! [`SortAlgorithm`].
//!
//! ```
//! let mut data = vec![5, 3, 9, 1, 3];
//! sorting::hybrid_sort(&mut data);
//! assert_eq!(data, vec![1, 3, 3, 5, 9]);
//! ```

use std::fmt;
use std::str::FromStr;

use rand::SeedableRng;
use rand::rngs::StdRng;

mod algorithms;
mod error;

pub use algorithms::common::{insertion_sort_range_by, is_sorted_by};
pub use algorithms::merge::{merge, merge_by, merge_into_by};
pub use error::SortError;

/// Run length used by [`hybrid_sort`] for the insertion sort pass.
pub const DEFAULT_MIN_RUN: usize = 32;

const RNG_SEED: u64 = 0x5EED_2026;

#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash)]
pub enum SortAlgorithm {
    Std,
    BubbleSortBasic,
    BubbleSort,
    InsertionSort,
    MergeSort,
    QuickSort,
    QuickSortMedian3,
    Timsort,
}

pub const ALL_ALGORITHMS: [SortAlgorithm; 8] = [
    SortAlgorithm::Std,
    SortAlgorithm::BubbleSortBasic,
    SortAlgorithm::BubbleSort,
    SortAlgorithm::InsertionSort,
    SortAlgorithm::MergeSort,
    SortAlgorithm::QuickSort,
    SortAlgorithm::QuickSortMedian3,
    SortAlgorithm::Timsort,
];

pub fn all_algorithms() -> &'static [SortAlgorithm] {
    &ALL_ALGORITHMS
}

pub fn algorithm_name(algo: SortAlgorithm) -> &'static str {
    match algo {
        SortAlgorithm::Std => "sorted",
        SortAlgorithm::BubbleSortBasic => "bubble_sort_basic",
        SortAlgorithm::BubbleSort => "bubble_sort",
        SortAlgorithm::InsertionSort => "insertion_sort",
        SortAlgorithm::MergeSort => "merge_sort",
        SortAlgorithm::QuickSort => "quicksort",
        SortAlgorithm::QuickSortMedian3 => "quicksort_optimized",
        SortAlgorithm::Timsort => "timsort",
    }
}

/// Quadratic algorithms, too slow for the default benchmark sizes.
pub fn is_quadratic(algo: SortAlgorithm) -> bool {
    matches!(
        algo,
        SortAlgorithm::BubbleSortBasic | SortAlgorithm::BubbleSort | SortAlgorithm::InsertionSort
    )
}

impl fmt::Display for SortAlgorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(algorithm_name(*self))
    }
}

impl FromStr for SortAlgorithm {
    type Err = SortError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        all_algorithms()
            .iter()
            .copied()
            .find(|&algo| algorithm_name(algo) == s)
            .ok_or_else(|| SortError::UnknownAlgorithm(s.to_owned()))
    }
}

/// Parameters of the hybrid sort.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct HybridConfig {
    min_run: usize,
}

impl HybridConfig {
    pub fn new(min_run: usize) -> Result<Self, SortError> {
        if min_run == 0 {
            return Err(SortError::InvalidMinRun(min_run));
        }
        Ok(Self { min_run })
    }

    #[inline]
    pub fn min_run(&self) -> usize {
        self.min_run
    }
}

impl Default for HybridConfig {
    fn default() -> Self {
        Self {
            min_run: DEFAULT_MIN_RUN,
        }
    }
}

/// State reused across repeated sort calls: the hybrid sort configuration,
/// its merge scratch buffer, and the pivot generator of the quicksorts.
#[derive(Clone, Debug)]
pub struct SortContext<T> {
    pub config: HybridConfig,
    pub scratch: Vec<T>,
    pub rng: StdRng,
}

impl<T> SortContext<T> {
    pub fn new(config: HybridConfig) -> Self {
        Self::with_seed(config, RNG_SEED)
    }

    pub fn with_seed(config: HybridConfig, seed: u64) -> Self {
        Self {
            config,
            scratch: Vec::new(),
            rng: StdRng::seed_from_u64(seed),
        }
    }
}

impl<T> Default for SortContext<T> {
    fn default() -> Self {
        Self::new(HybridConfig::default())
    }
}

/// Sorts `data` ascending in place and hands the same slice back.
pub fn hybrid_sort<T: Ord + Clone>(data: &mut [T]) -> &mut [T] {
    hybrid_sort_by(data, |a, b| a < b)
}

pub fn hybrid_sort_by<T, F>(data: &mut [T], is_less: F) -> &mut [T]
where
    T: Clone,
    F: FnMut(&T, &T) -> bool,
{
    let mut scratch = Vec::new();
    hybrid_sort_with(data, HybridConfig::default(), &mut scratch, is_less)
}

/// Hybrid sort with an explicit configuration and a caller-owned merge
/// buffer, which may be reused across calls.
pub fn hybrid_sort_with<'a, T, F>(
    data: &'a mut [T],
    config: HybridConfig,
    scratch: &mut Vec<T>,
    is_less: F,
) -> &'a mut [T]
where
    T: Clone,
    F: FnMut(&T, &T) -> bool,
{
    algorithms::timsort::sort_by(data, config, scratch, is_less)
}

pub fn insertion_sort<T: Ord + Clone>(data: &mut [T]) -> &mut [T] {
    algorithms::insertion_sort::sort(data)
}

pub fn bubble_sort<T: Ord>(data: &mut [T]) -> &mut [T] {
    algorithms::bubble_sort::sort(data)
}

pub fn bubble_sort_basic<T: Ord>(data: &mut [T]) -> &mut [T] {
    algorithms::bubble_sort::sort_basic(data)
}

pub fn merge_sort<T: Ord + Clone>(data: &[T]) -> Vec<T> {
    algorithms::merge_sort::sort(data)
}

pub fn quick_sort<T: Ord + Clone, R: rand::Rng + ?Sized>(data: &[T], rng: &mut R) -> Vec<T> {
    algorithms::quick_sort::sort(data, rng)
}

pub fn quick_sort_median3<T: Ord + Clone, R: rand::Rng + ?Sized>(
    data: &[T],
    rng: &mut R,
) -> Vec<T> {
    algorithms::quick_sort::sort_median3(data, rng)
}

pub fn sort<T: Ord + Clone>(algo: SortAlgorithm, data: &mut [T]) {
    let mut ctx = SortContext::default();
    sort_with_ctx(algo, data, &mut ctx);
}

/// Sorts `data` in place with `algo`. Algorithms that build a new vector have
/// their result copied back.
pub fn sort_with_ctx<T: Ord + Clone>(
    algo: SortAlgorithm,
    data: &mut [T],
    ctx: &mut SortContext<T>,
) {
    match algo {
        SortAlgorithm::Std => data.sort(),
        SortAlgorithm::BubbleSortBasic => {
            bubble_sort_basic(data);
        }
        SortAlgorithm::BubbleSort => {
            bubble_sort(data);
        }
        SortAlgorithm::InsertionSort => {
            insertion_sort(data);
        }
        SortAlgorithm::MergeSort => {
            let sorted = merge_sort(data);
            data.clone_from_slice(&sorted);
        }
        SortAlgorithm::QuickSort => {
            let sorted = quick_sort(data, &mut ctx.rng);
            data.clone_from_slice(&sorted);
        }
        SortAlgorithm::QuickSortMedian3 => {
            let sorted = quick_sort_median3(data, &mut ctx.rng);
            data.clone_from_slice(&sorted);
        }
        SortAlgorithm::Timsort => {
            hybrid_sort_with(data, ctx.config, &mut ctx.scratch, |a, b| a < b);
        }
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use rand::rngs::StdRng;
    use rand::{Rng, SeedableRng};

    use super::*;

    fn assert_sorts_like_std(data: &[i64]) {
        for &algo in all_algorithms() {
            let mut actual = data.to_vec();
            sort(algo, &mut actual);

            let mut expected = data.to_vec();
            expected.sort();

            assert_eq!(
                actual,
                expected,
                "algorithm={} input_len={}",
                algorithm_name(algo),
                data.len(),
            );
        }
    }

    #[test]
    fn algorithm_names_are_unique() {
        let mut seen = HashSet::new();
        for &algo in all_algorithms() {
            assert!(seen.insert(algorithm_name(algo)));
        }
    }

    #[test]
    fn algorithm_names_parse_back() {
        for &algo in all_algorithms() {
            assert_eq!(algorithm_name(algo).parse::<SortAlgorithm>(), Ok(algo));
            assert_eq!(algo.to_string(), algorithm_name(algo));
        }
        assert_eq!(
            "shell_sort".parse::<SortAlgorithm>(),
            Err(SortError::UnknownAlgorithm("shell_sort".to_owned()))
        );
    }

    #[test]
    fn zero_min_run_is_rejected() {
        assert_eq!(HybridConfig::new(0), Err(SortError::InvalidMinRun(0)));
        assert_eq!(HybridConfig::new(1).map(|c| c.min_run()), Ok(1));
        assert_eq!(HybridConfig::default().min_run(), DEFAULT_MIN_RUN);
    }

    #[test]
    fn edge_cases() {
        let cases = [
            vec![],
            vec![42],
            vec![1, 2, 3, 4, 5, 6],
            vec![6, 5, 4, 3, 2, 1],
            vec![7; 128],
            vec![i64::MIN, 1, i64::MAX, 0, i64::MAX - 1, -2],
            vec![5, 5, 3, 3, 1, 1, 4, 4, 2, 2, 0, 0],
        ];

        for case in &cases {
            assert_sorts_like_std(case);
        }
    }

    #[test]
    fn fixed_seed_random_cases() {
        let mut rng = StdRng::seed_from_u64(0x5EED_2026);
        for &size in &[2_usize, 3, 8, 31, 32, 33, 63, 64, 127, 128, 511, 1000] {
            let data: Vec<i64> = (0..size).map(|_| rng.random()).collect();
            assert_sorts_like_std(&data);
        }
    }

    #[test]
    fn fixed_seed_many_duplicates() {
        let mut rng = StdRng::seed_from_u64(0xD0D1_2026);
        for &size in &[64_usize, 1024] {
            let data: Vec<i64> = (0..size).map(|_| rng.random_range(0..16) * 17).collect();
            assert_sorts_like_std(&data);
        }
    }

    #[test]
    fn hybrid_sort_entry_points() {
        assert_eq!(hybrid_sort::<i32>(&mut []), &[] as &[i32]);
        assert_eq!(hybrid_sort(&mut [5]), &[5]);

        let mut data: Vec<i32> = (0..10_000).rev().collect();
        hybrid_sort(&mut data);
        assert!(data.iter().copied().eq(0..10_000));

        let mut by_key = vec![(2, 'x'), (1, 'y'), (2, 'z'), (1, 'w')];
        hybrid_sort_by(&mut by_key, |a, b| a.0 < b.0);
        assert_eq!(by_key, vec![(1, 'y'), (1, 'w'), (2, 'x'), (2, 'z')]);
    }

    #[test]
    fn context_scratch_is_reused() {
        let mut ctx = SortContext::new(HybridConfig::new(8).unwrap());
        let mut rng = StdRng::seed_from_u64(0xC0_47E7);
        for _ in 0..4 {
            let mut data: Vec<u16> = (0..300).map(|_| rng.random()).collect();
            let mut expected = data.clone();
            expected.sort();
            sort_with_ctx(SortAlgorithm::Timsort, &mut data, &mut ctx);
            assert_eq!(data, expected);
        }
        assert!(ctx.scratch.capacity() >= 256);
    }
}
