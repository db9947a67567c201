mod engine;
mod error;

pub mod driver;

use rand::SeedableRng;
use rand::rngs::StdRng;

pub use error::SortError;

#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash)]
pub enum PivotStrategy {
    /// Pivot on `buffer[first]`. Reverse-sorted input degrades to O(n^2).
    FirstElement,
    /// Median of the first, middle and last elements, swapped into `first`.
    /// Still quadratic on reverse-sorted input with this partition scheme.
    MedianOfThree,
    /// Uniformly chosen element, swapped into `first`. Seeded with
    /// [`PIVOT_SEED`], so runs are reproducible.
    Random,
}

#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash)]
pub enum Recursion {
    /// Recurse into the left side, then the right side. Call depth can reach n.
    TwoWay,
    /// Recurse into the smaller side and loop on the larger one.
    SmallerFirst,
    /// No recursion; pending ranges live on a heap-allocated stack.
    WorkStack,
}

pub const ALL_PIVOT_STRATEGIES: [PivotStrategy; 3] = [
    PivotStrategy::FirstElement,
    PivotStrategy::MedianOfThree,
    PivotStrategy::Random,
];

pub const ALL_RECURSIONS: [Recursion; 3] = [
    Recursion::TwoWay,
    Recursion::SmallerFirst,
    Recursion::WorkStack,
];

pub fn pivot_name(pivot: PivotStrategy) -> &'static str {
    match pivot {
        PivotStrategy::FirstElement => "first_element",
        PivotStrategy::MedianOfThree => "median_of_three",
        PivotStrategy::Random => "random",
    }
}

pub fn recursion_name(recursion: Recursion) -> &'static str {
    match recursion {
        Recursion::TwoWay => "two_way",
        Recursion::SmallerFirst => "smaller_first",
        Recursion::WorkStack => "work_stack",
    }
}

#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash)]
pub struct SortParams {
    pub pivot: PivotStrategy,
    pub recursion: Recursion,
}

impl SortParams {
    pub const fn new(pivot: PivotStrategy, recursion: Recursion) -> Self {
        Self { pivot, recursion }
    }

    /// `"<pivot>/<recursion>"`, e.g. `"first_element/two_way"`.
    pub fn name(&self) -> String {
        format!(
            "{}/{}",
            pivot_name(self.pivot),
            recursion_name(self.recursion)
        )
    }
}

impl Default for SortParams {
    fn default() -> Self {
        DEFAULT_PARAMS
    }
}

/// First-element pivot with a call stack bounded by O(log n).
pub const DEFAULT_PARAMS: SortParams =
    SortParams::new(PivotStrategy::FirstElement, Recursion::SmallerFirst);

/// Every pivot/recursion combination.
pub fn all_params() -> impl Iterator<Item = SortParams> {
    ALL_PIVOT_STRATEGIES.into_iter().flat_map(|pivot| {
        ALL_RECURSIONS
            .into_iter()
            .map(move |recursion| SortParams::new(pivot, recursion))
    })
}

/// Work counters collected during one sort call.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub struct SortStats {
    pub comparisons: u64,
    pub swaps: u64,
    pub partitions: u64,
    /// Deepest call nesting reached; for `WorkStack`, the deepest pending stack.
    pub max_depth: usize,
}

pub const PIVOT_SEED: u64 = 0x5EED_2026;

#[derive(Clone, Debug)]
pub(crate) struct SortContext {
    pub stats: SortStats,
    pub rng: StdRng,
}

impl Default for SortContext {
    fn default() -> Self {
        Self {
            stats: SortStats::default(),
            rng: StdRng::seed_from_u64(PIVOT_SEED),
        }
    }
}

/// Sorts `buffer[first..=last]` ascending with [`DEFAULT_PARAMS`].
///
/// `first > last` is an empty range and leaves the buffer untouched.
pub fn sort(buffer: &mut [i32], first: usize, last: usize) -> Result<(), SortError> {
    sort_with(&DEFAULT_PARAMS, buffer, first, last).map(|_| ())
}

/// Sorts `buffer[first..=last]` ascending and reports the work done.
///
/// Bounds are checked before anything is written, so on error the buffer is
/// unchanged. Elements outside the range are never touched.
pub fn sort_with(
    params: &SortParams,
    buffer: &mut [i32],
    first: usize,
    last: usize,
) -> Result<SortStats, SortError> {
    error::check_range(first, last, buffer.len())?;

    let mut ctx = SortContext::default();
    if first < last {
        engine::sort_slice(params, &mut buffer[first..=last], &mut ctx);
    }
    Ok(ctx.stats)
}

/// Sorts the whole buffer. Empty buffers are fine.
pub fn sort_all(params: &SortParams, buffer: &mut [i32]) -> SortStats {
    let mut ctx = SortContext::default();
    engine::sort_slice(params, buffer, &mut ctx);
    ctx.stats
}
