//! Reverse-order fill, sort and verify, as a reusable run.

use tracing::{debug, info, warn};

use crate::{SortParams, SortStats, sort_all};

/// Buffer length used by the reference run.
pub const DRIVER_LEN: usize = 8 * 1024;

/// `buffer[k] = n - 1 - k`.
///
/// Lengths beyond `i32::MAX` cannot be expressed and saturate.
pub fn descending(n: usize) -> Vec<i32> {
    (0..n)
        .rev()
        .map(|k| i32::try_from(k).unwrap_or(i32::MAX))
        .collect()
}

/// First index `k` with `buffer[k] != k`, if any.
pub fn first_mismatch(buffer: &[i32]) -> Option<usize> {
    buffer
        .iter()
        .enumerate()
        .position(|(k, &v)| usize::try_from(v) != Ok(k))
}

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct DriverReport {
    pub len: usize,
    pub stats: SortStats,
    pub first_mismatch: Option<usize>,
}

impl DriverReport {
    pub fn passed(&self) -> bool {
        self.first_mismatch.is_none()
    }
}

/// Fills a buffer of `n` elements in descending order, sorts the full range
/// with `params`, and checks that `buffer[k] == k` everywhere.
pub fn run(n: usize, params: &SortParams) -> DriverReport {
    let mut buffer = descending(n);

    info!(len = n, params = %params.name(), "start to sort");
    let stats = sort_all(params, &mut buffer);
    info!(len = n, "sorted");
    debug!(
        comparisons = stats.comparisons,
        swaps = stats.swaps,
        partitions = stats.partitions,
        max_depth = stats.max_depth,
        "sort stats"
    );

    let first_mismatch = first_mismatch(&buffer);
    match first_mismatch {
        None => info!(len = n, "sort is successful"),
        Some(k) => warn!(index = k, value = buffer[k], "sort is wrong"),
    }

    DriverReport {
        len: n,
        stats,
        first_mismatch,
    }
}
