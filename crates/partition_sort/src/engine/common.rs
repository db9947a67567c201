use rand::Rng;

use crate::{PivotStrategy, SortContext, SortStats};

#[inline]
fn le(a: i32, b: i32, stats: &mut SortStats) -> bool {
    stats.comparisons += 1;
    a <= b
}

#[inline]
fn gt(a: i32, b: i32, stats: &mut SortStats) -> bool {
    stats.comparisons += 1;
    a > b
}

#[inline]
fn swap(data: &mut [i32], a: usize, b: usize, stats: &mut SortStats) {
    data.swap(a, b);
    stats.swaps += 1;
}

/// Index of the median of `data[0]`, `data[len / 2]` and `data[len - 1]`.
#[inline]
pub fn median3_index(data: &[i32], stats: &mut SortStats) -> usize {
    let len = data.len();
    let (a, b, c) = (0, len >> 1, len - 1);
    stats.comparisons += 2;
    if data[a] < data[b] {
        if data[b] < data[c] {
            b
        } else {
            stats.comparisons += 1;
            if data[a] < data[c] { c } else { a }
        }
    } else if data[a] < data[c] {
        a
    } else {
        stats.comparisons += 1;
        if data[b] < data[c] { c } else { b }
    }
}

/// Moves the chosen pivot to index 0. `FirstElement` leaves `data` alone.
#[inline]
pub fn place_pivot(data: &mut [i32], pivot: PivotStrategy, ctx: &mut SortContext) {
    let chosen = match pivot {
        PivotStrategy::FirstElement => return,
        PivotStrategy::MedianOfThree if data.len() < 3 => return,
        PivotStrategy::MedianOfThree => median3_index(data, &mut ctx.stats),
        PivotStrategy::Random => ctx.rng.random_range(0..data.len()),
    };
    if chosen != 0 {
        swap(data, 0, chosen, &mut ctx.stats);
    }
}

/// Partitions `data` around `data[0]` and returns the pivot's final index.
///
/// The pivot stays at index 0 while both cursors scan: `i` stops at the first
/// element greater than the pivot (or at the last slot), `j` stops at the first
/// element not greater than it (or at index 0). Out-of-place pairs are swapped
/// until the cursors meet, then the pivot is swapped into `j`.
///
/// On return every element left of the partition point is `<=` the pivot and
/// every element right of it is `>` the pivot.
pub fn partition_at_first(data: &mut [i32], stats: &mut SortStats) -> usize {
    debug_assert!(data.len() >= 2);
    stats.partitions += 1;

    let last = data.len() - 1;
    let pivot = data[0];
    let mut i = 0usize;
    let mut j = last;

    while i < j {
        while le(data[i], pivot, stats) && i < last {
            i += 1;
        }
        while j > 0 && gt(data[j], pivot, stats) {
            j -= 1;
        }
        if i < j {
            swap(data, i, j, stats);
        }
    }

    if j != 0 {
        swap(data, 0, j, stats);
    }
    j
}

/// Picks the pivot, partitions, and splits `data` into the two sides that are
/// still unsorted, with the pivot slot excluded.
#[inline]
pub fn split<'a>(
    data: &'a mut [i32],
    pivot: PivotStrategy,
    ctx: &mut SortContext,
) -> (&'a mut [i32], &'a mut [i32]) {
    place_pivot(data, pivot, ctx);
    let mid = partition_at_first(data, &mut ctx.stats);
    let (left, rest) = data.split_at_mut(mid);
    (left, &mut rest[1..])
}
