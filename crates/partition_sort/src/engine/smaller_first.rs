use crate::{PivotStrategy, SortContext};

use super::common;

pub fn sort(data: &mut [i32], pivot: PivotStrategy, ctx: &mut SortContext) {
    smaller_first(data, pivot, ctx, 1);
}

fn smaller_first(
    mut data: &mut [i32],
    pivot: PivotStrategy,
    ctx: &mut SortContext,
    depth: usize,
) {
    while data.len() >= 2 {
        ctx.stats.max_depth = ctx.stats.max_depth.max(depth);

        let (left, right) = common::split(data, pivot, ctx);
        if left.len() < right.len() {
            smaller_first(left, pivot, ctx, depth + 1);
            data = right;
        } else {
            smaller_first(right, pivot, ctx, depth + 1);
            data = left;
        }
    }
}
