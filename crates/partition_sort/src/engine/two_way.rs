use crate::{PivotStrategy, SortContext};

use super::common;

pub fn sort(data: &mut [i32], pivot: PivotStrategy, ctx: &mut SortContext) {
    two_way(data, pivot, ctx, 1);
}

/// Left side first, then right side, one call frame per partition level.
fn two_way(data: &mut [i32], pivot: PivotStrategy, ctx: &mut SortContext, depth: usize) {
    if data.len() < 2 {
        return;
    }
    ctx.stats.max_depth = ctx.stats.max_depth.max(depth);

    let (left, right) = common::split(data, pivot, ctx);
    two_way(left, pivot, ctx, depth + 1);
    two_way(right, pivot, ctx, depth + 1);
}
