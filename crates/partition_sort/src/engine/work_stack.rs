use std::ops::Range;

use crate::{PivotStrategy, SortContext};

use super::common;

pub fn sort(data: &mut [i32], pivot: PivotStrategy, ctx: &mut SortContext) {
    if data.len() < 2 {
        return;
    }

    // Pending ranges, larger sides only. The smaller side is always handled
    // next, so the stack holds at most log2(len) + 1 entries.
    let mut pending: Vec<Range<usize>> = Vec::new();
    let mut current = 0..data.len();

    loop {
        while current.len() >= 2 {
            ctx.stats.max_depth = ctx.stats.max_depth.max(pending.len() + 1);

            let base = current.start;
            let (left, right) = common::split(&mut data[current.clone()], pivot, ctx);
            let left = base..base + left.len();
            let right = current.end - right.len()..current.end;

            if left.len() < right.len() {
                pending.push(right);
                current = left;
            } else {
                pending.push(left);
                current = right;
            }
        }

        match pending.pop() {
            Some(next) => current = next,
            None => return,
        }
    }
}
