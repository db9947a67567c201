pub mod common;
pub mod smaller_first;
pub mod two_way;
pub mod work_stack;

use crate::{Recursion, SortContext, SortParams};

/// Sorts the whole of `data` with the given configuration.
pub fn sort_slice(params: &SortParams, data: &mut [i32], ctx: &mut SortContext) {
    match params.recursion {
        Recursion::TwoWay => two_way::sort(data, params.pivot, ctx),
        Recursion::SmallerFirst => smaller_first::sort(data, params.pivot, ctx),
        Recursion::WorkStack => work_stack::sort(data, params.pivot, ctx),
    }
}
