//! The bulk parallel-for primitive.
//!
//! Backed by `rayon`'s work-stealing scheduler rather than a hand-rolled one —
//! the spec treats general-purpose task scheduling as a non-goal and only
//! asks for the bulk-parallel-for *shape* (cooperative stealing, advisory
//! grain size, unspecified iteration order).

use rayon::prelude::*;

/// Applies `body` to every index in `lo..hi`. Iterations may run on any
/// worker thread and in any order; `grain` is an advisory lower bound on the
/// amount of contiguous work handed to a single task before it may be split
/// further.
///
/// Equivalent to a sequential `for i in lo..hi { body(i) }` when `body` is
/// data-race-free across iterations.
pub fn parallel_for<F>(lo: usize, hi: usize, grain: usize, body: F)
where
    F: Fn(usize) + Sync,
{
    if lo >= hi {
        return;
    }
    let grain = grain.max(1);
    if hi - lo <= grain {
        for i in lo..hi {
            body(i);
        }
        return;
    }
    (lo..hi).into_par_iter().with_min_len(grain).for_each(body);
}
