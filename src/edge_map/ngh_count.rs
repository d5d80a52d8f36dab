//! The count-reducing emit variant (§4.C5): histogram the number of active
//! sources relaxing an edge into each eligible destination, then let the
//! caller turn that count into a next-subset entry. Used by priority
//! algorithms (k-core peeling removes a vertex's incident edges and needs to
//! know how many were removed this round to recompute its bucket).

use core::sync::atomic::AtomicU32;

use crate::edge_map::Flags;
use crate::graph::{GraphView, Vid, Weight};
use crate::primitives::{fetch_add_u32, parallel_for};
use crate::relax::CountReducingRelaxation;
use crate::subset::VertexSubset;

/// For each `v` in `[0, n)` with `relax.cond(v)` true, sums
/// `relax.count_edge(u, v, w)` over every edge `(u, v, w)` (in the direction
/// `flags` selects) whose source `u` is in `active`. Vertices failing `cond`,
/// or edges where `count_edge` returns `None`, contribute nothing; vertices
/// with no contribution are left at count `0`.
pub fn ngh_count<W, A, R>(
    graph: &GraphView<W>,
    active: &VertexSubset<A>,
    relax: &R,
    flags: Flags,
) -> Vec<u32>
where
    W: Weight,
    A: Copy + Send + Sync + Default,
    R: CountReducingRelaxation<W>,
{
    let n = graph.n();
    let in_edges = flags.contains(Flags::IN_EDGES);
    let members: Vec<Vid> = active.members().into_iter().map(|(v, _)| v).collect();
    let counts: Vec<AtomicU32> = (0..n).map(|_| AtomicU32::new(0)).collect();

    parallel_for(0, members.len(), 1, |i| {
        let u = members[i];
        graph.neighbors(u, in_edges).decode(|v, w| {
            if relax.cond(v) {
                if let Some(delta) = relax.count_edge(u, v, w) {
                    fetch_add_u32(&counts[v as usize], delta as u32);
                }
            }
        });
    });

    counts.into_iter().map(AtomicU32::into_inner).collect()
}

/// Turns a count histogram from [`ngh_count`] into next-subset entries: for
/// every `v` with a nonzero count, `apply(v, count)` decides whether `v`
/// continues to participate and, if so, with what payload.
pub fn ngh_count_apply<T, F>(counts: &[u32], apply: F) -> Vec<(Vid, T)>
where
    T: Copy + Send + Sync,
    F: Fn(Vid, u32) -> Option<T> + Sync,
{
    counts
        .iter()
        .enumerate()
        .filter(|&(_, &c)| c > 0)
        .filter_map(|(v, &c)| apply(v as Vid, c).map(|t| (v as Vid, t)))
        .collect()
}
