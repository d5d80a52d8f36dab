//! Dense-mode traversal: pull (iterate every destination, break-early on an
//! active in-neighbor) and forward/push (iterate every active source).
//! Grounded in the reference implementation's `edgeMapDense` /
//! `edgeMapDenseForward`.

use rayon::prelude::*;

use crate::config::EngineConfig;
use crate::edge_map::Flags;
use crate::graph::{BreakEarly, GraphView, Vid, Weight};
use crate::primitives::parallel_for;
use crate::relax::Relaxation;
use crate::subset::VertexSubset;

/// Pull traversal: for each destination `v`, stop at the first active
/// in-neighbor (or out-neighbor, if `in_edges` is set) whose relaxation
/// succeeds.
pub(crate) fn run_pull<W, A, R>(
    graph: &GraphView<W>,
    active: &VertexSubset<A>,
    relax: &R,
    flags: Flags,
    config: &EngineConfig,
    collect_output: bool,
) -> VertexSubset<R::Payload>
where
    W: Weight,
    A: Copy + Send + Sync + Default,
    R: Relaxation<W>,
{
    let n = graph.n();
    let dense_parallel = flags.contains(Flags::DENSE_PARALLEL);
    let grain = if flags.contains(Flags::FINE_PARALLEL) {
        config.dense_fine_grain
    } else {
        config.dense_coarse_grain
    };
    // `in_edges` flips the usual direction: §4.C5 pulls from the opposite
    // side when the flag is set.
    let pull_direction_in = !flags.contains(Flags::IN_EDGES);

    let mut present = vec![false; n];
    let mut payload: Vec<R::Payload> = vec![R::Payload::default(); n];
    let present_ptr = present.as_mut_ptr() as usize;
    let payload_ptr = payload.as_mut_ptr() as usize;

    parallel_for(0, n, grain, |v_idx| {
        let v = v_idx as Vid;
        if !relax.cond(v) {
            return;
        }
        let neighbors = graph.neighbors(v, pull_direction_in);
        if dense_parallel {
            let pairs: Vec<(Vid, W)> = neighbors.iter().collect();
            let found: Option<(Vid, R::Payload)> = pairs.par_iter().find_map_any(|&(u, w)| {
                if !active.contains(u) {
                    return None;
                }
                relax.update_atomic(u, v, w).map(|p| (u, p))
            });
            if let Some((_, p)) = found {
                // SAFETY: `v_idx` is unique per call across all tasks.
                unsafe {
                    *(present_ptr as *mut bool).add(v_idx) = true;
                    *(payload_ptr as *mut R::Payload).add(v_idx) = p;
                }
            }
        } else {
            let mut accepted: Option<R::Payload> = None;
            neighbors.decode_break_early(|u, w| {
                if !active.contains(u) {
                    return BreakEarly::Continue;
                }
                match relax.update(u, v, w) {
                    Some(p) => {
                        accepted = Some(p);
                        BreakEarly::Stop
                    }
                    None => BreakEarly::Continue,
                }
            });
            if let Some(p) = accepted {
                // SAFETY: `v_idx` is unique per call across all tasks.
                unsafe {
                    *(present_ptr as *mut bool).add(v_idx) = true;
                    *(payload_ptr as *mut R::Payload).add(v_idx) = p;
                }
            }
        }
    });

    if !collect_output {
        return VertexSubset::empty(n);
    }
    VertexSubset::make_dense(n, present, payload)
}

/// Forward/push traversal: for each active source, relax every neighbor and
/// mark the destination present on success. No break-early — every edge out
/// of an active source is considered.
pub(crate) fn run_forward<W, A, R>(
    graph: &GraphView<W>,
    active: &VertexSubset<A>,
    relax: &R,
    flags: Flags,
    config: &EngineConfig,
    collect_output: bool,
) -> VertexSubset<R::Payload>
where
    W: Weight,
    A: Copy + Send + Sync + Default,
    R: Relaxation<W>,
{
    let n = graph.n();
    let in_edges = flags.contains(Flags::IN_EDGES);
    let members: Vec<Vid> = active.members().into_iter().map(|(v, _)| v).collect();

    let mut present = vec![false; n];
    let mut payload: Vec<R::Payload> = vec![R::Payload::default(); n];
    let present_ptr = present.as_mut_ptr() as usize;
    let payload_ptr = payload.as_mut_ptr() as usize;

    parallel_for(0, members.len(), config.dense_fine_grain, |i| {
        let u = members[i];
        let neighbors = graph.neighbors(u, in_edges);
        neighbors.decode(|v, w| {
            if relax.cond(v) {
                if let Some(p) = relax.update_atomic(u, v, w) {
                    // SAFETY: only the winning `updateAtomic` call (at most
                    // one per `v` per the relaxation contract) reaches here
                    // for a given `v`.
                    unsafe {
                        *(present_ptr as *mut bool).add(v as usize) = true;
                        *(payload_ptr as *mut R::Payload).add(v as usize) = p;
                    }
                }
            }
        });
    });

    if !collect_output {
        return VertexSubset::empty(n);
    }
    VertexSubset::make_dense(n, present, payload)
}
