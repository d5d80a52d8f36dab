//! Work-optimal sparse/dense mode selection (§4.C5).

use crate::config::EngineConfig;
use crate::edge_map::Flags;
use crate::graph::{GraphView, Weight};
use crate::subset::VertexSubset;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Mode {
    Sparse,
    DensePull,
    DenseForward,
}

fn dense_variant(flags: Flags) -> Mode {
    if flags.contains(Flags::DENSE_FORWARD) {
        Mode::DenseForward
    } else {
        Mode::DensePull
    }
}

/// Chooses a traversal mode for this call, densifying `active` in place when
/// the heuristic selects dense mode from a sparse starting representation.
pub(crate) fn select_mode<W: Weight, A: Copy + Send + Sync + Default>(
    graph: &GraphView<W>,
    active: &mut VertexSubset<A>,
    flags: Flags,
    config: &EngineConfig,
    threshold: Option<usize>,
) -> Mode {
    let n = graph.n();
    if active.is_dense() && active.size() > n / 10 {
        return dense_variant(flags);
    }

    let m = active.size();
    let w = active.out_work(graph);
    let tau = config.dense_threshold(graph.m(), threshold);
    if m + w > tau && !flags.contains(Flags::NO_DENSE) {
        active.to_dense();
        return dense_variant(flags);
    }
    Mode::Sparse
}
