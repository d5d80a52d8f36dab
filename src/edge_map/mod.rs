//! The edge-traversal operator (C5): the engine's single busiest module.
//! Chooses sparse or dense traversal mode from a work estimate, invokes the
//! caller's [`crate::relax::Relaxation`], and materializes the next active
//! set. Grounded in the reference implementation's `edgeMapData` dispatcher
//! (`gbbs/edge_map_data.h`), split here into `mode` (dispatch), `sparse`,
//! `dense` (pull + forward), and `ngh_count` (the histogram-emit variant).

mod dense;
mod flags;
mod mode;
mod ngh_count;
mod sparse;

pub use flags::Flags;
pub use ngh_count::{ngh_count, ngh_count_apply};

use crate::config::EngineConfig;
use crate::graph::{GraphView, Vid, Weight};
use crate::primitives::parallel_for;
use crate::relax::Relaxation;
use crate::subset::VertexSubset;

/// Applies a user-defined relaxation across every edge out of (or into)
/// `active`, automatically choosing sparse or dense traversal, and returns
/// the next active set carrying each destination's relaxation payload.
///
/// `active` may be densified in place as a side effect of mode selection
/// (§4.C5); callers that need the pre-call representation should clone
/// first. `threshold` overrides the default dense-mode threshold of
/// `graph.m() / config.dense_threshold_divisor`.
///
/// # Panics
/// Panics if `flags` requests [`Flags::PACK_EDGES`]: in-place edge rewriting
/// requires a mutable-graph capability this engine does not expose (§4.C5).
pub fn edge_map_data<W, A, R>(
    graph: &GraphView<W>,
    active: &mut VertexSubset<A>,
    relax: &R,
    config: &EngineConfig,
    threshold: Option<usize>,
    flags: Flags,
) -> VertexSubset<R::Payload>
where
    W: Weight,
    A: Copy + Send + Sync + Default,
    R: Relaxation<W>,
{
    assert!(
        !flags.contains(Flags::PACK_EDGES),
        "pack_edges requires a mutable-graph capability this engine does not expose; \
         in-place edge rewriting is outside the frontier-traversal core"
    );

    let n = graph.n();
    if active.is_empty() {
        return VertexSubset::empty(n);
    }

    let out_work = active.out_work(graph);
    if out_work == 0 {
        return VertexSubset::empty(n);
    }

    let collect_output = !flags.contains(Flags::NO_OUTPUT);
    let selected = mode::select_mode(graph, active, flags, config, threshold);

    #[cfg(feature = "tracing")]
    tracing::debug!(
        mode = ?selected,
        active_size = active.size(),
        out_work,
        "edge_map mode selected"
    );

    match selected {
        mode::Mode::Sparse => sparse::run(graph, active, relax, flags, config, collect_output),
        mode::Mode::DensePull => {
            dense::run_pull(graph, active, relax, flags, config, collect_output)
        }
        mode::Mode::DenseForward => {
            dense::run_forward(graph, active, relax, flags, config, collect_output)
        }
    }
}

/// Sugar for [`edge_map_data`] when the relaxation carries no per-vertex
/// payload: the next active set is returned as a plain membership set.
pub fn edge_map<W, A, R>(
    graph: &GraphView<W>,
    active: &mut VertexSubset<A>,
    relax: &R,
    config: &EngineConfig,
    threshold: Option<usize>,
    flags: Flags,
) -> VertexSubset<()>
where
    W: Weight,
    A: Copy + Send + Sync + Default,
    R: Relaxation<W, Payload = ()>,
{
    edge_map_data(graph, active, relax, config, threshold, flags)
}

/// Applies `f` to every member of `subset`, in parallel. `f` typically
/// mutates caller-owned state (a bucket-target array, a visited bitmap) via
/// captured shared references; `vertex_map` itself produces no output.
pub fn vertex_map<P, F>(subset: &VertexSubset<P>, f: F)
where
    P: Copy + Send + Sync + Default,
    F: Fn(Vid, P) + Sync,
{
    let members = subset.members();
    parallel_for(0, members.len(), 1, |i| {
        let (v, p) = members[i];
        f(v, p);
    });
}
