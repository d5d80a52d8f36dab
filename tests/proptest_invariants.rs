//! Property tests for the §8 invariants: dense/sparse mode selection must
//! never change the *result* of a superstep (only its strategy), and the
//! atomic relaxation path must never let two sources both win the same
//! destination in one step.

use core::sync::atomic::{AtomicU32, Ordering};

use frontier_engine::config::EngineConfig;
use frontier_engine::edge_map::{edge_map, Flags};
use frontier_engine::graph::{GraphView, Vid};
use frontier_engine::relax::SymmetricRelaxation;
use frontier_engine::subset::VertexSubset;
use proptest::prelude::*;

struct ParentCas<'a> {
    parent: &'a [AtomicU32],
}

impl<'a> SymmetricRelaxation<()> for ParentCas<'a> {
    type Payload = Vid;

    fn cond(&self, d: Vid) -> bool {
        self.parent[d as usize].load(Ordering::Acquire) == Vid::MAX
    }

    fn relax(&self, s: Vid, d: Vid, _w: ()) -> Option<Vid> {
        self.parent[d as usize]
            .compare_exchange(Vid::MAX, s, Ordering::AcqRel, Ordering::Acquire)
            .ok()
            .map(|_| s)
    }
}

/// Builds a symmetric graph over `n` vertices from an arbitrary set of
/// undirected edges, deduplicating and discarding self-loops.
fn symmetric_graph(n: usize, raw_edges: &[(usize, usize)]) -> GraphView<()> {
    let mut adj: Vec<Vec<Vid>> = vec![Vec::new(); n];
    for &(a, b) in raw_edges {
        let (a, b) = (a % n, b % n);
        if a == b {
            continue;
        }
        if !adj[a].contains(&(b as Vid)) {
            adj[a].push(b as Vid);
        }
        if !adj[b].contains(&(a as Vid)) {
            adj[b].push(a as Vid);
        }
    }
    let mut offsets = vec![0usize; n + 1];
    let mut edges = Vec::new();
    for v in 0..n {
        adj[v].sort();
        offsets[v + 1] = offsets[v] + adj[v].len();
        edges.extend_from_slice(&adj[v]);
    }
    GraphView::from_csr_unchecked(offsets, edges, None, true)
}

fn edge_strategy(n: usize) -> impl Strategy<Value = Vec<(usize, usize)>> {
    prop::collection::vec((0..n, 0..n), 0..(n * 2))
}

proptest! {
    /// Running one superstep with dense mode available versus forced off
    /// must reach the same set of newly-activated vertices: mode selection
    /// is a performance strategy, not part of the traversal's semantics.
    #[test]
    fn mode_switch_does_not_change_the_activated_set(
        n in 2usize..24,
        root in 0usize..24,
        raw_edges in edge_strategy(24),
    ) {
        let root = root % n;
        let g = symmetric_graph(n, &raw_edges);

        let parent_a: Vec<AtomicU32> = (0..n).map(|_| AtomicU32::new(Vid::MAX)).collect();
        parent_a[root].store(root as u32, Ordering::Release);
        let relax_a = ParentCas { parent: &parent_a };
        let mut frontier_a: VertexSubset = VertexSubset::make_singleton(n, root as Vid, ());
        let cfg = EngineConfig::default();
        let with_dense = edge_map(&g, &mut frontier_a, &relax_a, &cfg, None, Flags::NONE);

        let parent_b: Vec<AtomicU32> = (0..n).map(|_| AtomicU32::new(Vid::MAX)).collect();
        parent_b[root].store(root as u32, Ordering::Release);
        let relax_b = ParentCas { parent: &parent_b };
        let mut frontier_b: VertexSubset = VertexSubset::make_singleton(n, root as Vid, ());
        let without_dense = edge_map(&g, &mut frontier_b, &relax_b, &cfg, None, Flags::NO_DENSE);

        let mut a: Vec<_> = with_dense.members().into_iter().map(|(v, _)| v).collect();
        let mut b: Vec<_> = without_dense.members().into_iter().map(|(v, _)| v).collect();
        a.sort();
        b.sort();
        prop_assert_eq!(a, b);
    }

    /// Every destination in the next frontier is claimed by exactly one
    /// parent, even when many active sources race for the same destination
    /// (a dense star is the worst case for contention on a single slot).
    #[test]
    fn at_most_once_emission_under_contention(
        n in 3usize..24,
        raw_edges in edge_strategy(24),
    ) {
        let g = symmetric_graph(n, &raw_edges);
        let parent: Vec<AtomicU32> = (0..n).map(|_| AtomicU32::new(Vid::MAX)).collect();
        // Activate every vertex at once so any shared destination is raced
        // on by all of its active neighbors simultaneously.
        let active_payload: Vec<()> = (0..n).map(|_| ()).collect();
        let mut frontier: VertexSubset = VertexSubset::make_sparse(
            n,
            (0..n as Vid).collect(),
            active_payload,
        );
        parent[0].store(0, Ordering::Release);
        let relax = ParentCas { parent: &parent };
        let cfg = EngineConfig::default();
        let next = edge_map(&g, &mut frontier, &relax, &cfg, None, Flags::NONE);

        let members = next.members();
        let mut seen = vec![false; n];
        for &(v, _) in &members {
            prop_assert!(!seen[v as usize], "destination {v} activated twice in one step");
            seen[v as usize] = true;
        }
        for &(v, winner) in &members {
            prop_assert_eq!(parent[v as usize].load(Ordering::Acquire), winner);
        }
    }
}
