//! The graph view (C2): read-only, thread-safe concurrent access to
//! per-vertex degree and neighbor iteration in both directions.
//!
//! Grounded in the donor codebase's CSR graph (`GhostCsrGraph`): offsets +
//! flat edge array, `O(1)` degree lookup, `O(deg)` neighbor iteration. This
//! version drops the `GhostToken` branding (the spec's concurrency model is
//! plain shared atomics with no linear capability token) and adds the second
//! direction the spec requires: a transposed CSR is built once at
//! construction for asymmetric graphs, while symmetric graphs reuse the
//! single CSR for both directions (no second copy of the edge array).

mod builder;
mod neighbors;

pub use neighbors::{BreakEarly, Neighbors};

/// A vertex identifier: an index in `[0, n)`.
pub type Vid = u32;

/// Sentinel value denoting "no vertex" / "absent". Reserved by convention;
/// valid graphs never assign this as a real vertex id.
pub const VID_ABSENT: Vid = Vid::MAX;

/// A weight type usable on graph edges. `()` is the canonical "no weight"
/// instantiation.
pub trait Weight: Copy + Send + Sync + 'static {}
impl<T: Copy + Send + Sync + 'static> Weight for T {}

/// An immutable, thread-safe view over a graph's adjacency structure.
///
/// Constructed once per run from caller-supplied CSR-style arrays (the one
/// fallible boundary in this crate's public surface, see
/// [`GraphView::from_csr`]) and released when the algorithm using it
/// completes.
pub struct GraphView<W: Weight = ()> {
    n: usize,
    m: usize,
    symmetric: bool,
    out_offsets: Vec<usize>,
    out_targets: Vec<Vid>,
    out_weights: Vec<W>,
    // Only populated for asymmetric graphs; `None` means "use out_* for both
    // directions" (the symmetric case).
    in_offsets: Option<Vec<usize>>,
    in_targets: Option<Vec<Vid>>,
    in_weights: Option<Vec<W>>,
}

impl<W: Weight> GraphView<W> {
    /// Number of vertices.
    #[inline]
    pub fn n(&self) -> usize {
        self.n
    }

    /// Number of directed edges (an undirected/symmetric edge counts once per
    /// direction, matching the donor convention of counting entries in the
    /// out-edge array).
    #[inline]
    pub fn m(&self) -> usize {
        self.m
    }

    /// Whether the edge set is its own transpose.
    #[inline]
    pub fn is_symmetric(&self) -> bool {
        self.symmetric
    }

    /// Out-degree of `u`.
    #[inline]
    pub fn out_degree(&self, u: Vid) -> usize {
        let u = u as usize;
        self.out_offsets[u + 1] - self.out_offsets[u]
    }

    /// In-degree of `u`.
    #[inline]
    pub fn in_degree(&self, u: Vid) -> usize {
        let u = u as usize;
        match &self.in_offsets {
            Some(offs) => offs[u + 1] - offs[u],
            None => self.out_degree(u as Vid),
        }
    }

    /// Out-neighbors of `u`, in construction order.
    #[inline]
    pub fn out_neighbors(&self, u: Vid) -> Neighbors<'_, W> {
        let u = u as usize;
        let s = self.out_offsets[u];
        let e = self.out_offsets[u + 1];
        Neighbors::new(&self.out_targets[s..e], &self.out_weights[s..e])
    }

    /// In-neighbors of `u`, in construction order.
    #[inline]
    pub fn in_neighbors(&self, u: Vid) -> Neighbors<'_, W> {
        let u = u as usize;
        match (&self.in_offsets, &self.in_targets, &self.in_weights) {
            (Some(offs), Some(targets), Some(weights)) => {
                let s = offs[u];
                let e = offs[u + 1];
                Neighbors::new(&targets[s..e], &weights[s..e])
            }
            _ => self.out_neighbors(u as Vid),
        }
    }

    /// Neighbors in the requested direction: in-neighbors when `in_edges` is
    /// `true`, out-neighbors otherwise. Mirrors the `in_edges` flag's effect
    /// throughout the edge-traversal operator.
    #[inline]
    pub fn neighbors(&self, u: Vid, in_edges: bool) -> Neighbors<'_, W> {
        if in_edges {
            self.in_neighbors(u)
        } else {
            self.out_neighbors(u)
        }
    }

    /// Degree in the requested direction.
    #[inline]
    pub fn degree(&self, u: Vid, in_edges: bool) -> usize {
        if in_edges {
            self.in_degree(u)
        } else {
            self.out_degree(u)
        }
    }
}

#[cfg(test)]
mod tests;
