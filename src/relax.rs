//! The relaxation contract (C4): the capability object every algorithm
//! supplies to [`crate::edge_map::edge_map`].
//!
//! Grounded in the donor codebase's capability-object pattern (a trait
//! standing in for what the donor's `GhostToken`-branded closures achieve by
//! monomorphization); generalized to the three-operation contract the spec
//! names. `Option<Payload>` replaces a `bool` plus side-channel array: `Some`
//! means the destination newly qualifies and carries its next-subset
//! payload, `None` means it does not.

use crate::graph::{Vid, Weight};

/// The capability object an algorithm supplies to drive one superstep.
///
/// `W` is the edge weight type of the graph being traversed; `Payload` is
/// the per-vertex data carried into the next active set (`()` when no
/// payload is needed).
pub trait Relaxation<W: Weight>: Sync {
    /// Per-vertex payload carried into the next subset on a successful
    /// update.
    type Payload: Copy + Send + Sync + Default;

    /// Whether destination `d` is still eligible to be updated this step.
    fn cond(&self, d: Vid) -> bool;

    /// Non-atomic update: assumes single-writer to `d` (dense-pull mode
    /// with `dense_parallel` unset). Returns the payload iff `d` newly
    /// qualifies for the next subset.
    fn update(&self, s: Vid, d: Vid, w: W) -> Option<Self::Payload>;

    /// Atomic-safe update: may be called concurrently on the same `d` (all
    /// of sparse mode, dense-forward, and dense-pull with `dense_parallel`
    /// set). Must guarantee at most one caller observes `Some` per `d` per
    /// step regardless of how many sources race to update it.
    fn update_atomic(&self, s: Vid, d: Vid, w: W) -> Option<Self::Payload>;
}

/// Sugar for a relaxation where the non-atomic and atomic updates are
/// identical (§4.C4's "symmetric" discipline): the engine still chooses
/// which one to call based on traversal mode, but the implementer only
/// writes the body once.
pub trait SymmetricRelaxation<W: Weight>: Sync {
    type Payload: Copy + Send + Sync + Default;

    fn cond(&self, d: Vid) -> bool;

    /// Shared body for both `update` and `update_atomic`. Must be safe to
    /// call concurrently on the same `d` (the engine relies on this for the
    /// atomic call sites); implementers typically build this from the
    /// atomic primitives in [`crate::primitives`].
    fn relax(&self, s: Vid, d: Vid, w: W) -> Option<Self::Payload>;
}

impl<W: Weight, R: SymmetricRelaxation<W>> Relaxation<W> for R {
    type Payload = R::Payload;

    #[inline]
    fn cond(&self, d: Vid) -> bool {
        SymmetricRelaxation::cond(self, d)
    }

    #[inline]
    fn update(&self, s: Vid, d: Vid, w: W) -> Option<Self::Payload> {
        self.relax(s, d, w)
    }

    #[inline]
    fn update_atomic(&self, s: Vid, d: Vid, w: W) -> Option<Self::Payload> {
        self.relax(s, d, w)
    }
}

/// Sugar for the count-reducing discipline (§4.C4, used by `ngh_count`):
/// rather than producing a next-subset payload directly, each successful
/// edge relaxation contributes a unit (or weighted) delta toward a
/// per-destination count, which `ngh_count`'s `apply` function later turns
/// into a next-subset entry.
pub trait CountReducingRelaxation<W: Weight>: Sync {
    /// Whether destination `d` is still eligible to be counted this step.
    fn cond(&self, d: Vid) -> bool;

    /// The contribution a successful `(s, d, w)` edge makes to `d`'s count,
    /// or `None` if this edge does not count (e.g. `s` already accounted
    /// for via another constraint).
    fn count_edge(&self, s: Vid, d: Vid, w: W) -> Option<usize>;
}
