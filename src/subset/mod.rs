//! The vertex-subset abstraction (C3): a set of vids with a dual sparse/dense
//! representation and an optional per-vertex payload, exposing the same
//! logical set regardless of representation.
//!
//! Grounded in the donor codebase's `VisitedSet`/`GhostAtomicBitset` for the
//! dense bitmap representation, generalized here to also carry a sparse
//! array representation and a payload, as the active-set abstraction the
//! spec names requires both.

use std::sync::atomic::{AtomicUsize, Ordering};

use crate::graph::{GraphView, Vid, Weight};
use crate::primitives::{pack_index, reduce_sum};

mod repr;

pub use repr::Representation;

/// A set of vertex ids drawn from `[0, n)`, with optional per-vertex payload
/// `P`. Exposes a sparse or dense representation; both always describe the
/// same logical membership.
pub struct VertexSubset<P: Copy + Send + Sync + Default = ()> {
    n: usize,
    repr: Representation<P>,
    out_work: AtomicUsize,
    out_work_known: std::sync::atomic::AtomicBool,
}

/// Sentinel stored in `out_work` before it has been computed.
const OUT_WORK_UNSET: usize = usize::MAX;

impl<P: Copy + Send + Sync + Default> VertexSubset<P> {
    /// The empty subset over `n` vertices.
    pub fn empty(n: usize) -> Self {
        Self::from_repr(n, Representation::Sparse {
            vids: Vec::new(),
            payload: Vec::new(),
        })
    }

    /// A subset containing exactly `v`, with payload `payload`.
    pub fn make_singleton(n: usize, v: Vid, payload: P) -> Self {
        assert!((v as usize) < n, "singleton vertex {v} out of bounds for n={n}");
        Self::from_repr(n, Representation::Sparse {
            vids: vec![v],
            payload: vec![payload],
        })
    }

    /// A sparse subset over the given (deduplicated) vids, with a parallel
    /// payload array. Stored internally in ascending vid order regardless of
    /// input order.
    ///
    /// # Panics
    /// Panics if `vids` contains a duplicate or out-of-range entry, or if
    /// `payload.len() != vids.len()`.
    pub fn make_sparse(n: usize, vids: Vec<Vid>, payload: Vec<P>) -> Self {
        assert_eq!(vids.len(), payload.len(), "vids/payload length mismatch");
        let mut seen = vec![false; n];
        for &v in &vids {
            let v = v as usize;
            assert!(v < n, "vid {v} out of bounds for n={n}");
            assert!(!seen[v], "duplicate vid {v} in make_sparse");
            seen[v] = true;
        }
        let mut pairs: Vec<(Vid, P)> = vids.into_iter().zip(payload).collect();
        pairs.sort_by_key(|&(v, _)| v);
        let (vids, payload) = pairs.into_iter().unzip();
        Self::from_repr(n, Representation::Sparse { vids, payload })
    }

    /// A dense subset from a length-`n` presence bitmap and payload array.
    /// `payload` entries are only meaningful where `present[i]` is `true`.
    pub fn make_dense(n: usize, present: Vec<bool>, payload: Vec<P>) -> Self {
        assert_eq!(present.len(), n, "present bitmap must have length n");
        assert_eq!(payload.len(), n, "payload array must have length n");
        Self::from_repr(n, Representation::Dense { present, payload })
    }

    fn from_repr(n: usize, repr: Representation<P>) -> Self {
        Self {
            n,
            repr,
            out_work: AtomicUsize::new(OUT_WORK_UNSET),
            out_work_known: std::sync::atomic::AtomicBool::new(false),
        }
    }

    /// The graph order this subset is drawn from.
    #[inline]
    pub fn universe_size(&self) -> usize {
        self.n
    }

    /// Number of members.
    pub fn size(&self) -> usize {
        match &self.repr {
            Representation::Sparse { vids, .. } => vids.len(),
            Representation::Dense { present, .. } => present.iter().filter(|&&b| b).count(),
        }
    }

    /// Whether the subset has no members.
    pub fn is_empty(&self) -> bool {
        self.size() == 0
    }

    /// Whether the subset is currently stored densely.
    #[inline]
    pub fn is_dense(&self) -> bool {
        matches!(self.repr, Representation::Dense { .. })
    }

    /// Members in sparse form, as `(vid, payload)` pairs, in ascending vid
    /// order (both representations naturally enumerate in ascending order).
    pub fn members(&self) -> Vec<(Vid, P)> {
        match &self.repr {
            Representation::Sparse { vids, payload } => {
                vids.iter().copied().zip(payload.iter().copied()).collect()
            }
            Representation::Dense { present, payload } => present
                .iter()
                .enumerate()
                .filter_map(|(i, &p)| p.then(|| (i as Vid, payload[i])))
                .collect(),
        }
    }

    /// Converts to the sparse representation in place. Idempotent.
    pub fn to_sparse(&mut self) {
        if let Representation::Dense { present, payload } = &self.repr {
            let flags: Vec<bool> = present.clone();
            let idx = pack_index(&flags, 1024);
            let vids: Vec<Vid> = idx.iter().map(|&i| i as Vid).collect();
            let new_payload: Vec<P> = idx.iter().map(|&i| payload[i]).collect();
            self.repr = Representation::Sparse {
                vids,
                payload: new_payload,
            };
        }
    }

    /// Converts to the dense representation in place. Idempotent.
    pub fn to_dense(&mut self) {
        if self.is_dense() {
            return;
        }
        if let Representation::Sparse { vids, payload } = &self.repr {
            let mut present = vec![false; self.n];
            let mut dense_payload: Vec<P> = vec![P::default(); self.n];
            for (&v, &p) in vids.iter().zip(payload.iter()) {
                present[v as usize] = true;
                dense_payload[v as usize] = p;
            }
            self.repr = Representation::Dense {
                present,
                payload: dense_payload,
            };
        }
    }

    /// Sum of out-degrees of the members (the "out-work" the mode-selection
    /// heuristic is based on). Computed via a parallel reduction on first
    /// call and cached thereafter; the cache is consulted with `Relaxed`
    /// loads since it monotonically transitions from unset to one fixed
    /// value.
    pub fn out_work<W: Weight>(&self, graph: &GraphView<W>) -> usize {
        if self.out_work_known.load(Ordering::Acquire) {
            return self.out_work.load(Ordering::Acquire);
        }
        let degrees: Vec<usize> = match &self.repr {
            Representation::Sparse { vids, .. } => {
                vids.iter().map(|&v| graph.out_degree(v)).collect()
            }
            Representation::Dense { present, .. } => (0..self.n)
                .filter(|&i| present[i])
                .map(|i| graph.out_degree(i as Vid))
                .collect(),
        };
        let total = reduce_sum(&degrees);
        self.out_work.store(total, Ordering::Release);
        self.out_work_known.store(true, Ordering::Release);
        total
    }

    /// Whether `v` is a member. `O(1)` when dense, `O(log size())` when
    /// sparse (members are kept in ascending vid order).
    pub fn contains(&self, v: Vid) -> bool {
        match &self.repr {
            Representation::Sparse { vids, .. } => vids.binary_search(&v).is_ok(),
            Representation::Dense { present, .. } => present[v as usize],
        }
    }
}

#[cfg(test)]
mod tests;
