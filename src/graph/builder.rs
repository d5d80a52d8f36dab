//! Fallible construction from caller-supplied CSR arrays.
//!
//! This is the one fallible boundary in the crate's public surface (§6/§7 of
//! the spec): arrays originate from an external loader, not from the
//! engine's own invariants, so malformed input is reported as an
//! `anyhow::Error` rather than a panic.

use anyhow::{ensure, Result};

use super::{GraphView, Vid, Weight};

impl<W: Weight> GraphView<W> {
    /// Builds a graph view from CSR-style arrays.
    ///
    /// - `offsets`: length `n + 1`, monotone, `offsets[n] == edges.len()`.
    /// - `edges`: length `m`, every entry `< n`.
    /// - `weights`: `None` for an unweighted graph, else length `m`.
    /// - `symmetric`: when `true`, `edges`/`weights` are assumed to already
    ///   encode a symmetric edge set and are reused for both directions with
    ///   no second copy; when `false`, a transposed CSR is built once here.
    pub fn from_csr(
        offsets: Vec<usize>,
        edges: Vec<Vid>,
        weights: Option<Vec<W>>,
        symmetric: bool,
    ) -> Result<Self>
    where
        W: Default,
    {
        ensure!(!offsets.is_empty(), "offsets must have length n+1 (n>=0)");
        let n = offsets.len() - 1;
        for w in offsets.windows(2) {
            ensure!(w[0] <= w[1], "offsets must be monotone non-decreasing");
        }
        let m = *offsets.last().expect("offsets non-empty, checked above");
        ensure!(
            m == edges.len(),
            "offsets.last() ({m}) must equal edges.len() ({})",
            edges.len()
        );
        for &v in &edges {
            ensure!((v as usize) < n, "edge target {v} out of bounds for n={n}");
        }
        let weights = match weights {
            Some(w) => {
                ensure!(
                    w.len() == edges.len(),
                    "weights.len() ({}) must equal edges.len() ({})",
                    w.len(),
                    edges.len()
                );
                w
            }
            None => vec![W::default(); edges.len()],
        };

        let (in_offsets, in_targets, in_weights) = if symmetric {
            (None, None, None)
        } else {
            let (t_off, t_targets, t_weights) = transpose(n, &offsets, &edges, &weights);
            (Some(t_off), Some(t_targets), Some(t_weights))
        };

        Ok(GraphView {
            n,
            m,
            symmetric,
            out_offsets: offsets,
            out_targets: edges,
            out_weights: weights,
            in_offsets,
            in_targets,
            in_weights,
        })
    }

    /// Builds a graph view directly from pre-validated CSR parts, for
    /// in-crate tests and benchmarks that already know the input is
    /// well-formed.
    ///
    /// # Panics
    /// Panics instead of returning `Err` on malformed input — callers outside
    /// this crate should prefer [`GraphView::from_csr`].
    #[doc(hidden)]
    pub fn from_csr_unchecked(
        offsets: Vec<usize>,
        edges: Vec<Vid>,
        weights: Option<Vec<W>>,
        symmetric: bool,
    ) -> Self
    where
        W: Default,
    {
        match Self::from_csr(offsets, edges, weights, symmetric) {
            Ok(g) => g,
            Err(e) => panic!("from_csr_unchecked: {e}"),
        }
    }
}

fn transpose<W: Weight>(
    n: usize,
    offsets: &[usize],
    edges: &[Vid],
    weights: &[W],
) -> (Vec<usize>, Vec<Vid>, Vec<W>)
where
    W: Default,
{
    let m = edges.len();
    let mut in_degree = vec![0usize; n];
    for &v in edges {
        in_degree[v as usize] += 1;
    }
    let mut t_offsets = vec![0usize; n + 1];
    for v in 0..n {
        t_offsets[v + 1] = t_offsets[v] + in_degree[v];
    }
    let mut t_targets = vec![0 as Vid; m];
    let mut t_weights = vec![W::default(); m];
    let mut cursor = t_offsets.clone();
    for u in 0..n {
        let s = offsets[u];
        let e = offsets[u + 1];
        for i in s..e {
            let v = edges[i] as usize;
            let pos = cursor[v];
            t_targets[pos] = u as Vid;
            t_weights[pos] = weights[i];
            cursor[v] += 1;
        }
    }
    (t_offsets, t_targets, t_weights)
}
