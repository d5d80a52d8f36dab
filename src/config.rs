//! Engine-wide tunables.
//!
//! Collects the magic constants the frontier-traversal kernel depends on into a
//! single value instead of scattering them across call sites. Defaults mirror
//! the constants historically hard-coded in the graph-processing systems this
//! engine generalizes (dense-mode threshold of `m/20`, dense grain of 1 or
//! 2048 depending on `fine_parallel`, histogram blocks of ~2000 updates).

/// Tunable thresholds and grain sizes for the traversal and bucketing kernels.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EngineConfig {
    /// `edge_map`'s default dense-mode threshold is `graph.m() / dense_threshold_divisor`.
    pub dense_threshold_divisor: usize,
    /// Contiguous block size used when `sparse_blocked` is set.
    pub sparse_block_size: usize,
    /// Grain used for the dense-mode `parallel_for` when `fine_parallel` is set.
    pub dense_fine_grain: usize,
    /// Grain used for the dense-mode `parallel_for` otherwise.
    pub dense_coarse_grain: usize,
    /// Target number of updates per block in `Buckets::update_buckets`'s parallel path.
    pub histogram_block_target: usize,
    /// `update_buckets` falls back to a sequential pass below this many updates.
    pub histogram_sequential_threshold: usize,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            dense_threshold_divisor: 20,
            sparse_block_size: 1024,
            dense_fine_grain: 1,
            dense_coarse_grain: 2048,
            histogram_block_target: 2000,
            histogram_sequential_threshold: 2000,
        }
    }
}

impl EngineConfig {
    /// Resolves the dense-mode threshold for a graph with `m` edges, given an
    /// optional caller override.
    #[inline]
    pub fn dense_threshold(&self, m: usize, override_threshold: Option<usize>) -> usize {
        override_threshold.unwrap_or(m / self.dense_threshold_divisor)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_spec_constants() {
        let cfg = EngineConfig::default();
        assert_eq!(cfg.dense_threshold_divisor, 20);
        assert_eq!(cfg.histogram_block_target, 2000);
        assert_eq!(cfg.dense_fine_grain, 1);
        assert_eq!(cfg.dense_coarse_grain, 2048);
    }

    #[test]
    fn dense_threshold_respects_override() {
        let cfg = EngineConfig::default();
        assert_eq!(cfg.dense_threshold(200, None), 10);
        assert_eq!(cfg.dense_threshold(200, Some(5)), 5);
    }
}
