//! The flag vocabulary controlling [`super::edge_map`]'s traversal strategy.
//!
//! A narrow bitmask type in the spirit of the reference implementation's own
//! `flags` bitmask (a plain integer with named bit constants), rather than
//! pulling in a flags-derive crate for eight fixed bits.

use std::ops::{BitOr, BitOrAssign};

/// A set of `edge_map` option flags.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Flags(u16);

impl Flags {
    pub const NONE: Flags = Flags(0);
    /// Traverse in-neighbors instead of out-neighbors.
    pub const IN_EDGES: Flags = Flags(1 << 0);
    /// In dense mode, push from sources rather than pull into destinations.
    pub const DENSE_FORWARD: Flags = Flags(1 << 1);
    /// Parallelize the inner neighbor loop within dense-pull mode.
    pub const DENSE_PARALLEL: Flags = Flags(1 << 2);
    /// Use a grain of 1 (per-vertex tasking) even in dense mode.
    pub const FINE_PARALLEL: Flags = Flags(1 << 3);
    /// Forbid dense mode regardless of the mode-selection heuristic.
    pub const NO_DENSE: Flags = Flags(1 << 4);
    /// In sparse mode, process neighbors of each source in fixed-size blocks.
    pub const SPARSE_BLOCKED: Flags = Flags(1 << 5);
    /// Request the in-place edge-filter variant (unsupported, see
    /// [`super::edge_map`]'s docs).
    pub const PACK_EDGES: Flags = Flags(1 << 6);
    /// Discard the next subset; run the relaxation purely for side effects.
    pub const NO_OUTPUT: Flags = Flags(1 << 7);

    /// Whether every bit set in `other` is also set in `self`.
    #[inline]
    pub fn contains(self, other: Flags) -> bool {
        self.0 & other.0 == other.0
    }
}

impl BitOr for Flags {
    type Output = Flags;

    #[inline]
    fn bitor(self, rhs: Flags) -> Flags {
        Flags(self.0 | rhs.0)
    }
}

impl BitOrAssign for Flags {
    #[inline]
    fn bitor_assign(&mut self, rhs: Flags) {
        self.0 |= rhs.0;
    }
}
