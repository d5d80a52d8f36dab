//! Parallel primitives substrate (C1).
//!
//! Everything else in this crate is built on top of `parallel_for`, `reduce`,
//! `scan_add`, `pack_index`/`filter`, and the atomic update primitives
//! exposed here. Algorithm authors consuming `edge_map`/`Buckets` are
//! expected to reach for these same primitives rather than hand-rolling
//! their own parallel loops.

pub mod atomic;
pub mod pack;
pub mod parallel_for;
pub mod reduce;
pub mod scan;

pub use atomic::{cas_u32, cas_u64, fetch_add_u32, fetch_add_u64, write_max_u32, write_min_u32};
pub use pack::{filter, pack_index};
pub use parallel_for::parallel_for;
pub use reduce::{reduce, reduce_sum};
pub use scan::scan_add;

/// A plain, owned sequence. Named for parity with the primitives vocabulary
/// in the external-interfaces surface; `Vec<T>` already provides everything
/// the spec asks of `sequence<T>`; this alias exists so algorithm code can
/// spell out intent at call sites.
pub type Sequence<T> = Vec<T>;
