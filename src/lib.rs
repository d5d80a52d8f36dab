//! A frontier-parallel traversal kernel for irregular data-parallel graph
//! computation on shared-memory multicore machines.
//!
//! Generalizes the reference GBBS/Julienne graph-processing framework's
//! bulk-synchronous engine into a standalone crate: a read-only [`GraphView`]
//! over a CSR adjacency structure, a dual sparse/dense [`subset::VertexSubset`]
//! representation, a caller-supplied [`relax::Relaxation`] contract, the
//! work-optimal edge-traversal operator in [`edge_map`], and the windowed
//! priority-bucket structure in [`buckets`].
//!
//! Every public entry point is internally parallel (backed by `rayon`'s
//! work-stealing scheduler) but externally sequential: a call is a barrier,
//! and the caller drives the bulk-synchronous superstep loop by calling
//! [`edge_map::edge_map`]/[`edge_map::edge_map_data`] and
//! [`buckets::Buckets::next_bucket`] in whatever order their algorithm needs.
//!
//! # Example: breadth-first search
//!
//! ```
//! use core::sync::atomic::{AtomicU32, Ordering};
//! use frontier_engine::edge_map::{edge_map, Flags};
//! use frontier_engine::graph::{GraphView, Vid};
//! use frontier_engine::relax::SymmetricRelaxation;
//! use frontier_engine::subset::VertexSubset;
//! use frontier_engine::config::EngineConfig;
//!
//! struct ParentCas<'a> {
//!     parent: &'a [AtomicU32],
//! }
//!
//! impl<'a> SymmetricRelaxation<()> for ParentCas<'a> {
//!     type Payload = ();
//!
//!     fn cond(&self, d: Vid) -> bool {
//!         self.parent[d as usize].load(Ordering::Acquire) == Vid::MAX
//!     }
//!
//!     fn relax(&self, s: Vid, d: Vid, _w: ()) -> Option<()> {
//!         self.parent[d as usize]
//!             .compare_exchange(Vid::MAX, s, Ordering::AcqRel, Ordering::Acquire)
//!             .ok()
//!             .map(|_| ())
//!     }
//! }
//!
//! // A 4-vertex path: 0 - 1 - 2 - 3.
//! let g = GraphView::<()>::from_csr(
//!     vec![0, 1, 3, 5, 6],
//!     vec![1, 0, 2, 1, 3, 2],
//!     None,
//!     true,
//! ).unwrap();
//!
//! let parent: Vec<AtomicU32> = (0..4).map(|_| AtomicU32::new(Vid::MAX)).collect();
//! parent[0].store(0, Ordering::Release);
//! let relax = ParentCas { parent: &parent };
//! let cfg = EngineConfig::default();
//!
//! let mut frontier: VertexSubset = VertexSubset::make_singleton(4, 0, ());
//! while !frontier.is_empty() {
//!     frontier = edge_map(&g, &mut frontier, &relax, &cfg, None, Flags::NONE);
//! }
//! assert_eq!(parent[3].load(Ordering::Acquire), 2);
//! ```

pub mod buckets;
pub mod config;
pub mod edge_map;
pub mod graph;
pub mod primitives;
pub mod relax;
pub mod subset;

pub use buckets::{BucketOrder, Buckets, BUCKET_ABSENT};
pub use config::EngineConfig;
pub use edge_map::{edge_map, edge_map_data, ngh_count, ngh_count_apply, vertex_map, Flags};
pub use graph::{GraphView, Vid, Weight, VID_ABSENT};
pub use relax::{CountReducingRelaxation, Relaxation, SymmetricRelaxation};
pub use subset::VertexSubset;
