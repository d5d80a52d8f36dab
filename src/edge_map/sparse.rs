//! Sparse-mode traversal: push from active sources, compact the result with
//! `pack_index` (§4.C5). Grounded in the reference implementation's
//! `edgeMapSparse`, which lays out one output slot per (source, neighbor)
//! pair via a degree-offset prefix sum and then packs the `true` slots down.

use crate::config::EngineConfig;
use crate::edge_map::Flags;
use crate::graph::{GraphView, Vid, Weight};
use crate::primitives::{pack_index, parallel_for, scan_add};
use crate::relax::Relaxation;
use crate::subset::VertexSubset;

pub(crate) fn run<W, A, R>(
    graph: &GraphView<W>,
    active: &VertexSubset<A>,
    relax: &R,
    flags: Flags,
    config: &EngineConfig,
    collect_output: bool,
) -> VertexSubset<R::Payload>
where
    W: Weight,
    A: Copy + Send + Sync + Default,
    R: Relaxation<W>,
{
    let n = graph.n();
    let in_edges = flags.contains(Flags::IN_EDGES);
    let members: Vec<Vid> = active.members().into_iter().map(|(v, _)| v).collect();

    let degrees: Vec<usize> = members.iter().map(|&u| graph.degree(u, in_edges)).collect();
    let mut offsets = vec![0usize; degrees.len()];
    let total_edges = scan_add(&degrees, &mut offsets, config.sparse_block_size);

    if total_edges == 0 {
        return VertexSubset::empty(n);
    }

    let mut hit: Vec<bool> = vec![false; total_edges];
    let mut dest: Vec<Vid> = vec![0; total_edges];
    let mut out_payload: Vec<R::Payload> = vec![R::Payload::default(); total_edges];

    let hit_ptr = hit.as_mut_ptr() as usize;
    let dest_ptr = dest.as_mut_ptr() as usize;
    let payload_ptr = out_payload.as_mut_ptr() as usize;

    let block_size = config.sparse_block_size.max(1);

    parallel_for(0, members.len(), 1, |i| {
        let u = members[i];
        let base = offsets[i];
        let neighbors = graph.neighbors(u, in_edges);

        let mut visit = |slot: usize, v: Vid, w: W| {
            if relax.cond(v) {
                if let Some(payload) = relax.update_atomic(u, v, w) {
                    let idx = base + slot;
                    // SAFETY: `idx` is unique to this (source, neighbor) pair
                    // across all parallel tasks; `hit`/`dest`/`out_payload`
                    // are never aliased at the same index by another task.
                    unsafe {
                        *(hit_ptr as *mut bool).add(idx) = true;
                        *(dest_ptr as *mut Vid).add(idx) = v;
                        *(payload_ptr as *mut R::Payload).add(idx) = payload;
                    }
                }
            }
        };

        if flags.contains(Flags::SPARSE_BLOCKED) {
            let pairs: Vec<(Vid, W)> = neighbors.iter().collect();
            for (chunk_idx, chunk) in pairs.chunks(block_size).enumerate() {
                let chunk_base = chunk_idx * block_size;
                for (j, &(v, w)) in chunk.iter().enumerate() {
                    visit(chunk_base + j, v, w);
                }
            }
        } else {
            let mut slot = 0usize;
            neighbors.decode(|v, w| {
                visit(slot, v, w);
                slot += 1;
            });
        }
    });

    if !collect_output {
        return VertexSubset::empty(n);
    }

    let idx = pack_index(&hit, config.sparse_block_size);
    let vids: Vec<Vid> = idx.iter().map(|&i| dest[i]).collect();
    let payload: Vec<R::Payload> = idx.iter().map(|&i| out_payload[i]).collect();
    VertexSubset::make_sparse(n, vids, payload)
}
