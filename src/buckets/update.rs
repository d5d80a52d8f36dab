//! Parallel and sequential insertion into an array of per-bucket vectors.
//!
//! Grounded in the reference implementation's `buckets::update_buckets`: a
//! two-pass histogram (per-block bucket counts, then a prefix sum over the
//! block×bucket matrix) followed by a scatter write, so concurrent blocks
//! never contend on the same output index. Lives outside `Buckets` so the
//! constructor and overflow-unpack can call it while `self.d` is borrowed
//! immutably and `self.bkts`/`self.num_elms` mutably — a method taking
//! `&mut self` couldn't express that split.

use crate::config::EngineConfig;
use crate::graph::{Vid, VID_ABSENT};
use crate::primitives::{parallel_for, scan_add};

/// Inserts every `(vid, bucket)` pair yielded by `f(i)` for `i` in `[0, k)`
/// into `bkts[bucket]`, where `bucket` is already a windowed index in
/// `[0, total_buckets)` (the reference implementation's callers apply the
/// windowing themselves via `to_range`/`get_bucket` before reaching this
/// point). `f(i) == None` skips `i` entirely. Returns the number inserted.
pub(crate) fn apply_updates(
    bkts: &mut [Vec<Vid>],
    num_elms: &mut usize,
    total_buckets: usize,
    config: &EngineConfig,
    f: impl Fn(usize) -> Option<(Vid, usize)> + Sync,
    k: usize,
) -> usize {
    if k == 0 {
        return 0;
    }
    if k < config.histogram_sequential_threshold {
        return apply_updates_seq(bkts, num_elms, f, k);
    }
    apply_updates_parallel(bkts, num_elms, total_buckets, config, f, k)
}

fn apply_updates_seq(
    bkts: &mut [Vec<Vid>],
    num_elms: &mut usize,
    f: impl Fn(usize) -> Option<(Vid, usize)>,
    k: usize,
) -> usize {
    let mut inserted = 0;
    for i in 0..k {
        if let Some((vid, bkt)) = f(i) {
            bkts[bkt].push(vid);
            inserted += 1;
        }
    }
    *num_elms += inserted;
    inserted
}

fn apply_updates_parallel(
    bkts: &mut [Vec<Vid>],
    num_elms: &mut usize,
    total_buckets: usize,
    config: &EngineConfig,
    f: impl Fn(usize) -> Option<(Vid, usize)> + Sync,
    k: usize,
) -> usize {
    let block_target = config.histogram_block_target.max(1);
    let num_blocks = (k / block_target).max(1).next_power_of_two();
    let block_size = k.div_ceil(num_blocks);

    // Pass 1: per-block histogram, row-major by block (`block * total_buckets + bucket`).
    let mut hist = vec![0usize; num_blocks * total_buckets];
    {
        let hist_ptr = hist.as_mut_ptr() as usize;
        parallel_for(0, num_blocks, 1, |block| {
            let s = block * block_size;
            let e = (s + block_size).min(k);
            for j in s..e {
                if let Some((_, bkt)) = f(j) {
                    // SAFETY: block `block` owns the disjoint row
                    // `[block * total_buckets, (block + 1) * total_buckets)`.
                    unsafe {
                        let slot = (hist_ptr as *mut usize).add(block * total_buckets + bkt);
                        *slot += 1;
                    }
                }
            }
        });
    }

    // Transpose into bucket-major order so a bucket's increments occupy a
    // contiguous run: `in_seq[bucket * num_blocks + block]`.
    let mut in_seq = vec![0usize; num_blocks * total_buckets];
    for bucket in 0..total_buckets {
        for block in 0..num_blocks {
            in_seq[bucket * num_blocks + block] = hist[block * total_buckets + bucket];
        }
    }

    let mut offsets = vec![0usize; in_seq.len()];
    let total = scan_add(&in_seq, &mut offsets, config.sparse_block_size);
    let mut outs = offsets;
    outs.push(total);

    // Grow each bucket by its share of `total`, recording the pre-growth
    // length so the scatter pass below knows where new entries start.
    let mut old_lens = vec![0usize; total_buckets];
    for bucket in 0..total_buckets {
        let start = bucket * num_blocks;
        let end = start + num_blocks;
        let num_inc = outs[end] - outs[start];
        old_lens[bucket] = bkts[bucket].len();
        bkts[bucket].resize(old_lens[bucket] + num_inc, VID_ABSENT);
    }
    *num_elms += total;

    // Per-(bucket, block) write cursor: offset of this block's entries
    // within the bucket's newly grown region.
    let mut block_offset = vec![0usize; num_blocks * total_buckets];
    for bucket in 0..total_buckets {
        let base = outs[bucket * num_blocks];
        for block in 0..num_blocks {
            block_offset[bucket * num_blocks + block] = outs[bucket * num_blocks + block] - base;
        }
    }

    // Pass 2: scatter write. Bucket pointers are captured after the resize
    // above so they reflect the final (possibly reallocated) storage.
    let bucket_ptrs: Vec<usize> = bkts.iter_mut().map(|v| v.as_mut_ptr() as usize).collect();
    let block_offset_ptr = block_offset.as_mut_ptr() as usize;
    parallel_for(0, num_blocks, 1, |block| {
        let s = block * block_size;
        let e = (s + block_size).min(k);
        for j in s..e {
            if let Some((vid, bkt)) = f(j) {
                // SAFETY: the (bucket, block) cursor is exclusive to this
                // block, and the prefix sum guarantees the resulting
                // `base + pos` index falls within the region this block
                // alone was allotted for `bkt`.
                unsafe {
                    let cursor = (block_offset_ptr as *mut usize).add(bkt * num_blocks + block);
                    let pos = *cursor;
                    *cursor = pos + 1;
                    let base = old_lens[bkt];
                    let dest = (bucket_ptrs[bkt] as *mut Vid).add(base + pos);
                    *dest = vid;
                }
            }
        }
    });

    total
}
