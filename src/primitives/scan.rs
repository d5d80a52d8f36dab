//! Parallel exclusive prefix sum.
//!
//! No off-the-shelf parallel scan ships with `rayon`, so this is a direct
//! two-pass divide-and-conquer implementation: per-chunk local sums, an
//! exclusive scan over the (small) chunk-sum array, then an offset-apply
//! pass. Chunk size is the caller's grain, matching `parallel_for`'s
//! advisory-grain convention.

use super::parallel_for::parallel_for;

/// Computes the exclusive prefix sum of `input` into `output` (same length)
/// and returns the total sum. `output` may alias `input`'s storage length but
/// not its buffer.
pub fn scan_add(input: &[usize], output: &mut [usize], grain: usize) -> usize {
    assert_eq!(input.len(), output.len(), "scan_add: length mismatch");
    let n = input.len();
    if n == 0 {
        return 0;
    }
    let grain = grain.max(1);
    let num_chunks = n.div_ceil(grain);
    if num_chunks <= 1 {
        let mut running = 0usize;
        for i in 0..n {
            output[i] = running;
            running += input[i];
        }
        return running;
    }

    let mut chunk_sums = vec![0usize; num_chunks];
    parallel_for(0, num_chunks, 1, |c| {
        let s = c * grain;
        let e = (s + grain).min(n);
        let sum: usize = input[s..e].iter().sum();
        // SAFETY: each chunk writes a distinct index.
        unsafe {
            let ptr = chunk_sums.as_ptr() as *mut usize;
            *ptr.add(c) = sum;
        }
    });

    let mut chunk_offsets = vec![0usize; num_chunks];
    let mut running = 0usize;
    for c in 0..num_chunks {
        chunk_offsets[c] = running;
        running += chunk_sums[c];
    }
    let total = running;

    parallel_for(0, num_chunks, 1, |c| {
        let s = c * grain;
        let e = (s + grain).min(n);
        let mut local = chunk_offsets[c];
        // SAFETY: chunk `c` owns the disjoint range `s..e` of `output`.
        let out_ptr = output.as_ptr() as *mut usize;
        for i in s..e {
            unsafe {
                *out_ptr.add(i) = local;
            }
            local += input[i];
        }
    });

    total
}
