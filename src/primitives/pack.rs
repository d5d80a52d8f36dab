//! `filter` and `pack_index`: compacting a sequence down to the elements a
//! predicate accepts, without duplicating the sequential-scan-then-copy
//! pattern at every call site that needs it (sparse `edge_map`'s output
//! buffer, in particular).

use super::scan::scan_add;

/// Returns the indices `i` in `0..flags.len()` for which `flags[i]` is `true`,
/// in ascending order.
pub fn pack_index(flags: &[bool], grain: usize) -> Vec<usize> {
    let as_usize: Vec<usize> = flags.iter().map(|&b| usize::from(b)).collect();
    let mut offsets = vec![0usize; as_usize.len()];
    let total = scan_add(&as_usize, &mut offsets, grain);

    let mut out = vec![0usize; total];
    for (i, &f) in flags.iter().enumerate() {
        if f {
            out[offsets[i]] = i;
        }
    }
    out
}

/// Returns the elements of `items` for which `pred` holds, preserving order.
pub fn filter<T, F>(items: &[T], pred: F) -> Vec<T>
where
    T: Clone,
    F: Fn(&T) -> bool,
{
    let flags: Vec<bool> = items.iter().map(&pred).collect();
    let idx = pack_index(&flags, 1024);
    idx.into_iter().map(|i| items[i].clone()).collect()
}
