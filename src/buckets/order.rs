//! The windowing arithmetic shared by construction, `get_bucket`, and
//! overflow unpacking. Kept free of `Buckets` so it can be called while
//! other fields of the struct are mutably borrowed elsewhere.

/// Iteration order over bucket ids.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BucketOrder {
    Increasing,
    Decreasing,
}

/// Maps an absolute bucket id to its position within the currently open
/// window: `Some(i)` for `i` in `[0, open_buckets)`, `Some(open_buckets)` for
/// the overflow slot, or `None` if `bkt` is `None` (absent) or — in the
/// increasing case — lies behind the window already (should not occur in
/// forward-progressing use but mirrors the reference implementation's
/// defensive check).
pub(crate) fn windowed(
    order: BucketOrder,
    open_buckets: usize,
    cur_range: usize,
    bkt: Option<usize>,
) -> Option<usize> {
    let bkt = bkt?;
    match order {
        BucketOrder::Increasing => {
            if bkt < cur_range * open_buckets {
                None
            } else if bkt < (cur_range + 1) * open_buckets {
                Some(bkt % open_buckets)
            } else {
                Some(open_buckets)
            }
        }
        BucketOrder::Decreasing => {
            if bkt >= cur_range * open_buckets {
                None
            } else if cur_range > 0 && bkt >= (cur_range - 1) * open_buckets {
                Some(open_buckets - (bkt % open_buckets) - 1)
            } else {
                Some(open_buckets)
            }
        }
    }
}

/// The absolute bucket id currently addressed by `cur_range`/`cur_bkt`.
pub(crate) fn cur_bucket_num(order: BucketOrder, open_buckets: usize, cur_range: usize, cur_bkt: usize) -> usize {
    match order {
        BucketOrder::Increasing => cur_range * open_buckets + cur_bkt,
        BucketOrder::Decreasing => cur_range * open_buckets - cur_bkt - 1,
    }
}
