//! The priority-bucket structure (C6): a windowed, materialize-on-demand
//! partition of the active vertex set by priority (bucket id), with the
//! window advancing automatically once its buckets drain.
//!
//! Grounded directly in the reference implementation's `buckets<D>` /
//! Julienne bucketing structure (`original_source/src/bucket.h`): only
//! `open_buckets = total_buckets - 1` buckets are materialized at a time,
//! plus one overflow bucket holding everything with a bucket id outside the
//! current window. Draining the window re-buckets the overflow set by
//! re-evaluating each member's current bucket id against the advanced
//! window (`unpack`).

mod order;
mod update;

pub use order::BucketOrder;

use crate::config::EngineConfig;
use crate::graph::Vid;
use order::{cur_bucket_num, windowed};
use update::apply_updates;

/// Sentinel returned by [`Buckets::next_bucket`] once every element has been
/// drained; mirrors the reference implementation's `null_bkt`
/// (`numeric_limits<bucket_t>::max()`).
pub const BUCKET_ABSENT: usize = usize::MAX;

/// Default window width used by [`make_vertex_buckets`], matching the
/// reference implementation's `make_buckets` default.
pub const DEFAULT_TOTAL_BUCKETS: usize = 128;

/// A windowed priority-bucket partition over `0..n` vertex ids. `D` maps a
/// vertex id to its current absolute bucket id, or `None` if the vertex is
/// no longer a member of any bucket (already finalized, say).
pub struct Buckets<D> {
    n: usize,
    d: D,
    order: BucketOrder,
    open_buckets: usize,
    total_buckets: usize,
    cur_bkt: usize,
    cur_range: usize,
    num_elms: usize,
    bkts: Vec<Vec<Vid>>,
    config: EngineConfig,
}

impl<D> Buckets<D>
where
    D: Fn(Vid) -> Option<usize> + Sync,
{
    /// Builds a bucket structure over `0..n`, windowing `total_buckets - 1`
    /// buckets at a time (the last slot is reserved for overflow). The
    /// initial window is positioned so every vertex's starting bucket id,
    /// as reported by `d`, falls in-window or in overflow.
    pub fn make_buckets(n: usize, d: D, order: BucketOrder, total_buckets: usize, config: EngineConfig) -> Self {
        assert!(
            total_buckets >= 2,
            "total_buckets must allow at least one open bucket plus the overflow slot"
        );
        let open_buckets = total_buckets - 1;

        let cur_range = match order {
            BucketOrder::Increasing => {
                let min_b = (0..n).map(|i| d(i as Vid).unwrap_or(BUCKET_ABSENT)).min().unwrap_or(0);
                if min_b == BUCKET_ABSENT {
                    0
                } else {
                    min_b / open_buckets
                }
            }
            BucketOrder::Decreasing => {
                let max_b = (0..n).map(|i| d(i as Vid).unwrap_or(0)).max().unwrap_or(0);
                (max_b + open_buckets) / open_buckets
            }
        };

        let mut bkts: Vec<Vec<Vid>> = (0..total_buckets).map(|_| Vec::new()).collect();
        let mut num_elms = 0usize;
        apply_updates(
            &mut bkts,
            &mut num_elms,
            total_buckets,
            &config,
            |i| {
                let v = i as Vid;
                windowed(order, open_buckets, cur_range, d(v)).map(|w| (v, w))
            },
            n,
        );

        Buckets {
            n,
            d,
            order,
            open_buckets,
            total_buckets,
            cur_bkt: 0,
            cur_range,
            num_elms,
            bkts,
            config,
        }
    }

    pub fn universe_size(&self) -> usize {
        self.n
    }

    pub fn order(&self) -> BucketOrder {
        self.order
    }

    /// Vertices still queued in some bucket (materialized or overflow).
    pub fn num_remaining(&self) -> usize {
        self.num_elms
    }

    pub fn is_empty(&self) -> bool {
        self.num_elms == 0
    }

    /// The absolute id of the bucket `next_bucket` would currently return,
    /// without advancing or filtering anything.
    pub fn cur_bucket_num(&self) -> usize {
        cur_bucket_num(self.order, self.open_buckets, self.cur_range, self.cur_bkt)
    }

    /// Computes the windowed bucket target for a vertex moving from `prev`
    /// to `next` (both absolute bucket ids, `None` meaning no bucket /
    /// inactive), for use as the `bucket` half of a pair handed to
    /// [`Buckets::update_buckets`]. Returns `None` when the move need not be
    /// recorded: `next` is out of the current window in a way that matches
    /// where it already sits (no-op), or `next` is itself absent.
    pub fn get_bucket(&self, prev: Option<usize>, next: Option<usize>) -> Option<usize> {
        let pb = windowed(self.order, self.open_buckets, self.cur_range, prev);
        let nb = windowed(self.order, self.open_buckets, self.cur_range, next)?;
        if prev.is_none() || pb != Some(nb) || nb == self.cur_bkt {
            Some(nb)
        } else {
            None
        }
    }

    /// Inserts `k` candidate `(vid, windowed_bucket)` pairs, as produced by
    /// [`Buckets::get_bucket`], in parallel. Returns the number actually
    /// inserted (entries for which `f` returned `None` are skipped).
    pub fn update_buckets(&mut self, f: impl Fn(usize) -> Option<(Vid, usize)> + Sync, k: usize) -> usize {
        apply_updates(&mut self.bkts, &mut self.num_elms, self.total_buckets, &self.config, f, k)
    }

    /// Returns the next non-empty bucket as `(absolute_bucket_id, members)`,
    /// advancing the window (via overflow unpacking) as needed. Returns
    /// `(BUCKET_ABSENT, [])` once every element has been drained.
    pub fn next_bucket(&mut self) -> (usize, Vec<Vid>) {
        while self.bkts[self.cur_bkt].is_empty() && self.num_elms > 0 {
            self.advance_window();
        }
        if self.num_elms == 0 {
            return (BUCKET_ABSENT, Vec::new());
        }
        self.take_cur_bucket()
    }

    fn advance_window(&mut self) {
        self.cur_bkt += 1;
        if self.cur_bkt == self.open_buckets {
            self.unpack();
            self.cur_bkt = 0;
        }
    }

    /// Pops the current materialized bucket, filtering out entries whose
    /// true bucket (per `d`) no longer matches — a vertex may have been
    /// re-bucketed since it was queued here. Recurses into `next_bucket` if
    /// filtering leaves nothing.
    fn take_cur_bucket(&mut self) -> (usize, Vec<Vid>) {
        let bkt_num = self.cur_bucket_num();
        let raw = std::mem::take(&mut self.bkts[self.cur_bkt]);
        self.num_elms -= raw.len();
        let d = &self.d;
        let filtered: Vec<Vid> = raw.into_iter().filter(|&v| d(v) == Some(bkt_num)).collect();
        if filtered.is_empty() {
            return self.next_bucket();
        }
        (bkt_num, filtered)
    }

    /// Advances the window by one step and re-buckets the overflow set
    /// against the new window.
    fn unpack(&mut self) {
        let open_buckets = self.open_buckets;
        let overflow_idx = open_buckets;
        let snapshot = std::mem::take(&mut self.bkts[overflow_idx]);
        let m = snapshot.len();
        self.num_elms -= m;
        self.cur_range = match self.order {
            BucketOrder::Increasing => self.cur_range + 1,
            BucketOrder::Decreasing => {
                assert!(self.cur_range > 0, "decreasing bucket window cannot advance past zero");
                self.cur_range - 1
            }
        };
        let order = self.order;
        let cur_range = self.cur_range;

        let inserted = apply_updates(
            &mut self.bkts,
            &mut self.num_elms,
            self.total_buckets,
            &self.config,
            |i| {
                let v = snapshot[i];
                windowed(order, open_buckets, cur_range, (self.d)(v)).map(|w| (v, w))
            },
            m,
        );
        assert_eq!(
            inserted, m,
            "bucket corruption: every overflow entry must re-bucket to some window slot"
        );
    }

    /// Consumes the structure, releasing its storage. Provided for parity
    /// with the reference implementation's explicit `del`; ordinary `Drop`
    /// already reclaims everything this does.
    pub fn release(self) {}
}

/// Convenience constructor using [`DEFAULT_TOTAL_BUCKETS`], mirroring the
/// reference implementation's `make_vertex_buckets`.
pub fn make_vertex_buckets<D>(n: usize, d: D, order: BucketOrder, config: EngineConfig) -> Buckets<D>
where
    D: Fn(Vid) -> Option<usize> + Sync,
{
    Buckets::make_buckets(n, d, order, DEFAULT_TOTAL_BUCKETS, config)
}
