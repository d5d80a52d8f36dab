//! Atomic update primitives used by relaxations and the bucket structure.
//!
//! Thin wrappers around `core::sync::atomic`, in the same spirit as the
//! donor codebase's per-width atomic wrappers (`GhostAtomicUsize`,
//! `GhostAtomicBool`): a narrow, inlinable surface fixing each primitive to
//! the one `Ordering` its use site needs, rather than exposing the choice at
//! every call site. Every primitive here synchronizes with `AcqRel`
//! (read-modify-write) or `Acquire` (plain load); none of them use
//! `Relaxed` — the contended CAS loops in `write_min_u32`/`write_max_u32`
//! and the bucket/subset caches that read these values need the
//! happens-before edge.

use core::sync::atomic::{AtomicU32, AtomicU64, Ordering};

/// Compare-and-swap on a `u32` word. Returns `true` iff the swap succeeded.
#[inline(always)]
pub fn cas_u32(slot: &AtomicU32, current: u32, new: u32) -> bool {
    slot.compare_exchange(current, new, Ordering::AcqRel, Ordering::Acquire)
        .is_ok()
}

/// Compare-and-swap on a `u64` word.
#[inline(always)]
pub fn cas_u64(slot: &AtomicU64, current: u64, new: u64) -> bool {
    slot.compare_exchange(current, new, Ordering::AcqRel, Ordering::Acquire)
        .is_ok()
}

/// Atomically adds `delta` to `slot`, returning the previous value.
#[inline(always)]
pub fn fetch_add_u32(slot: &AtomicU32, delta: u32) -> u32 {
    slot.fetch_add(delta, Ordering::AcqRel)
}

/// Atomically adds `delta` to `slot`, returning the previous value.
#[inline(always)]
pub fn fetch_add_u64(slot: &AtomicU64, delta: u64) -> u64 {
    slot.fetch_add(delta, Ordering::AcqRel)
}

/// Monotone write: stores `value` into `slot` iff `value < slot`'s current
/// contents, retrying under concurrent writers. Returns `true` iff this call
/// performed the write that left `slot` holding its final (smallest-seen)
/// value at the moment of the call.
#[inline]
pub fn write_min_u32(slot: &AtomicU32, value: u32) -> bool {
    let mut cur = slot.load(Ordering::Acquire);
    while value < cur {
        match slot.compare_exchange_weak(cur, value, Ordering::AcqRel, Ordering::Acquire) {
            Ok(_) => return true,
            Err(observed) => cur = observed,
        }
    }
    false
}

/// Monotone write: stores `value` into `slot` iff `value > slot`'s current
/// contents, retrying under concurrent writers.
#[inline]
pub fn write_max_u32(slot: &AtomicU32, value: u32) -> bool {
    let mut cur = slot.load(Ordering::Acquire);
    while value > cur {
        match slot.compare_exchange_weak(cur, value, Ordering::AcqRel, Ordering::Acquire) {
            Ok(_) => return true,
            Err(observed) => cur = observed,
        }
    }
    false
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::AtomicU32;
    use std::thread;

    #[test]
    fn write_min_converges_under_contention() {
        let slot = AtomicU32::new(u32::MAX);
        thread::scope(|scope| {
            for v in 0..64u32 {
                scope.spawn(|| {
                    write_min_u32(&slot, v);
                });
            }
        });
        assert_eq!(slot.load(std::sync::atomic::Ordering::Acquire), 0);
    }

    #[test]
    fn write_max_converges_under_contention() {
        let slot = AtomicU32::new(0);
        thread::scope(|scope| {
            for v in 0..64u32 {
                scope.spawn(|| {
                    write_max_u32(&slot, v);
                });
            }
        });
        assert_eq!(slot.load(std::sync::atomic::Ordering::Acquire), 63);
    }

    #[test]
    fn cas_u32_only_one_winner() {
        let slot = AtomicU32::new(0);
        let wins = std::sync::atomic::AtomicU32::new(0);
        thread::scope(|scope| {
            for _ in 0..32 {
                scope.spawn(|| {
                    if cas_u32(&slot, 0, 1) {
                        wins.fetch_add(1, Ordering::Relaxed);
                    }
                });
            }
        });
        assert_eq!(wins.load(Ordering::Relaxed), 1);
    }
}
