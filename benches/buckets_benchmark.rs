//! Benchmarks `Buckets::update_buckets`'s histogram protocol (the component
//! the reference implementation singles out for its own microbenchmarks)
//! and a full drain of a priority-ordered bucket structure.

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};

use frontier_engine::buckets::{Buckets, BucketOrder, BUCKET_ABSENT};
use frontier_engine::config::EngineConfig;
use frontier_engine::graph::Vid;

fn bench_construction(c: &mut Criterion) {
    let mut group = c.benchmark_group("buckets_construction");
    for &n in &[10_000usize, 1_000_000] {
        group.bench_with_input(BenchmarkId::from_parameter(n), &n, |b, &n| {
            let cfg = EngineConfig::default();
            b.iter(|| Buckets::make_buckets(n, |v| Some(v as usize % 4096), BucketOrder::Increasing, 128, cfg));
        });
    }
    group.finish();
}

fn bench_full_drain(c: &mut Criterion) {
    let mut group = c.benchmark_group("buckets_full_drain");
    for &n in &[10_000usize, 200_000] {
        group.bench_with_input(BenchmarkId::from_parameter(n), &n, |b, &n| {
            let cfg = EngineConfig::default();
            b.iter(|| {
                let mut buckets =
                    Buckets::make_buckets(n, |v| Some(v as usize), BucketOrder::Increasing, 64, cfg);
                let mut total = 0usize;
                loop {
                    let (id, members) = buckets.next_bucket();
                    if id == BUCKET_ABSENT {
                        break;
                    }
                    total += members.len();
                }
                total
            });
        });
    }
    group.finish();
}

fn bench_update_buckets_direct(c: &mut Criterion) {
    let mut group = c.benchmark_group("buckets_update_buckets_direct");
    for &k in &[50_000usize, 500_000] {
        group.bench_with_input(BenchmarkId::from_parameter(k), &k, |b, &k| {
            let cfg = EngineConfig::default();
            b.iter(|| {
                let mut buckets = Buckets::make_buckets(0, |_| None, BucketOrder::Increasing, 32, cfg);
                buckets.update_buckets(|i| Some((i as Vid, i % 31)), k)
            });
        });
    }
    group.finish();
}

criterion_group!(benches, bench_construction, bench_full_drain, bench_update_buckets_direct);
criterion_main!(benches);
