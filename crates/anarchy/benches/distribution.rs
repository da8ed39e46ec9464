//! Benchmarks for the implicit segment partition and parent/child selection.

use anarchy::{Distribution, Selection};
use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};

fn bench_queries(c: &mut Criterion) {
    let mut group = c.benchmark_group("distribution");
    group.throughput(Throughput::Elements(1));

    for &n_segments in &[16_u64, 1024, 1 << 20] {
        let total = n_segments * 50;
        let dist = Distribution::new(total, n_segments, 100, 0.5, 1029).unwrap();

        group.bench_with_input(BenchmarkId::new("portion", n_segments), &dist, |b, dist| {
            b.iter(|| black_box(dist.portion(black_box(n_segments / 3))));
        });
        group.bench_with_input(BenchmarkId::new("prior_sum", n_segments), &dist, |b, dist| {
            b.iter(|| black_box(dist.prior_sum(black_box(n_segments / 3))));
        });
        group.bench_with_input(BenchmarkId::new("segment", n_segments), &dist, |b, dist| {
            b.iter(|| black_box(dist.segment(black_box(total / 3))));
        });
    }

    group.finish();
}

fn bench_selection(c: &mut Criterion) {
    let mut group = c.benchmark_group("selection");
    group.throughput(Throughput::Elements(1));

    for &max_arity in &[64_u64, 4096, 1 << 20] {
        let family = Selection::new(4, max_arity, 1029).unwrap();

        group.bench_with_input(BenchmarkId::new("parent", max_arity), &family, |b, family| {
            b.iter(|| black_box(family.parent_and_index(black_box(max_arity * 3 + 7))));
        });
        group.bench_with_input(BenchmarkId::new("child_count", max_arity), &family, |b, family| {
            b.iter(|| black_box(family.child_count(black_box(11))));
        });
    }

    group.finish();
}

criterion_group!(benches, bench_queries, bench_selection);
criterion_main!(benches);
