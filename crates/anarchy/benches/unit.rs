//! Benchmarks for the bit operations, the PRNG and the samplers.
//!
//! Measures:
//! - Elementary bijections (swirl, fold, flop, scramble)
//! - prng / rev_prng at both widths
//! - One-way samplers

use anarchy::{
    expdist, flop, fold, pgdist, prng, rev_prng, rev_scramble, scramble, scramble_seed, swirl,
    udist, DEFAULT_LAMBDA,
};
use criterion::{black_box, criterion_group, criterion_main, Criterion, Throughput};

// =============================================================================
// Bit Operations
// =============================================================================

fn bench_unit(c: &mut Criterion) {
    let mut group = c.benchmark_group("unit");
    group.throughput(Throughput::Elements(1));

    group.bench_function("swirl", |b| {
        b.iter(|| black_box(swirl(black_box(0xDEAD_BEEF_u64), black_box(17))));
    });

    group.bench_function("fold", |b| {
        b.iter(|| black_box(fold(black_box(0xDEAD_BEEF_u64), black_box(17))));
    });

    group.bench_function("flop", |b| {
        b.iter(|| black_box(flop(black_box(0xDEAD_BEEF_u64))));
    });

    group.bench_function("scramble", |b| {
        b.iter(|| black_box(scramble(black_box(0xDEAD_BEEF_u64))));
    });

    group.bench_function("rev_scramble", |b| {
        b.iter(|| black_box(rev_scramble(black_box(0xDEAD_BEEF_u64))));
    });

    group.finish();
}

// =============================================================================
// PRNG
// =============================================================================

fn bench_prng(c: &mut Criterion) {
    let mut group = c.benchmark_group("prng");
    group.throughput(Throughput::Elements(1));

    group.bench_function("scramble_seed", |b| {
        b.iter(|| black_box(scramble_seed(black_box(373_891_u64))));
    });

    group.bench_function("prng_u64", |b| {
        b.iter(|| black_box(prng(black_box(489_348_u64), black_box(373_891))));
    });

    group.bench_function("rev_prng_u64", |b| {
        b.iter(|| black_box(rev_prng(black_box(489_348_u64), black_box(373_891))));
    });

    group.bench_function("prng_u32", |b| {
        b.iter(|| black_box(prng(black_box(489_348_u32), black_box(373_891))));
    });

    group.finish();
}

// =============================================================================
// Samplers
// =============================================================================

fn bench_samplers(c: &mut Criterion) {
    let mut group = c.benchmark_group("samplers");
    group.throughput(Throughput::Elements(1));

    group.bench_function("udist", |b| {
        b.iter(|| black_box(udist(black_box(8_329_801_u64))));
    });

    group.bench_function("expdist", |b| {
        b.iter(|| black_box(expdist(black_box(8_329_801_u64), DEFAULT_LAMBDA)));
    });

    group.bench_function("pgdist", |b| {
        b.iter(|| black_box(pgdist(black_box(8_329_801_u64))));
    });

    group.finish();
}

criterion_group!(benches, bench_unit, bench_prng, bench_samplers);
criterion_main!(benches);
