//! Moment checks for the one-way samplers.
//!
//! Each sampler is fed a prng-chained stream of seeds and the sample mean and
//! standard deviation are compared with the distribution's. The tolerance is
//! relative and shrinks as the sample count grows.

use anarchy::{expdist, flip, idist, pgdist, prng, udist, Word};

const SEEDS: [u64; 10] = [
    0,
    1,
    3,
    17,
    48,
    64,
    1029,
    8_510_938,
    1_928_301_928,
    1 << 31,
];

const N_SAMPLES: usize = 10_000;

/// 1.2 / 10^(log10(n) - 3): 0.12 at ten thousand samples.
fn tolerance(n: usize) -> f64 {
    1.2 / 10f64.powf((n as f64).log10() - 3.0)
}

fn seed_stream<W: Word>(seed: W) -> Vec<W> {
    let mut out = Vec::with_capacity(N_SAMPLES);
    let mut r = seed;
    for _ in 0..N_SAMPLES {
        out.push(r);
        r = prng(r, seed);
    }
    out
}

fn moments(values: &[f64]) -> (f64, f64) {
    let n = values.len() as f64;
    let mean = values.iter().sum::<f64>() / n;
    let var = values.iter().map(|v| (v - mean).powi(2)).sum::<f64>() / n;
    (mean, var.sqrt())
}

fn assert_close(label: &str, seed: u64, observed: f64, expected: f64) {
    let error = ((observed - expected) / expected).abs();
    assert!(
        error < tolerance(N_SAMPLES),
        "{label} (seed {seed}): observed {observed}, expected {expected}"
    );
}

fn check_sampler<W: Word>(
    label: &str,
    expected_mean: f64,
    expected_stdev: f64,
    sample: impl Fn(W) -> f64,
) {
    for &seed in &SEEDS {
        let values: Vec<f64> = seed_stream(W::from_u64(seed))
            .into_iter()
            .map(&sample)
            .collect();
        let (mean, stdev) = moments(&values);
        assert_close(&format!("{label} mean"), seed, mean, expected_mean);
        assert_close(&format!("{label} stdev"), seed, stdev, expected_stdev);
    }
}

fn check_all<W: Word>() {
    check_sampler::<W>("udist", 0.5, 1.0 / 12f64.sqrt(), udist);

    let (low, high) = (-3i64, 12i64);
    let span = (high - low) as f64;
    check_sampler::<W>(
        "idist",
        (low + high - 1) as f64 / 2.0,
        ((span * span - 1.0) / 12.0).sqrt(),
        |s| idist(s, low, high) as f64,
    );

    for lambda in [0.5, 1.0, 2.5] {
        check_sampler::<W>("expdist", 1.0 / lambda, 1.0 / lambda, |s| expdist(s, lambda));
    }

    for p in [0.1, 0.5, 0.9] {
        check_sampler::<W>("flip", p, (p * (1.0 - p)).sqrt(), |s| {
            if flip(p, s) {
                1.0
            } else {
                0.0
            }
        });
    }

    check_sampler::<W>("pgdist", 0.5, 1.0 / 6.0, pgdist);
}

#[test]
fn test_sampler_moments_u32() {
    check_all::<u32>();
}

#[test]
fn test_sampler_moments_u64() {
    check_all::<u64>();
}

#[test]
fn test_tolerance_tightens() {
    assert!((tolerance(10_000) - 0.12).abs() < 1e-12);
    assert!(tolerance(100_000) < tolerance(10_000));
}
