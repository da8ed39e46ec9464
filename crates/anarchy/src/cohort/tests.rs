//! Cohort suite: bijectivity of every primitive, known orders, and the
//! checked [`Cohort`] API.

use super::*;
use crate::core::word::Word;

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

const SIZES: [u64; 5] = [3, 12, 17, 32, 1024];

type Op<W> = fn(W, W, W) -> W;

fn edge_seeds<W: Word>() -> impl Iterator<Item = W> {
    SEEDS
        .iter()
        .map(|&s| W::from_u64(s))
        .chain([W::MAX, W::MAX.wrapping_sub(W::from_u64(5))])
}

fn assert_inverse<W: Word>(name: &str, forward: Op<W>, backward: Op<W>) {
    for size in SIZES.iter().copied().chain(1..=20).map(W::from_u64) {
        for seed in edge_seeds::<W>() {
            let n = size.to_u64();
            let mut seen = vec![false; n as usize];
            for i in 0..n {
                let inner = W::from_u64(i);
                let out = forward(inner, size, seed);
                assert!(out < size, "{name}({i}, {n}, {seed}) = {out} escaped the cohort");
                assert!(!seen[out.to_u64() as usize], "{name} repeated {out} (size {n}, seed {seed})");
                seen[out.to_u64() as usize] = true;
                assert_eq!(backward(out, size, seed), inner, "{name} inverse (size {n}, seed {seed})");
            }
        }
    }
}

fn check_all_primitives<W: Word>() {
    assert_inverse::<W>("fold", cohort_fold, rev_cohort_fold);
    assert_inverse::<W>("spin", cohort_spin, rev_cohort_spin);
    assert_inverse::<W>("mix", cohort_mix, rev_cohort_mix);
    assert_inverse::<W>("spread", cohort_spread, rev_cohort_spread);
    assert_inverse::<W>("flop", cohort_flop, cohort_flop);
    assert_inverse::<W>("upend", cohort_upend, cohort_upend);
    assert_inverse::<W>("shuffle", cohort_shuffle, rev_cohort_shuffle);
    assert_inverse::<W>(
        "interleave",
        |i, n, _| cohort_interleave(i, n),
        |i, n, _| rev_cohort_interleave(i, n),
    );
}

// =============================================================================
// Bijectivity
// =============================================================================

#[test]
fn test_primitives_are_bijections_u32() {
    check_all_primitives::<u32>();
}

#[test]
fn test_primitives_are_bijections_u64() {
    check_all_primitives::<u64>();
}

// =============================================================================
// Known orders
// =============================================================================

#[test]
fn test_shuffle_known_orders() {
    let three: Vec<u32> = (0..3).map(|i| cohort_shuffle(i, 3, 17)).collect();
    assert_eq!(three, [0, 2, 1]);

    let expected: [u32; 12] = [9, 6, 5, 0, 1, 11, 4, 7, 3, 2, 10, 8];
    let twelve32: Vec<u32> = (0..12).map(|i| cohort_shuffle(i, 12, 42)).collect();
    let twelve64: Vec<u64> = (0..12).map(|i| cohort_shuffle(i, 12, 42)).collect();
    assert_eq!(twelve32, expected);
    assert_eq!(twelve64, expected.map(u64::from));
}

#[test]
fn test_shuffle_depends_on_seed() {
    let a: Vec<u64> = (0..32).map(|i| cohort_shuffle(i, 32, 1)).collect();
    let b: Vec<u64> = (0..32).map(|i| cohort_shuffle(i, 32, 2)).collect();
    assert_ne!(a, b);
}

#[test]
fn test_outer_decomposition() {
    assert_eq!(cohort(17u64, 3), 5);
    assert_eq!(cohort(10u64, 10), 1);
    assert_eq!(cohort(9u64, 10), 0);
    assert_eq!(cohort_inner(17u64, 3), 2);
    assert_eq!(cohort_inner(10u64, 10), 0);
    assert_eq!(cohort_inner(9u64, 10), 9);
    assert_eq!(cohort_and_inner(9u32, 10), (0, 9));
    assert_eq!(cohort_outer(0u64, 3, 112), 3);
    assert_eq!(cohort_outer(1u64, 3, 112), 115);
    assert_eq!(cohort_outer(u64::MAX, 3, 112), 18_446_744_073_709_551_507);
    for outer in 0..500u64 {
        let (c, i) = cohort_and_inner(outer, 37);
        assert_eq!(cohort_outer(c, i, 37), outer);
    }
}

// =============================================================================
// Cohort
// =============================================================================

#[test]
fn test_cohort_rejects_empty() {
    assert_eq!(Cohort::new(0u32, 5), Err(AnarchyError::EmptyCohort));
}

#[test]
fn test_cohort_checks_inner_range() {
    let cohort = Cohort::new(12u64, 42).unwrap();
    assert_eq!(
        cohort.shuffle(12),
        Err(AnarchyError::InnerOutOfRange {
            inner: 12,
            cohort_size: 12
        })
    );
    assert!(cohort.unshuffle(u64::MAX).is_err());
    assert_eq!(cohort.apply(0), Ok(9));
    assert_eq!(cohort.invert(9), Ok(0));
    assert_eq!(Permutation::size(&cohort), 12);
    assert_eq!(cohort.seed(), 42);
}

#[test]
fn test_cohort_iter_is_a_permutation() {
    let cohort = Cohort::new(17u32, 8_510_938).unwrap();
    let iter = cohort.iter();
    assert_eq!(iter.size_hint(), (17, Some(17)));
    let mut order: Vec<u32> = iter.collect();
    assert_eq!(order.len(), 17);
    for (i, &out) in order.iter().enumerate() {
        assert_eq!(cohort.unshuffle(out), Ok(i as u32));
    }
    order.sort_unstable();
    assert_eq!(order, (0..17).collect::<Vec<_>>());
}

#[test]
fn test_cohort_iter_single_item() {
    let cohort = Cohort::new(1u64, 0).unwrap();
    let mut iter = (&cohort).into_iter();
    assert_eq!(iter.next(), Some(0));
    assert_eq!(iter.next(), None);
    assert_eq!(iter.next(), None);
}

#[test]
fn test_outer_shuffle_stays_in_cohort() {
    let cohort = Cohort::new(10u64, 3).unwrap();
    for outer in 0..100u64 {
        let shuffled = cohort.shuffle_outer(outer);
        assert_eq!(shuffled / 10, outer / 10);
        assert_eq!(cohort.unshuffle_outer(shuffled), outer);
    }
}
