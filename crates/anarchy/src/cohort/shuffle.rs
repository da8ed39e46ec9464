//! The full cohort shuffle: a fixed chain of fifteen primitives.
//!
//! The order and the seed offsets below define the output. Changing either
//! changes every shuffle derived from existing seeds.

use super::ops::{
    cohort_flop, cohort_fold, cohort_interleave, cohort_mix, cohort_spin, cohort_spread,
    cohort_upend, rev_cohort_fold, rev_cohort_interleave, rev_cohort_mix, rev_cohort_spin,
    rev_cohort_spread,
};
use crate::core::word::Word;

/// Shuffles `inner` within `[0, cohort_size)`.
///
/// For a fixed `(cohort_size, seed)` this is a permutation of the cohort;
/// [`rev_cohort_shuffle`] undoes it.
///
/// ```
/// use anarchy::{cohort_shuffle, rev_cohort_shuffle};
///
/// let shuffled: Vec<u64> = (0..12).map(|i| cohort_shuffle(i, 12, 42)).collect();
/// assert_eq!(shuffled, [9, 6, 5, 0, 1, 11, 4, 7, 3, 2, 10, 8]);
/// assert_eq!(rev_cohort_shuffle(9u64, 12, 42), 0);
/// ```
///
/// # Panics
///
/// Panics if `cohort_size` is zero.
pub fn cohort_shuffle<W: Word>(inner: W, cohort_size: W, seed: W) -> W {
    let base = seed ^ cohort_size;
    let s = |offset: u64| base.wrapping_add(W::from_u64(offset));
    let n = cohort_size;

    let mut r = inner;
    r = cohort_spread(r, n, s(457));
    r = cohort_mix(r, n, s(2897));
    r = cohort_interleave(r, n);
    r = cohort_spin(r, n, s(1987));
    r = cohort_upend(r, n, s(47));
    r = cohort_fold(r, n, s(839));
    r = cohort_interleave(r, n);
    r = cohort_flop(r, n, s(53));
    r = cohort_fold(r, n, s(211));
    r = cohort_mix(r, n, s(733));
    r = cohort_spread(r, n, s(881));
    r = cohort_interleave(r, n);
    r = cohort_flop(r, n, s(193));
    r = cohort_upend(r, n, s(794_641));
    cohort_spin(r, n, s(19))
}

/// Inverse of [`cohort_shuffle`].
///
/// # Panics
///
/// Panics if `cohort_size` is zero.
pub fn rev_cohort_shuffle<W: Word>(inner: W, cohort_size: W, seed: W) -> W {
    let base = seed ^ cohort_size;
    let s = |offset: u64| base.wrapping_add(W::from_u64(offset));
    let n = cohort_size;

    let mut r = inner;
    r = rev_cohort_spin(r, n, s(19));
    r = cohort_upend(r, n, s(794_641));
    r = cohort_flop(r, n, s(193));
    r = rev_cohort_interleave(r, n);
    r = rev_cohort_spread(r, n, s(881));
    r = rev_cohort_mix(r, n, s(733));
    r = rev_cohort_fold(r, n, s(211));
    r = cohort_flop(r, n, s(53));
    r = rev_cohort_interleave(r, n);
    r = rev_cohort_fold(r, n, s(839));
    r = cohort_upend(r, n, s(47));
    r = rev_cohort_spin(r, n, s(1987));
    r = rev_cohort_interleave(r, n);
    r = rev_cohort_mix(r, n, s(2897));
    rev_cohort_spread(r, n, s(457))
}
