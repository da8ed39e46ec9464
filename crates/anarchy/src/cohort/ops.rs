//! The seven cohort primitives.
//!
//! Each maps an inner index in `[0, cohort_size)` to another index in the
//! same range. `cohort_flop` and `cohort_upend` are involutions; the rest
//! have a `rev_` inverse taking the same `(cohort_size, seed)`.
//!
//! # Panics
//!
//! Every function here divides by `cohort_size` (or a quantity derived from
//! it) and panics when it is zero. Results are unspecified for
//! `inner >= cohort_size`. [`Cohort`](super::Cohort) checks both.

use crate::core::constants::{MIN_REGIONS, MIX_EVEN_OFFSET, MIX_ODD_OFFSET, REGION_CHOICES};
use crate::core::word::Word;

#[inline(always)]
fn w<W: Word>(value: u64) -> W {
    W::from_u64(value)
}

/// `ceil(n / 2)` without overflowing at `W::MAX`.
#[inline(always)]
fn ceil_half<W: Word>(n: W) -> W {
    (n >> 1).wrapping_add(n & W::ONE)
}

// -----------------------------------------------------------------------------
// Interleave
// -----------------------------------------------------------------------------

/// Folds the top half of the cohort onto the odd positions.
///
/// ```
/// use anarchy::cohort_interleave;
///
/// assert_eq!(cohort_interleave(3u32, 12), 6);
/// assert_eq!(cohort_interleave(7u32, 12), 9);
/// ```
pub fn cohort_interleave<W: Word>(inner: W, cohort_size: W) -> W {
    if inner < ceil_half(cohort_size) {
        inner.wrapping_mul(w(2))
    } else {
        cohort_size
            .wrapping_sub(W::ONE)
            .wrapping_sub(inner)
            .wrapping_mul(w(2))
            .wrapping_add(W::ONE)
    }
}

/// Inverse of [`cohort_interleave`].
pub fn rev_cohort_interleave<W: Word>(inner: W, cohort_size: W) -> W {
    if inner.is_odd() {
        cohort_size.wrapping_sub(W::ONE).wrapping_sub(inner >> 1)
    } else {
        inner >> 1
    }
}

// -----------------------------------------------------------------------------
// Fold
// -----------------------------------------------------------------------------

/// `(split, after, fold_to)` shared by both fold directions.
///
/// `split` lies in the second quarter-to-half of the range and always leaves
/// an odd number of items after it.
fn fold_geometry<W: Word>(cohort_size: W, seed: W) -> (W, W, W) {
    let half = cohort_size >> 1;
    let quarter = cohort_size >> 2;
    let mut split = half;
    if !quarter.is_zero() {
        split = split.wrapping_add(seed % quarter);
    }
    if !cohort_size.wrapping_sub(split).is_odd() {
        split = split.wrapping_add(W::ONE);
    }
    let after = cohort_size.wrapping_sub(split);
    let fold_to = half.wrapping_sub(after >> 1);
    (split, after, fold_to)
}

/// Moves the tail of the cohort into a gap opened just below the middle.
pub fn cohort_fold<W: Word>(inner: W, cohort_size: W, seed: W) -> W {
    let (split, after, fold_to) = fold_geometry(cohort_size, seed);
    if inner < fold_to {
        inner
    } else if inner < split {
        inner.wrapping_add(after)
    } else {
        inner.wrapping_sub(split).wrapping_add(fold_to)
    }
}

/// Inverse of [`cohort_fold`].
pub fn rev_cohort_fold<W: Word>(inner: W, cohort_size: W, seed: W) -> W {
    let (split, after, fold_to) = fold_geometry(cohort_size, seed);
    if inner < fold_to {
        inner
    } else if inner < fold_to.wrapping_add(after) {
        inner.wrapping_sub(fold_to).wrapping_add(split)
    } else {
        inner.wrapping_sub(after)
    }
}

// -----------------------------------------------------------------------------
// Spin
// -----------------------------------------------------------------------------

/// Circular offset: `(inner + seed) mod cohort_size`.
///
/// Computed without an intermediate sum, so seeds near `W::MAX` still give a
/// bijection.
pub fn cohort_spin<W: Word>(inner: W, cohort_size: W, seed: W) -> W {
    let offset = seed % cohort_size;
    let room = cohort_size.wrapping_sub(offset);
    if inner >= room {
        inner.wrapping_sub(room)
    } else {
        inner.wrapping_add(offset)
    }
}

/// Inverse of [`cohort_spin`].
pub fn rev_cohort_spin<W: Word>(inner: W, cohort_size: W, seed: W) -> W {
    let offset = seed % cohort_size;
    if inner >= offset {
        inner.wrapping_sub(offset)
    } else {
        inner.wrapping_add(cohort_size.wrapping_sub(offset))
    }
}

// -----------------------------------------------------------------------------
// Flop
// -----------------------------------------------------------------------------

/// Swaps seed-sized blocks with their neighbours, pairwise.
///
/// Block size is `seed mod limit + 2`, where `limit` is `cohort_size / 8`
/// raised by 4 when that is below 4. Items whose partner position falls
/// outside the cohort stay put. Its own inverse.
pub fn cohort_flop<W: Word>(inner: W, cohort_size: W, seed: W) -> W {
    let mut limit = cohort_size >> 3;
    if limit < w(4) {
        limit = limit.wrapping_add(w(4));
    }
    let block = (seed % limit).wrapping_add(w(2));
    let which = inner / block;
    let local = inner % block;

    let target = if which.is_odd() {
        Some(which.wrapping_sub(W::ONE).wrapping_mul(block).wrapping_add(local))
    } else {
        which
            .checked_add(W::ONE)
            .and_then(|next| next.checked_mul(block))
            .and_then(|start| start.checked_add(local))
    };
    match target {
        Some(t) if t < cohort_size => t,
        _ => inner,
    }
}

// -----------------------------------------------------------------------------
// Mix
// -----------------------------------------------------------------------------

/// Spins the even and odd positions as two independent sub-cohorts.
pub fn cohort_mix<W: Word>(inner: W, cohort_size: W, seed: W) -> W {
    mix_with(inner, cohort_size, seed, cohort_spin)
}

/// Inverse of [`cohort_mix`].
pub fn rev_cohort_mix<W: Word>(inner: W, cohort_size: W, seed: W) -> W {
    mix_with(inner, cohort_size, seed, rev_cohort_spin)
}

fn mix_with<W: Word>(inner: W, cohort_size: W, seed: W, spin: fn(W, W, W) -> W) -> W {
    let position = inner >> 1;
    if inner.is_odd() {
        let odds = cohort_size >> 1;
        let seed = seed.wrapping_add(w(MIX_ODD_OFFSET));
        (spin(position, odds, seed) << 1) | W::ONE
    } else {
        let evens = ceil_half(cohort_size);
        let seed = seed.wrapping_add(w(MIX_EVEN_OFFSET));
        spin(position, evens, seed) << 1
    }
}

// -----------------------------------------------------------------------------
// Spread / Upend
// -----------------------------------------------------------------------------

/// Number of regions `spread` and `upend` divide a cohort into.
///
/// Between 1 and 17, never more than `1 + cohort_size / 2`.
pub fn cohort_regions<W: Word>(cohort_size: W, seed: W) -> W {
    let min = if cohort_size < w(4) {
        W::ONE
    } else {
        w(MIN_REGIONS)
    };
    let max = (cohort_size >> 1).wrapping_add(W::ONE);
    let choices = max.wrapping_sub(min).wrapping_add(W::ONE);
    min.wrapping_add((seed % choices) % w(REGION_CHOICES))
}

/// `(regions, region_size, leftovers)` for a cohort.
fn region_geometry<W: Word>(cohort_size: W, seed: W) -> (W, W, W) {
    let regions = cohort_regions(cohort_size, seed);
    let region_size = cohort_size / regions;
    let leftovers = cohort_size.wrapping_sub(regions.wrapping_mul(region_size));
    (regions, region_size, leftovers)
}

/// Deals indices round-robin across the regions; leftovers go to the front.
pub fn cohort_spread<W: Word>(inner: W, cohort_size: W, seed: W) -> W {
    let (regions, region_size, leftovers) = region_geometry(cohort_size, seed);
    let region = inner % regions;
    let index = inner / regions;
    if index < region_size {
        region
            .wrapping_mul(region_size)
            .wrapping_add(index)
            .wrapping_add(leftovers)
    } else {
        inner.wrapping_sub(regions.wrapping_mul(region_size))
    }
}

/// Inverse of [`cohort_spread`].
pub fn rev_cohort_spread<W: Word>(inner: W, cohort_size: W, seed: W) -> W {
    let (regions, region_size, leftovers) = region_geometry(cohort_size, seed);
    if inner < leftovers {
        return regions.wrapping_mul(region_size).wrapping_add(inner);
    }
    let placed = inner.wrapping_sub(leftovers);
    (placed % region_size)
        .wrapping_mul(regions)
        .wrapping_add(placed / region_size)
}

/// Reverses the order of indices inside each region. Its own inverse.
///
/// Indices past the last full region are mirrored within regions of the same
/// size continuing past it; an index whose mirror would reach `cohort_size`
/// or beyond (including past `W::MAX`) stays put.
pub fn cohort_upend<W: Word>(inner: W, cohort_size: W, seed: W) -> W {
    let (_, region_size, _) = region_geometry(cohort_size, seed);
    let region = inner / region_size;
    let index = inner % region_size;
    let mirrored = region
        .wrapping_mul(region_size)
        .checked_add(region_size.wrapping_sub(W::ONE))
        .map(|last| last.wrapping_sub(index));
    match mirrored {
        Some(m) if m < cohort_size => m,
        _ => inner,
    }
}
