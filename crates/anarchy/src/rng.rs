//! Seed scrambling and the reversible PRNG.
//!
//! [`prng`] is a bijection on the word for every seed, and [`rev_prng`] is
//! its exact inverse under the same seed. Both start by passing the user
//! seed through [`scramble_seed`], so neighbouring seeds give uncorrelated
//! sequences.

use crate::core::word::Word;
use crate::unit::{flop, fold, rev_scramble, rev_swirl, scramble, swirl};

/// One-way remix of a raw seed into the internal seed used by [`prng`].
///
/// Not invertible, and not meant to be: it only has to be deterministic.
pub fn scramble_seed<W: Word>(seed: W) -> W {
    let w = W::from_u64;
    let mut s = seed;
    s = s.wrapping_add(W::ONE).wrapping_mul(w(3).wrapping_add(s % w(23)));
    s = fold(s, w(11));
    s = scramble(s);
    s = swirl(s, s.wrapping_add(w(23)));
    s = scramble(s);
    s ^ (s % w(153)).wrapping_mul(scramble(s))
}

/// Reversible pseudo-random mapping of `x` under `seed`.
///
/// # Example
///
/// ```
/// use anarchy::{prng, rev_prng};
///
/// let x: u64 = 489_348;
/// let y = prng(x, 373_891);
/// assert_ne!(x, y);
/// assert_eq!(rev_prng(y, 373_891), x);
/// ```
pub fn prng<W: Word>(x: W, seed: W) -> W {
    let w = W::from_u64;
    let seed = scramble_seed(seed);
    let mut r = x ^ seed;
    r = fold(r, seed.wrapping_add(w(17)));
    r = flop(r);
    r = swirl(r, seed.wrapping_add(w(37)));
    r = fold(r, seed.wrapping_add(w(89)));
    r = swirl(r, seed.wrapping_add(w(107)));
    scramble(r)
}

/// Inverse of [`prng`] under the same seed.
pub fn rev_prng<W: Word>(x: W, seed: W) -> W {
    let w = W::from_u64;
    let seed = scramble_seed(seed);
    let mut r = rev_scramble(x);
    r = rev_swirl(r, seed.wrapping_add(w(107)));
    r = fold(r, seed.wrapping_add(w(89)));
    r = rev_swirl(r, seed.wrapping_add(w(37)));
    r = flop(r);
    r = fold(r, seed.wrapping_add(w(17)));
    r ^ seed
}

/// Smoothed draw in `[0, limit)`.
///
/// Averages `smoothness + 1` chained [`prng`] outputs, each reduced modulo
/// `limit`. With `smoothness == 0` this is `prng(x, seed) % limit`. The sum
/// is accumulated in 128 bits, so large limits do not lose the smoothing to
/// overflow. Not reversible.
///
/// # Panics
///
/// Panics if `limit` is zero.
pub fn smooth_prng<W: Word>(x: W, limit: W, smoothness: u32, seed: W) -> W {
    let limit_wide = u128::from(limit.to_u64());
    let mut random = prng(x, seed);
    let mut sum = u128::from((random % limit).to_u64());
    for _ in 0..smoothness {
        random = prng(random, seed);
        sum += u128::from((random % limit).to_u64());
    }
    let mean = sum / (u128::from(smoothness) + 1);
    debug_assert!(mean < limit_wide);
    W::from_u64(mean as u64)
}
