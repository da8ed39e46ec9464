//! One-way samplers.
//!
//! Everything here starts from a single [`lfsr`] step, which throws away
//! information and so cannot be undone. Callers who want a stream of values
//! usually feed successive [`prng`](crate::prng) outputs in as seeds.

use crate::core::constants::PGDIST_STRIDE;
use crate::core::word::Word;

/// One step of a maximal-length linear-feedback shift register.
///
/// ```
/// use anarchy::lfsr;
///
/// assert_eq!(lfsr(489_348u64), 244_674);
/// assert_eq!(lfsr(1_766_932_808u32), 883_466_404);
/// ```
#[inline]
pub fn lfsr<W: Word>(x: W) -> W {
    let shifted = x >> 1;
    if x.is_odd() {
        shifted ^ W::LFSR_TAPS
    } else {
        shifted
    }
}

/// Uniform value in `[0, 1)` derived from `seed`.
///
/// Bias is on the order of one part in `2^BITS / UDIST_PRIME`.
pub fn udist<W: Word>(seed: W) -> f64 {
    let ux = lfsr(seed);
    let spread = ux ^ (ux << 16);
    (spread.to_u64() % W::UDIST_PRIME) as f64 / W::UDIST_PRIME as f64
}

/// Integer drawn evenly from `start` toward `end`: in `[start, end)`, or
/// counting downward when `end < start`.
pub fn idist<W: Word>(seed: W, start: i64, end: i64) -> i64 {
    let span = end as f64 - start as f64;
    libm::floor(udist(seed) * span) as i64 + start
}

/// Exponentially distributed value with rate `lambda` (mean `1 / lambda`).
///
/// [`DEFAULT_LAMBDA`](crate::DEFAULT_LAMBDA) is the usual
/// choice when the caller has no opinion.
pub fn expdist<W: Word>(seed: W, lambda: f64) -> f64 {
    // udist is in [0, 1), so 1 - u is never zero.
    -libm::log(1.0 - udist(seed)) / lambda
}

/// Fractional part of [`expdist`]: a truncated exponential on `[0, 1)`.
pub fn truncated_expdist<W: Word>(seed: W, lambda: f64) -> f64 {
    let e = expdist(seed, lambda);
    e - libm::floor(e)
}

/// Bernoulli trial: `true` with probability `p`.
#[inline]
pub fn flip<W: Word>(p: f64, seed: W) -> bool {
    udist(seed) < p
}

/// Average of three uniform draws: a bell-shaped value in `[0, 1)`.
pub fn pgdist<W: Word>(seed: W) -> f64 {
    let stride = W::from_u64(PGDIST_STRIDE);
    let total: f64 = (0..3u64)
        .map(|k| udist(seed.wrapping_add(stride.wrapping_mul(W::from_u64(k)))))
        .sum();
    total / 3.0
}
