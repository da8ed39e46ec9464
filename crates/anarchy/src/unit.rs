//! Elementary reversible bit operations.
//!
//! Every operation here is a bijection on the word type. Each one either is
//! its own inverse or has an explicit `rev_` partner:
//!
//! ```text
//! rev_swirl(swirl(x, d), d)    = x
//! fold(fold(x, w), w)          = x   (involution)
//! flop(flop(x))                = x   (involution)
//! rev_scramble(scramble(x))    = x
//! ```
//!
//! These are the building blocks of [`prng`](crate::prng) and carry no state.

use crate::core::word::Word;

/// Creates a mask with the low `bits` bits set.
///
/// `bits` must be at most `W::BITS`; `mask::<W>(W::BITS)` is all ones.
///
/// # Example
///
/// ```
/// use anarchy::unit::mask;
///
/// assert_eq!(mask::<u32>(0), 0);
/// assert_eq!(mask::<u32>(4), 15);
/// assert_eq!(mask::<u64>(64), u64::MAX);
/// ```
#[inline]
pub fn mask<W: Word>(bits: u32) -> W {
    debug_assert!(bits <= W::BITS, "mask wider than the word");
    if bits >= W::BITS {
        W::MAX
    } else {
        (W::ONE << bits).wrapping_sub(W::ONE)
    }
}

/// Returns a mask covering just the `n`th byte (zero-indexed from the least
/// significant end).
///
/// # Example
///
/// ```
/// use anarchy::unit::byte_mask;
///
/// assert_eq!(byte_mask::<u32>(0), 0xff);
/// assert_eq!(byte_mask::<u32>(1), 65280);
/// ```
#[inline]
pub fn byte_mask<W: Word>(n: u32) -> W {
    debug_assert!(n < W::BITS / 8, "byte index outside the word");
    W::from_u64(0xff) << (8 * n)
}

/// Modulus that is never negative for a positive `y`.
///
/// ```
/// use anarchy::unit::posmod;
///
/// assert_eq!(posmod(-1, 7), 6);
/// assert_eq!(posmod(-13, 11), 9);
/// ```
#[inline]
pub fn posmod(x: i64, y: i64) -> i64 {
    x.rem_euclid(y)
}

/// String hash (`h = 31 * h + c` over code points), wrapping in the word.
pub fn hash_string<W: Word>(s: &str) -> W {
    s.chars().fold(W::ZERO, |hash, c| {
        (hash << 5)
            .wrapping_sub(hash)
            .wrapping_add(W::from_u64(u64::from(c)))
    })
}

/// Effective rotation distance: `distance mod floor(3 * BITS / 4)`.
#[inline(always)]
fn swirl_distance<W: Word>(distance: W) -> u32 {
    let cap = W::from_u64(u64::from(3 * W::BITS / 4));
    (distance % cap).to_u64() as u32
}

/// Circular right shift; the distance is taken modulo 3/4 of the width.
///
/// Inverse is [`rev_swirl`].
///
/// ```
/// use anarchy::unit::swirl;
///
/// assert_eq!(swirl(1u32, 1), 0x8000_0000);
/// assert_eq!(swirl(8u64, 2), 2);
/// ```
#[inline]
pub fn swirl<W: Word>(x: W, distance: W) -> W {
    x.rotate_right(swirl_distance(distance))
}

/// Inverse of [`swirl`].
#[inline]
pub fn rev_swirl<W: Word>(x: W, distance: W) -> W {
    x.rotate_left(swirl_distance(distance))
}

/// Xors the low bits into the high bits.
///
/// The fold point is `(where_ mod BITS/4) + BITS/4`, so between one quarter
/// and one half of the width. `fold` is its own inverse.
#[inline]
pub fn fold<W: Word>(x: W, where_: W) -> W {
    let quarter = W::BITS / 4;
    let at = (where_ % W::from_u64(u64::from(quarter))).to_u64() as u32 + quarter;
    let lower = x & mask::<W>(at);
    x ^ (lower << (W::BITS - at))
}

/// Swaps each half-byte with its neighbour. Its own inverse.
///
/// ```
/// use anarchy::unit::flop;
///
/// assert_eq!(flop(0xf0f0_f0f0u32), 0x0f0f_0f0f);
/// assert_eq!(flop(22908u64), 38343);
/// ```
#[inline]
pub fn flop<W: Word>(x: W) -> W {
    let left = x & W::FLOP_MASK;
    let right = x & !W::FLOP_MASK;
    (right << 4) | (left >> 4)
}

/// A reversible LFSR-like step: rotate right by one, then xor in
/// `SCRAMBLE_XOR` if any `TRIGGER_MASK` bit was set *before* rotating.
///
/// Inverse is [`rev_scramble`].
#[inline]
pub fn scramble<W: Word>(x: W) -> W {
    let rotated = swirl(x, W::ONE);
    if (x & W::TRIGGER_MASK).is_zero() {
        rotated
    } else {
        rotated ^ W::SCRAMBLE_XOR
    }
}

/// Inverse of [`scramble`].
///
/// The trigger is tested on the value *after* undoing the rotation; that is
/// the original input up to `REV_SCRAMBLE_XOR`, which shares no bits with the
/// trigger mask.
#[inline]
pub fn rev_scramble<W: Word>(x: W) -> W {
    let unrotated = rev_swirl(x, W::ONE);
    if (unrotated & W::TRIGGER_MASK).is_zero() {
        unrotated
    } else {
        unrotated ^ W::REV_SCRAMBLE_XOR
    }
}
