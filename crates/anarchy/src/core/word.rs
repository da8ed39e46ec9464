//! Fixed-width words that every anarchy operation is generic over.
//!
//! The `Word` trait captures what the reversible operations need from an
//! unsigned integer:
//!
//! - Wrapping arithmetic (all arithmetic is modulo `2^BITS`)
//! - Bitwise operations and rotations
//! - The width-specific magic constants used by `flop`, `scramble`, `lfsr`
//!   and `udist`
//!
//! # Implementors
//!
//! - `u32`: the 32-bit variant (matches the JavaScript port bit-for-bit)
//! - `u64`: the 64-bit variant (matches the C/Python ports bit-for-bit)
//!
//! # Width-dependent constants
//!
//! | constant           | `u32`        | `u64`                   |
//! |--------------------|--------------|-------------------------|
//! | `FLOP_MASK`        | `0xf0f0f0f0` | `0xf0f0f0f0f0f0f0f0`    |
//! | `TRIGGER_MASK`     | `0x80200003` | `0x80200003`            |
//! | `SCRAMBLE_XOR`     | `0x03040610` | `0x03040610`            |
//! | `REV_SCRAMBLE_XOR` | `0x06080c20` | `0x06080c20`            |
//! | `LFSR_TAPS`        | `0x80200003` | `0xe800000000000000`    |
//! | `UDIST_PRIME`      | `2147483659` | `2147483659`            |
//!
//! The 64-bit trigger and xor constants are the 32-bit values unchanged.
//! Widening them would change every sequence derived from existing seeds.

use core::fmt;
use core::hash::Hash;
use core::ops::{BitAnd, BitOr, BitXor, Div, Not, Rem, Shl, Shr};

/// An unsigned fixed-width word.
///
/// All arithmetic exposed here wraps; the wraparound is part of the
/// definition of every operation built on top of it.
pub trait Word:
    Copy
    + Default
    + Eq
    + Ord
    + Hash
    + fmt::Debug
    + fmt::Display
    + fmt::LowerHex
    + Send
    + Sync
    + 'static
    + BitAnd<Output = Self>
    + BitOr<Output = Self>
    + BitXor<Output = Self>
    + Not<Output = Self>
    + Shl<u32, Output = Self>
    + Shr<u32, Output = Self>
    + Div<Output = Self>
    + Rem<Output = Self>
{
    /// Number of bits in this word type.
    const BITS: u32;

    /// All-zeros constant.
    const ZERO: Self;

    /// The value one.
    const ONE: Self;

    /// All-ones constant.
    const MAX: Self;

    /// Mask selecting the high nibble of every byte (used by `flop`).
    const FLOP_MASK: Self;

    /// Bits tested by `scramble` to decide whether to xor in `SCRAMBLE_XOR`.
    const TRIGGER_MASK: Self;

    /// Constant xored in by `scramble` when the trigger fires.
    const SCRAMBLE_XOR: Self;

    /// `rev_swirl(SCRAMBLE_XOR, 1)`: the constant `rev_scramble` removes.
    ///
    /// Must share no bits with `TRIGGER_MASK`, otherwise `rev_scramble`
    /// could not recover the trigger decision.
    const REV_SCRAMBLE_XOR: Self;

    /// Feedback taps of the maximal-length LFSR used before sampling.
    const LFSR_TAPS: Self;

    /// Prime modulus used by `udist` to map a word into `[0, 1)`.
    const UDIST_PRIME: u64;

    /// Truncating conversion from `u64` (keeps the low `BITS` bits).
    fn from_u64(value: u64) -> Self;

    /// Widening conversion to `u64`.
    fn to_u64(self) -> u64;

    /// Wrapping addition.
    fn wrapping_add(self, other: Self) -> Self;

    /// Wrapping subtraction.
    fn wrapping_sub(self, other: Self) -> Self;

    /// Wrapping multiplication.
    fn wrapping_mul(self, other: Self) -> Self;

    /// Checked addition (`None` on overflow).
    fn checked_add(self, other: Self) -> Option<Self>;

    /// Checked multiplication (`None` on overflow).
    fn checked_mul(self, other: Self) -> Option<Self>;

    /// Saturating multiplication.
    fn saturating_mul(self, other: Self) -> Self;

    /// Circular right rotation.
    fn rotate_right(self, n: u32) -> Self;

    /// Circular left rotation.
    fn rotate_left(self, n: u32) -> Self;

    /// Check if word is zero.
    #[inline(always)]
    fn is_zero(self) -> bool {
        self == Self::ZERO
    }

    /// Check if the lowest bit is set.
    #[inline(always)]
    fn is_odd(self) -> bool {
        (self & Self::ONE) != Self::ZERO
    }

    /// Lossy conversion to `f64`.
    #[inline(always)]
    fn to_f64(self) -> f64 {
        self.to_u64() as f64
    }

    /// Saturating conversion from `f64`, truncating toward zero.
    ///
    /// Negative values and NaN map to zero.
    #[inline]
    fn from_f64(value: f64) -> Self {
        if value.is_nan() || value <= 0.0 {
            Self::ZERO
        } else if value >= Self::MAX.to_f64() {
            Self::MAX
        } else {
            Self::from_u64(value as u64)
        }
    }
}

// -----------------------------------------------------------------------------
// Scalar implementations
// -----------------------------------------------------------------------------

macro_rules! impl_word_scalar {
    (
        $ty:ty,
        flop = $flop:expr,
        trigger = $trigger:expr,
        scramble = $scramble:expr,
        rev_scramble = $rev_scramble:expr,
        taps = $taps:expr,
        prime = $prime:expr $(,)?
    ) => {
        impl Word for $ty {
            const BITS: u32 = <$ty>::BITS;
            const ZERO: Self = 0;
            const ONE: Self = 1;
            const MAX: Self = <$ty>::MAX;
            const FLOP_MASK: Self = $flop;
            const TRIGGER_MASK: Self = $trigger;
            const SCRAMBLE_XOR: Self = $scramble;
            const REV_SCRAMBLE_XOR: Self = $rev_scramble;
            const LFSR_TAPS: Self = $taps;
            const UDIST_PRIME: u64 = $prime;

            #[inline(always)]
            fn from_u64(value: u64) -> Self {
                value as $ty
            }
            #[inline(always)]
            fn to_u64(self) -> u64 {
                self as u64
            }
            #[inline(always)]
            fn wrapping_add(self, other: Self) -> Self {
                <$ty>::wrapping_add(self, other)
            }
            #[inline(always)]
            fn wrapping_sub(self, other: Self) -> Self {
                <$ty>::wrapping_sub(self, other)
            }
            #[inline(always)]
            fn wrapping_mul(self, other: Self) -> Self {
                <$ty>::wrapping_mul(self, other)
            }
            #[inline(always)]
            fn checked_add(self, other: Self) -> Option<Self> {
                <$ty>::checked_add(self, other)
            }
            #[inline(always)]
            fn checked_mul(self, other: Self) -> Option<Self> {
                <$ty>::checked_mul(self, other)
            }
            #[inline(always)]
            fn saturating_mul(self, other: Self) -> Self {
                <$ty>::saturating_mul(self, other)
            }
            #[inline(always)]
            fn rotate_right(self, n: u32) -> Self {
                <$ty>::rotate_right(self, n)
            }
            #[inline(always)]
            fn rotate_left(self, n: u32) -> Self {
                <$ty>::rotate_left(self, n)
            }
        }
    };
}

impl_word_scalar!(
    u32,
    flop = 0xf0f0_f0f0,
    trigger = 0x8020_0003,
    scramble = 0x0304_0610,
    rev_scramble = 0x0608_0c20,
    taps = 0x8020_0003, // 32, 22, 2, 1
    prime = 2_147_483_659,
);

impl_word_scalar!(
    u64,
    flop = 0xf0f0_f0f0_f0f0_f0f0,
    trigger = 0x8020_0003,
    scramble = 0x0304_0610,
    rev_scramble = 0x0608_0c20,
    taps = 0xe800_0000_0000_0000, // 64, 63, 61, 60
    prime = 2_147_483_659,
);
