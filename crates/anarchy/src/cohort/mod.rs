//! Reversible permutations over a cohort `[0, cohort_size)`.
//!
//! An outer index splits into a cohort number and an inner index:
//!
//! ```text
//! outer = cohort(outer) * cohort_size + cohort_inner(outer)
//! ```
//!
//! The primitives in [`ops`] each permute inner indices; [`cohort_shuffle`]
//! chains fifteen of them. None of them build a table: every index is
//! mapped in constant time, forwards or backwards.
//!
//! [`Cohort`] bundles a size and a seed, checks its arguments, and
//! implements [`Permutation`].
//!
//! # Example
//!
//! ```
//! use anarchy::{Cohort, Permutation};
//!
//! let cohort = Cohort::new(12u32, 42)?;
//! let order: Vec<u32> = cohort.iter().collect();
//! assert_eq!(order, [9, 6, 5, 0, 1, 11, 4, 7, 3, 2, 10, 8]);
//! assert_eq!(cohort.invert(9)?, 0);
//! # Ok::<(), anarchy::AnarchyError>(())
//! ```

pub mod ops;
pub mod shuffle;

#[cfg(all(test, feature = "std"))]
mod tests;

use core::iter::FusedIterator;

use log::debug;

use crate::core::word::Word;
use crate::error::{AnarchyError, Result};

pub use ops::{
    cohort_flop, cohort_fold, cohort_interleave, cohort_mix, cohort_regions, cohort_spin,
    cohort_spread, cohort_upend, rev_cohort_fold, rev_cohort_interleave, rev_cohort_mix,
    rev_cohort_spin, rev_cohort_spread,
};
pub use shuffle::{cohort_shuffle, rev_cohort_shuffle};

// -----------------------------------------------------------------------------
// Outer / inner decomposition
// -----------------------------------------------------------------------------

/// Cohort number of an outer index.
#[inline]
pub fn cohort<W: Word>(outer: W, cohort_size: W) -> W {
    outer / cohort_size
}

/// Position of an outer index within its cohort.
#[inline]
pub fn cohort_inner<W: Word>(outer: W, cohort_size: W) -> W {
    outer % cohort_size
}

/// Both halves of the decomposition: `(cohort, inner)`.
#[inline]
pub fn cohort_and_inner<W: Word>(outer: W, cohort_size: W) -> (W, W) {
    (outer / cohort_size, outer % cohort_size)
}

/// Recombines a cohort number and inner index into an outer index (wrapping).
///
/// ```
/// use anarchy::cohort_outer;
///
/// assert_eq!(cohort_outer(1u32, 3, 112), 115);
/// assert_eq!(cohort_outer(u64::MAX, 3, 112), u64::MAX - 108);
/// ```
#[inline]
pub fn cohort_outer<W: Word>(cohort: W, inner: W, cohort_size: W) -> W {
    cohort.wrapping_mul(cohort_size).wrapping_add(inner)
}

// -----------------------------------------------------------------------------
// Permutation
// -----------------------------------------------------------------------------

/// A seeded, invertible permutation of `[0, size)`.
pub trait Permutation<W: Word> {
    /// Number of indices permuted.
    fn size(&self) -> W;

    /// Maps an index to its permuted position.
    fn apply(&self, inner: W) -> Result<W>;

    /// Undoes [`apply`](Permutation::apply).
    fn invert(&self, inner: W) -> Result<W>;
}

/// A cohort size and seed, checked once up front.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Cohort<W: Word> {
    size: W,
    seed: W,
}

impl<W: Word> Cohort<W> {
    /// Creates a cohort of `size` indices shuffled by `seed`.
    ///
    /// # Errors
    ///
    /// Returns [`AnarchyError::EmptyCohort`] when `size` is zero.
    pub fn new(size: W, seed: W) -> Result<Self> {
        if size.is_zero() {
            debug!("rejecting empty cohort (seed {seed})");
            return Err(AnarchyError::EmptyCohort);
        }
        Ok(Self { size, seed })
    }

    /// The cohort's seed.
    #[inline]
    pub fn seed(&self) -> W {
        self.seed
    }

    /// Shuffled position of `inner`.
    pub fn shuffle(&self, inner: W) -> Result<W> {
        self.check(inner)?;
        Ok(cohort_shuffle(inner, self.size, self.seed))
    }

    /// Original position of a shuffled index.
    pub fn unshuffle(&self, inner: W) -> Result<W> {
        self.check(inner)?;
        Ok(rev_cohort_shuffle(inner, self.size, self.seed))
    }

    /// Shuffles an outer index, keeping it inside its own cohort.
    pub fn shuffle_outer(&self, outer: W) -> W {
        let (which, inner) = cohort_and_inner(outer, self.size);
        cohort_outer(which, cohort_shuffle(inner, self.size, self.seed), self.size)
    }

    /// Inverse of [`shuffle_outer`](Cohort::shuffle_outer).
    pub fn unshuffle_outer(&self, outer: W) -> W {
        let (which, inner) = cohort_and_inner(outer, self.size);
        cohort_outer(which, rev_cohort_shuffle(inner, self.size, self.seed), self.size)
    }

    /// The shuffled order of the whole cohort, computed lazily.
    pub fn iter(&self) -> CohortIter<W> {
        CohortIter {
            cohort: *self,
            next: W::ZERO,
            done: false,
        }
    }

    fn check(&self, inner: W) -> Result<()> {
        if inner >= self.size {
            debug!("inner index {inner} outside cohort of size {}", self.size);
            return Err(AnarchyError::InnerOutOfRange {
                inner: inner.to_u64(),
                cohort_size: self.size.to_u64(),
            });
        }
        Ok(())
    }
}

impl<W: Word> Permutation<W> for Cohort<W> {
    #[inline]
    fn size(&self) -> W {
        self.size
    }

    fn apply(&self, inner: W) -> Result<W> {
        self.shuffle(inner)
    }

    fn invert(&self, inner: W) -> Result<W> {
        self.unshuffle(inner)
    }
}

impl<W: Word> IntoIterator for Cohort<W> {
    type Item = W;
    type IntoIter = CohortIter<W>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<'a, W: Word> IntoIterator for &'a Cohort<W> {
    type Item = W;
    type IntoIter = CohortIter<W>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Iterator over a cohort's shuffled order.
#[derive(Debug, Clone)]
pub struct CohortIter<W: Word> {
    cohort: Cohort<W>,
    next: W,
    done: bool,
}

impl<W: Word> Iterator for CohortIter<W> {
    type Item = W;

    fn next(&mut self) -> Option<W> {
        if self.done {
            return None;
        }
        let inner = self.next;
        let size = self.cohort.size;
        let out = cohort_shuffle(inner, size, self.cohort.seed);
        self.next = inner.wrapping_add(W::ONE);
        if self.next >= size || self.next.is_zero() {
            self.done = true;
        }
        Some(out)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        if self.done {
            return (0, Some(0));
        }
        let remaining = self.cohort.size.wrapping_sub(self.next).to_u64();
        match usize::try_from(remaining) {
            Ok(n) => (n, Some(n)),
            Err(_) => (usize::MAX, None),
        }
    }
}

impl<W: Word> FusedIterator for CohortIter<W> {}
