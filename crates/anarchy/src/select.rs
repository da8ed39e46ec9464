//! Reversible one-to-many selection between parents and children.
//!
//! Children are grouped into cohorts of `max_arity`, parents into cohorts of
//! `max_arity / avg_arity`, and the `k`th child cohort belongs to the `k`th
//! parent cohort. Inside a cohort both sides are shuffled, then the parent
//! range is halved repeatedly while [`smooth_prng`] decides how many of the
//! current children go to the lower half. A parent therefore owns one
//! contiguous run of shuffled child positions, which is how
//! [`select_parent_and_index`] and [`select_nth_child`] invert each other
//! without building a table.
//!
//! `avg_arity` only holds on average: the split is random, and a parent can
//! have no children at all.
//!
//! The free functions assume `1 <= avg_arity <= max_arity / 2`;
//! [`Selection`] checks it.
//!
//! ```
//! use anarchy::Selection;
//!
//! let family = Selection::new(3u64, 24, 17)?;
//! let (parent, index) = family.parent_and_index(30);
//! assert_eq!(family.nth_child(parent, index), Some(30));
//! # Ok::<(), anarchy::AnarchyError>(())
//! ```

use log::{debug, trace};

use crate::cohort::{cohort_and_inner, cohort_outer, cohort_shuffle, rev_cohort_shuffle};
use crate::core::constants::SELECT_SMOOTHNESS;
use crate::core::word::Word;
use crate::error::{AnarchyError, Result};
use crate::rng::smooth_prng;

/// Children in the lower half of the current parent range.
#[inline]
fn divide<W: Word>(previous: W, children_left: W, seed: W) -> W {
    smooth_prng(previous, children_left, SELECT_SMOOTHNESS, seed)
}

/// `(parent, index)` for `child`: its parent, and which of that parent's
/// children it is.
pub fn select_parent_and_index<W: Word>(
    child: W,
    avg_arity: W,
    max_arity: W,
    seed: W,
) -> (W, W) {
    let parent_cohort_size = max_arity / avg_arity;
    let (which, inner) = cohort_and_inner(child, max_arity);
    let mut position = cohort_shuffle(inner, max_arity, seed);

    let mut parent = W::ZERO;
    let mut parents_left = parent_cohort_size;
    let mut children_left = max_arity;
    let mut divide_at = which.wrapping_add(seed);
    while parents_left > W::ONE {
        let lower = parents_left >> 1;
        divide_at = divide(divide_at, children_left, seed);
        trace!("parent: {children_left} over {parents_left} parents, divide at {divide_at}");
        if position < divide_at {
            parents_left = lower;
            children_left = divide_at;
        } else {
            position = position.wrapping_sub(divide_at);
            parent = parent.wrapping_add(lower);
            parents_left = parents_left.wrapping_sub(lower);
            children_left = children_left.wrapping_sub(divide_at);
        }
    }

    let parent_inner = rev_cohort_shuffle(parent, parent_cohort_size, seed);
    (
        cohort_outer(which, parent_inner, parent_cohort_size),
        position,
    )
}

/// `(cohort, first shuffled child position, child count)` for `parent`.
fn child_run<W: Word>(parent: W, avg_arity: W, max_arity: W, seed: W) -> (W, W, W) {
    let parent_cohort_size = max_arity / avg_arity;
    let (which, inner) = cohort_and_inner(parent, parent_cohort_size);
    let mut position = cohort_shuffle(inner, parent_cohort_size, seed);

    let mut start = W::ZERO;
    let mut parents_left = parent_cohort_size;
    let mut children_left = max_arity;
    let mut divide_at = which.wrapping_add(seed);
    while parents_left > W::ONE && !children_left.is_zero() {
        let lower = parents_left >> 1;
        divide_at = divide(divide_at, children_left, seed);
        trace!("children: {children_left} over {parents_left} parents, divide at {divide_at}");
        if position < lower {
            parents_left = lower;
            children_left = divide_at;
        } else {
            position = position.wrapping_sub(lower);
            start = start.wrapping_add(divide_at);
            parents_left = parents_left.wrapping_sub(lower);
            children_left = children_left.wrapping_sub(divide_at);
        }
    }
    (which, start, children_left)
}

/// The `nth` child of `parent`, or `None` once `nth` reaches its child count.
pub fn select_nth_child<W: Word>(
    parent: W,
    nth: W,
    avg_arity: W,
    max_arity: W,
    seed: W,
) -> Option<W> {
    let (which, start, count) = child_run(parent, avg_arity, max_arity, seed);
    if nth >= count {
        return None;
    }
    let inner = rev_cohort_shuffle(start.wrapping_add(nth), max_arity, seed);
    Some(cohort_outer(which, inner, max_arity))
}

/// How many children `parent` has under [`select_nth_child`].
pub fn count_select_children<W: Word>(parent: W, avg_arity: W, max_arity: W, seed: W) -> W {
    child_run(parent, avg_arity, max_arity, seed).2
}

// -----------------------------------------------------------------------------
// Selection
// -----------------------------------------------------------------------------

/// Validated selection parameters.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Selection<W: Word> {
    avg_arity: W,
    max_arity: W,
    seed: W,
}

impl<W: Word> Selection<W> {
    /// Checks the arity bounds.
    ///
    /// # Errors
    ///
    /// Returns [`AnarchyError::InvalidArity`] unless
    /// `1 <= avg_arity <= max_arity / 2`.
    pub fn new(avg_arity: W, max_arity: W, seed: W) -> Result<Self> {
        if avg_arity.is_zero() || avg_arity > max_arity >> 1 {
            debug!("rejecting selection with average arity {avg_arity} of {max_arity}");
            return Err(AnarchyError::InvalidArity {
                avg_arity: avg_arity.to_u64(),
                max_arity: max_arity.to_u64(),
            });
        }
        Ok(Self {
            avg_arity,
            max_arity,
            seed,
        })
    }

    /// Number of parents sharing each cohort of `max_arity` children.
    #[inline]
    pub fn parents_per_cohort(&self) -> W {
        self.max_arity / self.avg_arity
    }

    /// Parent of `child`, and its index among that parent's children.
    pub fn parent_and_index(&self, child: W) -> (W, W) {
        select_parent_and_index(child, self.avg_arity, self.max_arity, self.seed)
    }

    /// The `nth` child of `parent`, if it has that many.
    pub fn nth_child(&self, parent: W, nth: W) -> Option<W> {
        select_nth_child(parent, nth, self.avg_arity, self.max_arity, self.seed)
    }

    /// Number of children of `parent`.
    pub fn child_count(&self, parent: W) -> W {
        count_select_children(parent, self.avg_arity, self.max_arity, self.seed)
    }

    /// Every child of `parent`, in index order.
    pub fn children(&self, parent: W) -> impl Iterator<Item = W> + '_ {
        let (which, start, count) =
            child_run(parent, self.avg_arity, self.max_arity, self.seed);
        let mut nth = W::ZERO;
        core::iter::from_fn(move || {
            if nth >= count {
                return None;
            }
            let inner = rev_cohort_shuffle(start.wrapping_add(nth), self.max_arity, self.seed);
            nth = nth.wrapping_add(W::ONE);
            Some(cohort_outer(which, inner, self.max_arity))
        })
    }
}

#[cfg(all(test, feature = "std"))]
mod tests {
    use super::*;

    fn counts<W: Word>(avg: u64, max: u64, seed: u64, parents: u64) -> Vec<u64> {
        (0..parents)
            .map(|p| {
                count_select_children(
                    W::from_u64(p),
                    W::from_u64(avg),
                    W::from_u64(max),
                    W::from_u64(seed),
                )
                .to_u64()
            })
            .collect()
    }

    #[test]
    fn test_child_counts_known_values() {
        assert_eq!(counts::<u32>(3, 24, 17, 8), [0, 3, 4, 7, 3, 2, 4, 1]);
        assert_eq!(counts::<u64>(3, 24, 17, 8), [2, 5, 2, 5, 1, 2, 7, 0]);
    }

    #[test]
    fn test_selection_known_values() {
        assert_eq!(select_parent_and_index(5u32, 3, 24, 17), (2, 3));
        assert_eq!(select_parent_and_index(30u64, 3, 24, 17), (8, 0));
        let family = Selection::new(3u64, 24, 17).unwrap();
        assert_eq!(family.children(0).collect::<Vec<_>>(), [6, 1]);
        assert_eq!(family.nth_child(0, 2), None);
    }

    #[test]
    fn test_every_child_round_trips() {
        for &(avg, max, seed) in &[(3u64, 24u64, 17u64), (4, 40, 1029), (1, 2, 5), (2, 7, 0)] {
            let family = Selection::new(avg, max, seed).unwrap();
            for child in 0..3 * max {
                let (parent, index) = family.parent_and_index(child);
                assert!(index < family.child_count(parent));
                assert_eq!(family.nth_child(parent, index), Some(child));
            }
            let small = Selection::new(avg as u32, max as u32, seed as u32).unwrap();
            for child in 0..3 * max as u32 {
                let (parent, index) = small.parent_and_index(child);
                assert_eq!(small.nth_child(parent, index), Some(child));
            }
        }
    }

    #[test]
    fn test_each_cohort_shares_out_every_child() {
        let family = Selection::new(4u64, 40, 1029).unwrap();
        let per_cohort = family.parents_per_cohort();
        assert_eq!(per_cohort, 10);
        for which in 0..3u64 {
            let parents = which * per_cohort..(which + 1) * per_cohort;
            let mut children: Vec<u64> = parents.flat_map(|p| family.children(p)).collect();
            children.sort_unstable();
            let expected: Vec<u64> = (which * 40..(which + 1) * 40).collect();
            assert_eq!(children, expected);
        }
    }

    #[test]
    fn test_selection_validation() {
        assert_eq!(
            Selection::new(0u32, 10, 1),
            Err(AnarchyError::InvalidArity {
                avg_arity: 0,
                max_arity: 10
            })
        );
        assert!(Selection::new(6u64, 10, 1).is_err());
        assert!(Selection::new(5u64, 10, 1).is_ok());
        assert!(Selection::new(1u32, 2, 1).is_ok());
    }
}
