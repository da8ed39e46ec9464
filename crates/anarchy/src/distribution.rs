//! Implicit partition of `total` items across capacity-bounded segments.
//!
//! The segment range is halved repeatedly. At each level
//! [`distribution_split_point`] decides how many of the current items go to
//! the first half, and a query only follows the half it cares about, so every
//! query costs `O(log n_segments)` and no assignment table is ever built.
//!
//! `roughness` controls the split: `0.0` keeps halves in proportion to their
//! segment counts, `1.0` picks uniformly from every split the capacities
//! allow.
//!
//! The free functions assume `n_segments >= 1` and
//! `segment_capacity * n_segments >= total`; [`Distribution`] checks both.
//!
//! ```
//! use anarchy::Distribution;
//!
//! let dist = Distribution::new(100u64, 10, 12, 0.0, 17)?;
//! assert!(dist.portions().all(|p| p == 10));
//! assert_eq!(dist.prior_sum(3)?, 30);
//! assert_eq!(dist.segment(35)?, 3);
//! # Ok::<(), anarchy::AnarchyError>(())
//! ```

use log::{debug, trace};

use crate::core::word::Word;
use crate::error::{AnarchyError, Result};
use crate::rng::prng;

/// Number of items that go to the first `n_segments / 2` segments.
///
/// The result always lies between `total - segment_capacity * (n_segments -
/// n_segments / 2)` and `segment_capacity * (n_segments / 2)`, so neither
/// half is asked to hold more than it can.
pub fn distribution_split_point<W: Word>(
    total: W,
    n_segments: W,
    segment_capacity: W,
    roughness: f64,
    seed: W,
) -> W {
    let first_half = n_segments >> 1;
    let second_half = n_segments.wrapping_sub(first_half);

    let natural = W::from_u64(
        (u128::from(total.to_u64()) * u128::from(first_half.to_u64())
            / u128::from(n_segments.to_u64())) as u64,
    );
    let above = total.wrapping_sub(natural);
    let down = W::from_f64(libm::ceil(natural.to_f64() * roughness)).min(natural);
    let up = W::from_f64(libm::floor(above.to_f64() * roughness)).min(above);

    let mut split_min = natural.wrapping_sub(down);
    let mut split_max = natural.wrapping_add(up);

    let second_capacity = segment_capacity.saturating_mul(second_half);
    if total.wrapping_sub(split_min) > second_capacity {
        split_min = total.wrapping_sub(second_capacity);
    }
    let first_capacity = segment_capacity.saturating_mul(first_half);
    if split_max > first_capacity {
        split_max = first_capacity;
    }

    if split_min >= split_max {
        return split_min;
    }
    let noise = prng(total ^ prng(seed, seed), seed);
    split_min.wrapping_add(noise % split_max.wrapping_sub(split_min))
}

/// Number of items in `segment`.
pub fn distribution_portion<W: Word>(
    segment: W,
    total: W,
    n_segments: W,
    segment_capacity: W,
    roughness: f64,
    seed: W,
) -> W {
    let (mut segment, mut total, mut n_segments) = (segment, total, n_segments);
    while n_segments > W::ONE {
        let first_half = n_segments >> 1;
        let split = distribution_split_point(total, n_segments, segment_capacity, roughness, seed);
        trace!("portion: {total} items over {n_segments} segments split at {split}");
        if segment < first_half {
            total = split;
            n_segments = first_half;
        } else {
            segment = segment.wrapping_sub(first_half);
            total = total.wrapping_sub(split);
            n_segments = n_segments.wrapping_sub(first_half);
        }
    }
    total
}

/// Number of items in all segments before `segment`.
///
/// `segment == n_segments` (or anything past it) gives `total`.
pub fn distribution_prior_sum<W: Word>(
    segment: W,
    total: W,
    n_segments: W,
    segment_capacity: W,
    roughness: f64,
    seed: W,
) -> W {
    if segment >= n_segments {
        return total;
    }
    let (mut segment, mut total, mut n_segments) = (segment, total, n_segments);
    let mut before = W::ZERO;
    while n_segments > W::ONE {
        let first_half = n_segments >> 1;
        let split = distribution_split_point(total, n_segments, segment_capacity, roughness, seed);
        trace!("prior_sum: {total} items over {n_segments} segments split at {split}");
        if segment < first_half {
            total = split;
            n_segments = first_half;
        } else {
            before = before.wrapping_add(split);
            segment = segment.wrapping_sub(first_half);
            total = total.wrapping_sub(split);
            n_segments = n_segments.wrapping_sub(first_half);
        }
    }
    before
}

/// Segment that item `index` (in `[0, total)`) falls into.
pub fn distribution_segment<W: Word>(
    index: W,
    total: W,
    n_segments: W,
    segment_capacity: W,
    roughness: f64,
    seed: W,
) -> W {
    let (mut index, mut total, mut n_segments) = (index, total, n_segments);
    let mut segment = W::ZERO;
    while n_segments > W::ONE {
        let first_half = n_segments >> 1;
        let split = distribution_split_point(total, n_segments, segment_capacity, roughness, seed);
        trace!("segment: {total} items over {n_segments} segments split at {split}");
        if index < split {
            total = split;
            n_segments = first_half;
        } else {
            segment = segment.wrapping_add(first_half);
            index = index.wrapping_sub(split);
            total = total.wrapping_sub(split);
            n_segments = n_segments.wrapping_sub(first_half);
        }
    }
    segment
}

/// Index of the largest entry of an ascending running-sum table that is
/// strictly smaller than `value`, or `None` if no entry is.
///
/// ```
/// use anarchy::max_smaller;
///
/// let table: [u32; 4] = [0, 3, 3, 10];
/// assert_eq!(max_smaller(0, &table), None);
/// assert_eq!(max_smaller(3, &table), Some(0));
/// assert_eq!(max_smaller(4, &table), Some(2));
/// assert_eq!(max_smaller(99, &table), Some(3));
/// ```
pub fn max_smaller<W: Word>(value: W, sumtable: &[W]) -> Option<usize> {
    sumtable.partition_point(|&entry| entry < value).checked_sub(1)
}

// -----------------------------------------------------------------------------
// Distribution
// -----------------------------------------------------------------------------

/// Validated distribution parameters.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Distribution<W: Word> {
    total: W,
    n_segments: W,
    segment_capacity: W,
    roughness: f64,
    seed: W,
}

impl<W: Word> Distribution<W> {
    /// Checks the parameters of a distribution.
    ///
    /// # Errors
    ///
    /// - [`AnarchyError::NoSegments`] when `n_segments` is zero
    /// - [`AnarchyError::InvalidRoughness`] when `roughness` is NaN or
    ///   outside `[0, 1]`
    /// - [`AnarchyError::OverCapacity`] when the segments cannot hold
    ///   `total` items
    pub fn new(
        total: W,
        n_segments: W,
        segment_capacity: W,
        roughness: f64,
        seed: W,
    ) -> Result<Self> {
        if n_segments.is_zero() {
            debug!("rejecting distribution of {total} items over zero segments");
            return Err(AnarchyError::NoSegments);
        }
        if !(0.0..=1.0).contains(&roughness) {
            debug!("rejecting distribution with roughness {roughness}");
            return Err(AnarchyError::InvalidRoughness(roughness));
        }
        let capacity = u128::from(segment_capacity.to_u64()) * u128::from(n_segments.to_u64());
        if capacity < u128::from(total.to_u64()) {
            debug!(
                "rejecting {total} items over {n_segments} segments of capacity {segment_capacity}"
            );
            return Err(AnarchyError::OverCapacity {
                total: total.to_u64(),
                n_segments: n_segments.to_u64(),
                segment_capacity: segment_capacity.to_u64(),
            });
        }
        Ok(Self {
            total,
            n_segments,
            segment_capacity,
            roughness,
            seed,
        })
    }

    /// Total number of items.
    #[inline]
    pub fn total(&self) -> W {
        self.total
    }

    /// Number of segments.
    #[inline]
    pub fn n_segments(&self) -> W {
        self.n_segments
    }

    /// Items in `segment`.
    pub fn portion(&self, segment: W) -> Result<W> {
        self.check_segment(segment)?;
        Ok(distribution_portion(
            segment,
            self.total,
            self.n_segments,
            self.segment_capacity,
            self.roughness,
            self.seed,
        ))
    }

    /// Items before `segment`. Accepts `segment == n_segments`, which gives
    /// the total.
    pub fn prior_sum(&self, segment: W) -> Result<W> {
        if segment != self.n_segments {
            self.check_segment(segment)?;
        }
        Ok(distribution_prior_sum(
            segment,
            self.total,
            self.n_segments,
            self.segment_capacity,
            self.roughness,
            self.seed,
        ))
    }

    /// Segment holding item `index`.
    pub fn segment(&self, index: W) -> Result<W> {
        if index >= self.total {
            debug!("item {index} outside distribution of {} items", self.total);
            return Err(AnarchyError::ItemOutOfRange {
                index: index.to_u64(),
                total: self.total.to_u64(),
            });
        }
        Ok(distribution_segment(
            index,
            self.total,
            self.n_segments,
            self.segment_capacity,
            self.roughness,
            self.seed,
        ))
    }

    /// Portion of every segment, in order.
    pub fn portions(&self) -> impl Iterator<Item = W> + '_ {
        let mut segment = W::ZERO;
        core::iter::from_fn(move || {
            if segment >= self.n_segments {
                return None;
            }
            let portion = distribution_portion(
                segment,
                self.total,
                self.n_segments,
                self.segment_capacity,
                self.roughness,
                self.seed,
            );
            segment = segment.wrapping_add(W::ONE);
            Some(portion)
        })
    }

    fn check_segment(&self, segment: W) -> Result<()> {
        if segment >= self.n_segments {
            debug!(
                "segment {segment} outside distribution of {} segments",
                self.n_segments
            );
            return Err(AnarchyError::SegmentOutOfRange {
                segment: segment.to_u64(),
                n_segments: self.n_segments.to_u64(),
            });
        }
        Ok(())
    }
}
