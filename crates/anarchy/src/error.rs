//! Errors reported by the checked entry points ([`Cohort`](crate::Cohort),
//! [`Distribution`](crate::Distribution) and [`Selection`](crate::Selection)).
//!
//! The free functions never return these; they document their
//! preconditions instead.

use thiserror::Error;

/// Rejected parameters for a cohort, distribution or selection query.
#[derive(Debug, Clone, Copy, PartialEq, Error)]
pub enum AnarchyError {
    /// A cohort must hold at least one index.
    #[error("cohort size must be at least 1")]
    EmptyCohort,

    /// Inner index outside `[0, cohort_size)`.
    #[error("inner index {inner} is outside a cohort of size {cohort_size}")]
    InnerOutOfRange { inner: u64, cohort_size: u64 },

    /// A distribution needs at least one segment.
    #[error("distribution needs at least one segment")]
    NoSegments,

    /// The segments cannot hold every item.
    #[error(
        "{total} items do not fit in {n_segments} segments of capacity {segment_capacity}"
    )]
    OverCapacity {
        total: u64,
        n_segments: u64,
        segment_capacity: u64,
    },

    /// Roughness must be a number in `[0, 1]`.
    #[error("roughness {0} is outside [0, 1]")]
    InvalidRoughness(f64),

    /// Segment index outside `[0, n_segments)`.
    #[error("segment {segment} is outside a distribution of {n_segments} segments")]
    SegmentOutOfRange { segment: u64, n_segments: u64 },

    /// Item index outside `[0, total)`.
    #[error("item {index} is outside a distribution of {total} items")]
    ItemOutOfRange { index: u64, total: u64 },

    /// Average arity must be at least 1 and at most half the maximum.
    #[error("average arity {avg_arity} needs 1 <= avg_arity <= {max_arity} / 2")]
    InvalidArity { avg_arity: u64, max_arity: u64 },
}

/// Result alias for the checked entry points.
pub type Result<T> = core::result::Result<T, AnarchyError>;
