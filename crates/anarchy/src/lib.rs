//! # Anarchy
//!
//! Reversible chaos: seeded, invertible pseudo-random functions over
//! fixed-width words, and invertible shuffles over integer ranges of any
//! size.
//!
//! Every operation is a pure function of its arguments. Nothing allocates,
//! nothing holds state, and nothing builds a lookup table: a shuffled index
//! (or its inverse) is computed directly from `(index, size, seed)`.
//!
//! ## Layers
//!
//! - [`unit`]: elementary bijections (`swirl`, `fold`, `flop`, `scramble`)
//! - [`rng`]: seed scrambling and the reversible [`prng`] / [`rev_prng`]
//! - [`sample`]: one-way samplers (`udist`, `idist`, `expdist`, `flip`, `pgdist`)
//! - [`cohort`]: seven index permutations and their composition into
//!   [`cohort_shuffle`]
//! - [`distribution`]: implicit partition of items into capacity-bounded
//!   segments
//! - [`select`]: reversible parent/child selection built on the shuffles
//!
//! Every function is generic over [`Word`], implemented for `u32` and `u64`.
//! The two widths produce different (but individually stable) sequences.
//!
//! ## Example
//!
//! ```
//! use anarchy::{cohort_shuffle, prng, rev_cohort_shuffle, rev_prng, udist};
//!
//! let x: u64 = prng(17, 42);
//! assert_eq!(rev_prng(x, 42), 17);
//!
//! let scattered = cohort_shuffle(3u32, 100, 42);
//! assert!(scattered < 100);
//! assert_eq!(rev_cohort_shuffle(scattered, 100, 42), 3);
//!
//! let u = udist(x);
//! assert!((0.0..1.0).contains(&u));
//! ```
//!
//! ## Not cryptography
//!
//! These functions are invertible and look random, but they are easy to
//! analyse. Do not use them to protect anything.
//!
//! ## Features
//!
//! - `std` (default): `std::error::Error` for [`AnarchyError`]. Without it
//!   the crate is `no_std`.

#![cfg_attr(not(feature = "std"), no_std)]

// Word trait and fixed constants
mod core;

// Error type for the checked entry points
pub mod error;

// Elementary reversible bit operations
pub mod unit;

// Seed scrambling and the reversible PRNG
pub mod rng;

// One-way samplers
pub mod sample;

// Cohort permutations
pub mod cohort;

// Implicit segment partition
pub mod distribution;

// Reversible one-to-many selection
pub mod select;

// Re-export submodules for external access
pub use core::constants;
pub use core::word;

pub use core::constants::DEFAULT_LAMBDA;
pub use core::word::Word;

pub use error::{AnarchyError, Result};

pub use unit::{
    byte_mask, flop, fold, hash_string, mask, posmod, rev_scramble, rev_swirl, scramble, swirl,
};

pub use rng::{prng, rev_prng, scramble_seed, smooth_prng};

pub use sample::{expdist, flip, idist, lfsr, pgdist, truncated_expdist, udist};

pub use cohort::{
    cohort, cohort_and_inner, cohort_flop, cohort_fold, cohort_inner, cohort_interleave,
    cohort_mix, cohort_outer, cohort_regions, cohort_shuffle, cohort_spin, cohort_spread,
    cohort_upend, rev_cohort_fold, rev_cohort_interleave, rev_cohort_mix, rev_cohort_shuffle,
    rev_cohort_spin, rev_cohort_spread, Cohort, CohortIter, Permutation,
};

pub use distribution::{
    distribution_portion, distribution_prior_sum, distribution_segment, distribution_split_point,
    max_smaller, Distribution,
};

pub use select::{count_select_children, select_nth_child, select_parent_and_index, Selection};
