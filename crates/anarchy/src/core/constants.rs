//! Fixed constants shared across the anarchy operations.
//!
//! Width-dependent constants live on [`Word`](super::word::Word); the ones
//! here are the same for every width. They are part of the output contract:
//! changing any of them changes every sequence derived from existing seeds.

/// Region count used by `cohort_spread` / `cohort_upend` for cohorts of at
/// least four items. Smaller cohorts start from a single region.
pub const MIN_REGIONS: u64 = 2;

/// Number of distinct region counts the seed can pick from.
pub const REGION_CHOICES: u64 = 16;

/// Seed offset for the even-indexed half of `cohort_mix`.
pub const MIX_EVEN_OFFSET: u64 = 1_048_239;

/// Seed offset for the odd-indexed half of `cohort_mix`.
pub const MIX_ODD_OFFSET: u64 = 464_185;

/// Stride between the three `udist` draws averaged by `pgdist` (truncated to
/// the word width).
pub const PGDIST_STRIDE: u64 = 9_182_793_183;

/// Extra draws averaged by `smooth_prng` when selection splits a range of
/// children between two groups of parents.
pub const SELECT_SMOOTHNESS: u32 = 2;

/// Rate used by the exponential samplers when the caller has no preference.
pub const DEFAULT_LAMBDA: f64 = 0.5;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pgdist_stride_is_odd() {
        assert_eq!(PGDIST_STRIDE % 2, 1);
        assert_eq!((PGDIST_STRIDE as u32) % 2, 1);
    }

    #[test]
    fn test_region_bounds() {
        // regions range over 2..=17 for large cohorts
        assert_eq!(MIN_REGIONS + REGION_CHOICES - 1, 17);
    }
}
