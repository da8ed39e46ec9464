//! Core types and constants.
//!
//! - [`word::Word`]: the fixed-width unsigned word every operation is generic over
//! - [`constants`]: width-independent constants (region limits, seed offsets)

pub mod constants;
pub mod word;
