// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Numeric primitives: limits, input normalization and the Collatz step.
//!
//! - `constants`: overflow threshold, iteration cap, input ceiling
//! - `input`: RawInput and normalize()
//! - `step`: the Collatz map with overflow detection

pub mod constants;
pub mod input;
pub mod step;

// Re-export for convenience
pub use constants::*;
pub use input::{normalize, RawInput};
pub use step::step;
