// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Error types for normalization, stepping and walking.
//!
//! Every failure here is an expected outcome of untrusted input or of a bad
//! jump-table row. Analysis entry points return them inside a
//! [`WalkResult`](crate::walker::WalkResult) instead of aborting.

use serde::Serialize;
use strum_macros::{EnumCount as EnumCountMacro, EnumDiscriminants, EnumIter, IntoStaticStr};
use thiserror::Error;

/// Errors that can occur while analyzing a single value.
///
/// [`ErrorKind`] is the data-free discriminant, used to index per-kind counters.
#[derive(Debug, Clone, PartialEq, Eq, Error, EnumDiscriminants, Serialize)]
#[serde(tag = "kind")]
#[strum_discriminants(name(ErrorKind))]
#[strum_discriminants(derive(EnumCountMacro, EnumIter, IntoStaticStr, Hash))]
pub enum CollatzError {
    /// Input was absent, empty, non-numeric, or not a whole number.
    #[error("invalid number format '{input}': {reason}")]
    InvalidFormat { input: String, reason: String },

    /// Input is a whole number but is non-positive or above the ceiling.
    #[error("n must be in 1..={limit}, got {value}")]
    OutOfRange { value: String, limit: u64 },

    /// The step function was handed zero.
    #[error("invalid value {value} for the Collatz map")]
    InvalidDomain { value: u64 },

    /// 3n+1 would leave the safe multiply range.
    #[error("overflow risk for n={value}")]
    OverflowRisk { value: u64 },

    /// Iteration cap exceeded before reaching 1.
    #[error("sequence for n={start} exceeded {cap} steps")]
    SequenceTooLong { start: u64, cap: usize },

    /// A jump entry's stored suffix differs from its naive re-derivation.
    #[error("jump entry {entry} is inconsistent: {detail}")]
    JumpTableInconsistency { entry: u64, detail: String },
}

impl CollatzError {
    pub fn kind(&self) -> ErrorKind {
        ErrorKind::from(self)
    }
}
