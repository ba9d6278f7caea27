// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Structured result of a single-value analysis.

use super::JumpInfo;
use crate::errors::CollatzError;
use crate::verify::ValidationResult;
use serde::Serialize;
use strum_macros::Display;

/// Which walk produced a result.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, Serialize)]
#[strum(serialize_all = "snake_case")]
#[serde(rename_all = "snake_case")]
pub enum Algorithm {
    Naive,
    Accelerated,
}

/// How a single-value analysis ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, Serialize)]
#[strum(serialize_all = "snake_case")]
#[serde(rename_all = "snake_case")]
pub enum Outcome {
    /// Input was 1.
    Trivial,
    /// Naive walk reached 1.
    Complete,
    /// Accelerated walk spliced in a suffix that verified.
    JumpUsed,
    /// Accelerated walk reached 1 without meeting a table key.
    NoJump,
    /// Accelerated walk spliced in a suffix that failed verification.
    ValidationFailed,
    /// Input rejected or walk aborted; see `error`.
    Error,
}

/// Result of [`analyze`](super::analyze) or [`analyze_naive`](super::analyze_naive).
///
/// Produced fresh per call. `total_stopping_time` is `None` only when
/// `outcome` is [`Outcome::Error`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct WalkResult {
    /// Normalized input, if normalization succeeded.
    pub input: Option<u64>,
    pub algorithm: Algorithm,
    pub outcome: Outcome,
    pub total_stopping_time: Option<u64>,
    /// Steps applied one at a time.
    pub computed_steps: u64,
    /// Steps covered by a spliced suffix.
    pub saved_steps: u64,
    pub jump: Option<JumpInfo>,
    /// Present whenever a jump was used.
    pub validation: Option<ValidationResult>,
    /// Full sequence, input to 1. Empty on error.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub sequence: Vec<u64>,
    pub error: Option<CollatzError>,
}

impl WalkResult {
    pub(crate) fn failed(algorithm: Algorithm, input: Option<u64>, error: CollatzError) -> Self {
        Self {
            input,
            algorithm,
            outcome: Outcome::Error,
            total_stopping_time: None,
            computed_steps: 0,
            saved_steps: 0,
            jump: None,
            validation: None,
            sequence: Vec::new(),
            error: Some(error),
        }
    }

    /// True unless the outcome is [`Outcome::Error`] or [`Outcome::ValidationFailed`].
    pub fn is_ok(&self) -> bool {
        !matches!(self.outcome, Outcome::Error | Outcome::ValidationFailed)
    }

    pub fn jump_entry(&self) -> Option<u64> {
        self.jump.map(|j| j.entry)
    }

    pub fn jump_position(&self) -> Option<u64> {
        self.jump.map(|j| j.position)
    }

    pub fn jump_suffix_length(&self) -> Option<usize> {
        self.jump.map(|j| j.suffix_length)
    }
}
