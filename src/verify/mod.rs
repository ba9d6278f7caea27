// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Verification of jump entries against the naive map.
//!
//! The table is never trusted. Each entry's stored suffix is re-derived from
//! its first value and compared element by element. The first differing
//! element is reported before any length difference.

pub mod compare;

pub use compare::{compare_sequences, Difference, SequenceComparison};

use crate::errors::CollatzError;
use crate::memo::{JumpEntry, JumpTable};
use crate::numeric::VERIFY_LENGTH_SLACK;
use crate::walker::Trajectory;
use serde::Serialize;
use tracing::{info, warn};

/// Outcome of re-deriving one jump entry.
///
/// `expected_*` describes the stored suffix, `actual_*` the re-derived one.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ValidationResult {
    pub entry: u64,
    pub valid: bool,
    /// Index of the first differing element, or of the first element present
    /// in only one of the two sequences.
    pub mismatch_position: Option<usize>,
    pub expected_value: Option<u64>,
    pub actual_value: Option<u64>,
    pub expected_length: usize,
    pub actual_length: usize,
    /// Set when re-derivation itself failed.
    pub failure: Option<CollatzError>,
}

impl ValidationResult {
    /// The inconsistency as an error, or `None` when the entry is valid.
    pub fn to_error(&self) -> Option<CollatzError> {
        if self.valid {
            return None;
        }
        let detail = if let Some(failure) = &self.failure {
            format!("re-derivation failed: {}", failure)
        } else if let (Some(position), Some(stored), Some(derived)) =
            (self.mismatch_position, self.expected_value, self.actual_value)
        {
            format!("stored {} but derived {} at position {}", stored, derived, position)
        } else {
            format!(
                "stored {} values but derived {}",
                self.expected_length, self.actual_length
            )
        };
        Some(CollatzError::JumpTableInconsistency {
            entry: self.entry,
            detail,
        })
    }
}

/// Re-derive `entry`'s suffix naively and compare it with the stored one.
///
/// Re-derivation is bounded at the stored length plus
/// [`VERIFY_LENGTH_SLACK`] values.
///
/// # Example
///
/// ```
/// use collatz_wormhole::memo::JumpEntry;
/// use collatz_wormhole::verify::verify_entry;
///
/// let good = JumpEntry::new(3, vec![3, 10, 5, 16, 8, 4, 2, 1]).unwrap();
/// assert!(verify_entry(&good).valid);
///
/// let bad = JumpEntry::new(3, vec![3, 10, 5, 16, 4, 2, 1]).unwrap();
/// let result = verify_entry(&bad);
/// assert!(!result.valid);
/// assert_eq!(result.mismatch_position, Some(4));
/// ```
pub fn verify_entry(entry: &JumpEntry) -> ValidationResult {
    let expected = entry.suffix();
    let bound = expected.len() + VERIFY_LENGTH_SLACK;

    let mut actual = Vec::with_capacity(expected.len());
    let mut failure = None;
    for value in Trajectory::new(entry.entry()) {
        match value {
            Ok(v) => actual.push(v),
            Err(e) => {
                failure = Some(e);
                break;
            }
        }
        if actual.len() > bound {
            failure = Some(CollatzError::SequenceTooLong {
                start: entry.entry(),
                cap: bound,
            });
            break;
        }
    }

    let mut result = ValidationResult {
        entry: entry.entry(),
        valid: true,
        mismatch_position: None,
        expected_value: None,
        actual_value: None,
        expected_length: expected.len(),
        actual_length: actual.len(),
        failure: None,
    };

    if let Some(i) = expected.iter().zip(&actual).position(|(e, a)| e != a) {
        result.valid = false;
        result.mismatch_position = Some(i);
        result.expected_value = Some(expected[i]);
        result.actual_value = Some(actual[i]);
    } else if let Some(e) = failure {
        result.valid = false;
        result.failure = Some(e);
    } else if expected.len() != actual.len() {
        let i = expected.len().min(actual.len());
        result.valid = false;
        result.mismatch_position = Some(i);
        result.expected_value = expected.get(i).copied();
        result.actual_value = actual.get(i).copied();
    }

    if !result.valid {
        warn!(
            entry = result.entry,
            position = ?result.mismatch_position,
            expected_length = result.expected_length,
            actual_length = result.actual_length,
            "jump entry does not follow the Collatz map"
        );
    }
    result
}

/// Verify every entry, in ascending entry order.
pub fn verify_table(table: &JumpTable) -> Vec<ValidationResult> {
    let results: Vec<ValidationResult> = table.iter().map(verify_entry).collect();
    let invalid = results.iter().filter(|r| !r.valid).count();
    info!(entries = results.len(), invalid, "jump table verified");
    results
}
