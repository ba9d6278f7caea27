// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Single-value analysis: normalize, walk, verify, package.
//!
//! Neither entry point fails; every problem is reported in the returned
//! [`WalkResult`].

use super::result::{Algorithm, Outcome, WalkResult};
use super::walk;
use crate::config::WalkerConfig;
use crate::memo::JumpTable;
use crate::numeric::{normalize, RawInput};
use crate::verify::verify_entry;
use tracing::warn;

/// Naive total stopping time of `raw`.
///
/// # Example
///
/// ```
/// use collatz_wormhole::config::WalkerConfig;
/// use collatz_wormhole::walker::{analyze_naive, Outcome};
///
/// let result = analyze_naive("27".into(), &WalkerConfig::default());
/// assert_eq!(result.outcome, Outcome::Complete);
/// assert_eq!(result.total_stopping_time, Some(111));
/// ```
pub fn analyze_naive(raw: RawInput, config: &WalkerConfig) -> WalkResult {
    let n = match normalize(raw, config.max_input) {
        Ok(n) => n,
        Err(e) => return WalkResult::failed(Algorithm::Naive, None, e),
    };

    match walk(n, None, config) {
        Ok(walked) => {
            let steps = walked.total_stopping_time();
            WalkResult {
                input: Some(n),
                algorithm: Algorithm::Naive,
                outcome: if n == 1 { Outcome::Trivial } else { Outcome::Complete },
                total_stopping_time: Some(steps),
                computed_steps: steps,
                saved_steps: 0,
                jump: None,
                validation: None,
                sequence: walked.sequence,
                error: None,
            }
        }
        Err(e) => WalkResult::failed(Algorithm::Naive, Some(n), e),
    }
}

/// Jump-accelerated total stopping time of `raw`.
///
/// Whenever a jump is used, the stored suffix is re-derived from its entry
/// value and compared element by element. A mismatch yields
/// [`Outcome::ValidationFailed`] with a
/// [`JumpTableInconsistency`](crate::errors::CollatzError::JumpTableInconsistency)
/// error; the jump-derived total is still reported.
///
/// # Example
///
/// ```
/// use collatz_wormhole::config::WalkerConfig;
/// use collatz_wormhole::memo::JumpTable;
/// use collatz_wormhole::walker::{analyze, Outcome};
///
/// let table = JumpTable::embedded().unwrap();
/// let result = analyze("6".into(), &table, &WalkerConfig::default());
/// assert_eq!(result.outcome, Outcome::JumpUsed);
/// assert_eq!(result.jump_entry(), Some(3));
/// assert_eq!(result.total_stopping_time, Some(8));
/// ```
pub fn analyze(raw: RawInput, table: &JumpTable, config: &WalkerConfig) -> WalkResult {
    let n = match normalize(raw, config.max_input) {
        Ok(n) => n,
        Err(e) => return WalkResult::failed(Algorithm::Accelerated, None, e),
    };

    let walked = match walk(n, Some(table), config) {
        Ok(walked) => walked,
        Err(e) => return WalkResult::failed(Algorithm::Accelerated, Some(n), e),
    };
    let total = walked.total_stopping_time();

    let mut result = WalkResult {
        input: Some(n),
        algorithm: Algorithm::Accelerated,
        outcome: Outcome::NoJump,
        total_stopping_time: Some(total),
        computed_steps: total,
        saved_steps: 0,
        jump: walked.jump,
        validation: None,
        sequence: walked.sequence,
        error: None,
    };

    if n == 1 {
        result.outcome = Outcome::Trivial;
        return result;
    }

    // A jump implies the entry is present; the lookup cannot miss.
    let Some((jump, entry)) = walked.jump.and_then(|j| table.get(j.entry).map(|e| (j, e))) else {
        return result;
    };

    result.computed_steps = jump.position;
    result.saved_steps = jump.saved_steps();

    let validation = verify_entry(entry);
    if validation.valid {
        result.outcome = Outcome::JumpUsed;
    } else {
        warn!(input = n, entry = jump.entry, "jump entry failed verification");
        result.outcome = Outcome::ValidationFailed;
        result.error = validation.to_error();
    }
    result.validation = Some(validation);
    result
}
