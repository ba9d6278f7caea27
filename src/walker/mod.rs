// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Sequence walker.
//!
//! One routine, [`walk`], serves both algorithms. Without a table it is the
//! naive reference walk. With a table it checks each value against the jump
//! entries and, on the first match, splices in the stored suffix and stops.
//!
//! # Invariants
//!
//! - The returned sequence starts at the input and ends at 1.
//! - `sequence.len() - 1` is the total stopping time.
//! - With a jump, total stopping time is `position + suffix_length - 1`.
//! - Input 1 never consults the table.
//! - The first match wins; there is no look-ahead.

pub mod analysis;
pub mod result;

pub use analysis::{analyze, analyze_naive};
pub use result::{Algorithm, Outcome, WalkResult};

use crate::config::WalkerConfig;
use crate::errors::CollatzError;
use crate::memo::JumpTable;
use crate::numeric::step;
use serde::Serialize;
use tracing::debug;

/// Lazy Collatz trajectory from a start value down to 1, inclusive.
///
/// Yields `Err` once if a step fails, then stops. Has no cap of its own;
/// callers bound it.
///
/// # Example
///
/// ```
/// use collatz_wormhole::walker::Trajectory;
///
/// let values: Result<Vec<u64>, _> = Trajectory::new(6).collect();
/// assert_eq!(values.unwrap(), vec![6, 3, 10, 5, 16, 8, 4, 2, 1]);
/// ```
#[derive(Debug, Clone)]
pub struct Trajectory {
    pending: Option<Result<u64, CollatzError>>,
}

impl Trajectory {
    pub fn new(start: u64) -> Self {
        Self {
            pending: Some(Ok(start)),
        }
    }
}

impl Iterator for Trajectory {
    type Item = Result<u64, CollatzError>;

    fn next(&mut self) -> Option<Self::Item> {
        let current = match self.pending.take()? {
            Ok(value) => value,
            Err(e) => return Some(Err(e)),
        };
        if current != 1 {
            self.pending = Some(step(current));
        }
        Some(Ok(current))
    }
}

/// Where and how a walk left the step-by-step path.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct JumpInfo {
    /// The matched jump-table key.
    pub entry: u64,
    /// Steps taken before the match (index of `entry` in the sequence).
    pub position: u64,
    /// Length of the stored suffix, including `entry` and the final 1.
    pub suffix_length: usize,
}

impl JumpInfo {
    /// Steps skipped by splicing in the suffix.
    pub fn saved_steps(&self) -> u64 {
        self.suffix_length as u64 - 1
    }
}

/// A completed walk.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Walk {
    pub sequence: Vec<u64>,
    pub jump: Option<JumpInfo>,
}

impl Walk {
    pub fn total_stopping_time(&self) -> u64 {
        self.sequence.len() as u64 - 1
    }
}

/// Walk from `start` to 1, optionally accelerated by `table`.
///
/// `start` is expected to be normalized already. The iteration cap bounds the
/// step-by-step portion only; a spliced suffix does not count against it.
///
/// # Errors
///
/// - [`CollatzError::OverflowRisk`] / [`CollatzError::InvalidDomain`] from the step function.
/// - [`CollatzError::SequenceTooLong`] once more than `config.iteration_cap` steps are taken.
///
/// # Example
///
/// ```
/// use collatz_wormhole::config::WalkerConfig;
/// use collatz_wormhole::memo::JumpTable;
/// use collatz_wormhole::walker::walk;
///
/// let table = JumpTable::embedded().unwrap();
/// let config = WalkerConfig::default();
///
/// let accelerated = walk(6, Some(&table), &config).unwrap();
/// let jump = accelerated.jump.unwrap();
/// assert_eq!((jump.entry, jump.position), (3, 1));
///
/// let naive = walk(6, None, &config).unwrap();
/// assert_eq!(naive.sequence, accelerated.sequence);
/// ```
pub fn walk(
    start: u64,
    table: Option<&JumpTable>,
    config: &WalkerConfig,
) -> Result<Walk, CollatzError> {
    let mut sequence = Vec::new();

    for (position, value) in Trajectory::new(start).enumerate() {
        let current = value?;
        if position > config.iteration_cap {
            return Err(CollatzError::SequenceTooLong {
                start,
                cap: config.iteration_cap,
            });
        }
        sequence.push(current);

        if current == 1 || (position == 0 && !config.lookup_input) {
            continue;
        }
        if let Some(entry) = table.and_then(|t| t.get(current)) {
            debug!(start, entry = current, position, "jump");
            sequence.extend_from_slice(&entry.suffix()[1..]);
            return Ok(Walk {
                sequence,
                jump: Some(JumpInfo {
                    entry: current,
                    position: position as u64,
                    suffix_length: entry.suffix_length(),
                }),
            });
        }
    }

    Ok(Walk {
        sequence,
        jump: None,
    })
}

/// The naive sequence from `start` to 1.
pub fn naive_sequence(start: u64, config: &WalkerConfig) -> Result<Vec<u64>, CollatzError> {
    walk(start, None, config).map(|w| w.sequence)
}
