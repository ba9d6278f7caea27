// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Range scan: compare naive and accelerated walks for every `n` in `1..=max_n`.
//!
//! Inputs are independent, so the range is split across rayon workers, each
//! folding into its own [`RangeStatistics`] before the partial results are
//! merged. The merged result is sorted, so it is the same whatever the
//! scheduling.

pub mod statistics;

pub use statistics::{Counters, ErrorRecord, RangeStatistics};

use crate::config::WalkerConfig;
use crate::errors::CollatzError;
use crate::memo::JumpTable;
use crate::numeric::{normalize, RawInput};
use crate::verify::{compare_sequences, SequenceComparison};
use rayon::prelude::*;
use tracing::{debug, info};

fn check(n: u64, table: &JumpTable, config: &WalkerConfig) -> Result<SequenceComparison, CollatzError> {
    let n = normalize(RawInput::from(n), config.max_input)?;
    let comparison = compare_sequences(n, table, config)?;
    if !comparison.identical {
        debug!(n, difference = ?comparison.first_difference, "sequences differ");
    }
    Ok(comparison)
}

/// Scan `1..=max_n`. `max_n == 0` yields empty statistics.
///
/// Inputs above `config.max_input` are recorded as
/// [`OutOfRange`](CollatzError::OutOfRange) errors.
///
/// # Example
///
/// ```
/// use collatz_wormhole::config::WalkerConfig;
/// use collatz_wormhole::memo::JumpTable;
/// use collatz_wormhole::scan::scan;
///
/// let table = JumpTable::embedded().unwrap();
/// let stats = scan(10, &table, &WalkerConfig::default());
/// assert_eq!(stats.tested_count(), 10);
/// assert!(stats.all_identical());
/// ```
pub fn scan(max_n: u64, table: &JumpTable, config: &WalkerConfig) -> RangeStatistics {
    info!(max_n, parallel = config.parallel, "scan started");

    let mut stats = if config.parallel {
        (1..=max_n)
            .into_par_iter()
            .fold(
                || RangeStatistics::new(max_n),
                |mut acc, n| {
                    acc.record(n, check(n, table, config));
                    acc
                },
            )
            .reduce(|| RangeStatistics::new(max_n), RangeStatistics::merge)
    } else {
        (1..=max_n).fold(RangeStatistics::new(max_n), |mut acc, n| {
            acc.record(n, check(n, table, config));
            acc
        })
    };
    stats.finish();

    info!(
        tested = stats.tested_count(),
        identical = stats.identical_count(),
        mismatched = stats.mismatch_count(),
        errored = stats.error_count(),
        jump_used = stats.jump_used_count(),
        steps_saved = stats.total_steps_saved(),
        "scan finished"
    );
    stats
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::ErrorKind;
    use crate::memo::JumpEntry;

    #[test]
    fn test_scan_ten() {
        let table = JumpTable::embedded().unwrap();
        let stats = scan(10, &table, &WalkerConfig::default());
        assert_eq!(stats.max_n(), 10);
        assert_eq!(stats.tested_count(), 10);
        assert_eq!(stats.identical_count(), 10);
        // 6 jumps via 3, 9 via 14.
        assert_eq!(stats.jump_used_count(), 2);
        assert_eq!(stats.total_steps_saved(), 24);
    }

    #[test]
    fn test_scan_zero() {
        let table = JumpTable::embedded().unwrap();
        let stats = scan(0, &table, &WalkerConfig::default());
        assert_eq!(stats, RangeStatistics::new(0));
        assert!(stats.all_identical());
    }

    #[test]
    fn test_parallel_matches_sequential() {
        let table = JumpTable::embedded().unwrap();
        let sequential = WalkerConfig::builder().parallel(false).build();
        assert_eq!(
            scan(300, &table, &WalkerConfig::default()),
            scan(300, &table, &sequential)
        );
    }

    #[test]
    fn test_corrupted_entry_shows_as_mismatch() {
        let table = JumpTable::from_entries(vec![
            JumpEntry::new(5, vec![5, 16, 4, 2, 1]).unwrap(),
        ]);
        let stats = scan(10, &table, &WalkerConfig::default());
        // Every input that reaches 5 after at least one step.
        let inputs: Vec<u64> = stats.mismatches().iter().map(|m| m.input).collect();
        assert_eq!(inputs, vec![3, 6, 7, 9, 10]);
        assert_eq!(stats.mismatch_count(), 5);
        assert_eq!(stats.identical_count(), 5);
        assert_eq!(stats.jump_used_count(), 0);
    }

    #[test]
    fn test_inputs_above_ceiling_are_errors() {
        let table = JumpTable::embedded().unwrap();
        let config = WalkerConfig::builder().max_input(8).build();
        let stats = scan(10, &table, &config);
        assert_eq!(stats.error_count(), 2);
        assert_eq!(stats.errors_of_kind(ErrorKind::OutOfRange), 2);
        let inputs: Vec<u64> = stats.errors().iter().map(|e| e.input).collect();
        assert_eq!(inputs, vec![9, 10]);
    }
}
