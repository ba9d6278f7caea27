// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Full-sequence comparison of the naive and accelerated walks.

use crate::config::WalkerConfig;
use crate::errors::CollatzError;
use crate::memo::JumpTable;
use crate::walker::{walk, JumpInfo};
use serde::Serialize;

/// First position where two sequences disagree.
///
/// A `None` value means that sequence had already ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Difference {
    pub position: usize,
    pub naive_value: Option<u64>,
    pub accelerated_value: Option<u64>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SequenceComparison {
    pub input: u64,
    pub identical: bool,
    pub naive_length: usize,
    pub accelerated_length: usize,
    pub jump: Option<JumpInfo>,
    pub first_difference: Option<Difference>,
}

/// Walk `n` both ways and compare the full sequences.
///
/// `n` is expected to be normalized already.
///
/// # Errors
///
/// Any error from either walk.
pub fn compare_sequences(
    n: u64,
    table: &JumpTable,
    config: &WalkerConfig,
) -> Result<SequenceComparison, CollatzError> {
    let naive = walk(n, None, config)?;
    let accelerated = walk(n, Some(table), config)?;

    let first_difference = first_difference(&naive.sequence, &accelerated.sequence);
    Ok(SequenceComparison {
        input: n,
        identical: first_difference.is_none(),
        naive_length: naive.sequence.len(),
        accelerated_length: accelerated.sequence.len(),
        jump: accelerated.jump,
        first_difference,
    })
}

fn first_difference(naive: &[u64], accelerated: &[u64]) -> Option<Difference> {
    let longest = naive.len().max(accelerated.len());
    (0..longest)
        .find(|&i| naive.get(i) != accelerated.get(i))
        .map(|position| Difference {
            position,
            naive_value: naive.get(position).copied(),
            accelerated_value: accelerated.get(position).copied(),
        })
}
