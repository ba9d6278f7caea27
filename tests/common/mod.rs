// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Common test utilities shared across integration tests.

#![allow(dead_code)]

use collatz_wormhole::{AnalysisContext, JumpEntry, JumpTable, WalkerConfig};
use std::sync::Arc;

/// Context over the embedded table with default configuration.
pub fn embedded_context() -> AnalysisContext {
    AnalysisContext::new().expect("embedded jump table loads")
}

/// Context over the embedded table with the given configuration.
pub fn context_with(config: WalkerConfig) -> AnalysisContext {
    let table = JumpTable::embedded().expect("embedded jump table loads");
    AnalysisContext::with_config(Arc::new(table), config)
}

/// The embedded table with one entry's suffix replaced.
///
/// The replacement must still start at `entry` and end at 1.
pub fn corrupted_table(entry: u64, suffix: Vec<u64>) -> JumpTable {
    let table = JumpTable::embedded().expect("embedded jump table loads");
    let replacement = JumpEntry::new(entry, suffix).expect("well-shaped suffix");
    JumpTable::from_entries(table.iter().cloned().chain(std::iter::once(replacement)))
}

/// The embedded suffix for `entry` with the value at `index` bumped by one.
pub fn tampered_suffix(entry: u64, index: usize) -> Vec<u64> {
    let table = JumpTable::embedded().expect("embedded jump table loads");
    let mut suffix = table.get(entry).expect("entry present").suffix().to_vec();
    suffix[index] += 1;
    suffix
}

/// Total stopping time by the textbook loop, in u128 so it cannot overflow.
pub fn reference_stopping_time(n: u64) -> u64 {
    let mut n = n as u128;
    let mut steps = 0;
    while n != 1 {
        n = if n % 2 == 0 { n / 2 } else { 3 * n + 1 };
        steps += 1;
    }
    steps
}
