// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Analysis context combining the shared jump table with walker policy.
//!
//! The context is the public entry point. It holds:
//! - Tier 1 (MEMO): the immutable [`JumpTable`], behind an `Arc`
//! - Per-call policy: a [`WalkerConfig`]
//!
//! Every call builds its own sequences and results, so one context can serve
//! any number of threads, and cloning it only bumps the table's reference
//! count.

use crate::config::WalkerConfig;
use crate::errors::CollatzError;
use crate::memo::{JumpTable, TableError};
use crate::numeric::{normalize, RawInput};
use crate::scan::{scan, RangeStatistics};
use crate::verify::{compare_sequences, verify_table, SequenceComparison, ValidationResult};
use crate::walker::{analyze, analyze_naive, WalkResult};
use std::sync::Arc;

/// Analysis context: shared table plus configuration.
///
/// # Memory Model
///
/// ```text
/// AnalysisContext {
///     table: Arc<JumpTable>,   // Tier 1: immutable, shared
///     config: WalkerConfig,    // Copy
/// }
/// ```
///
/// # Example
///
/// ```
/// use collatz_wormhole::context::AnalysisContext;
/// use collatz_wormhole::walker::Outcome;
///
/// let ctx = AnalysisContext::new().unwrap();
/// let result = ctx.analyze(27);
/// assert_eq!(result.outcome, Outcome::JumpUsed);
/// assert_eq!(result.total_stopping_time, Some(111));
///
/// let stats = ctx.scan(100);
/// assert_eq!(stats.identical_count(), 100);
/// ```
#[derive(Debug, Clone)]
pub struct AnalysisContext {
    table: Arc<JumpTable>,
    config: WalkerConfig,
}

impl AnalysisContext {
    /// Context over the embedded dataset with default configuration.
    pub fn new() -> Result<Self, TableError> {
        Ok(Self::with_table(Arc::new(JumpTable::embedded()?)))
    }

    /// Context over an existing table with default configuration.
    ///
    /// This is useful for contexts that share one table.
    pub fn with_table(table: Arc<JumpTable>) -> Self {
        Self::with_config(table, WalkerConfig::default())
    }

    pub fn with_config(table: Arc<JumpTable>, config: WalkerConfig) -> Self {
        Self { table, config }
    }

    pub fn table(&self) -> &JumpTable {
        &self.table
    }

    /// A new handle on the shared table.
    pub fn shared_table(&self) -> Arc<JumpTable> {
        Arc::clone(&self.table)
    }

    pub fn config(&self) -> &WalkerConfig {
        &self.config
    }

    /// Jump-accelerated analysis of one value; see [`analyze`].
    pub fn analyze(&self, raw: impl Into<RawInput>) -> WalkResult {
        analyze(raw.into(), &self.table, &self.config)
    }

    /// Naive analysis of one value; see [`analyze_naive`].
    pub fn analyze_naive(&self, raw: impl Into<RawInput>) -> WalkResult {
        analyze_naive(raw.into(), &self.config)
    }

    /// Normalize `raw`, then compare its naive and accelerated sequences.
    pub fn compare(&self, raw: impl Into<RawInput>) -> Result<SequenceComparison, CollatzError> {
        let n = normalize(raw.into(), self.config.max_input)?;
        compare_sequences(n, &self.table, &self.config)
    }

    /// Compare both walks for every value in `1..=max_n`.
    pub fn scan(&self, max_n: u64) -> RangeStatistics {
        scan(max_n, &self.table, &self.config)
    }

    /// Re-derive every table entry.
    pub fn verify_table(&self) -> Vec<ValidationResult> {
        verify_table(&self.table)
    }
}
