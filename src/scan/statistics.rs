// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Range statistics
//!
//! Counters live in a single array: the fixed [`Counters`] first, then one
//! slot per [`ErrorKind`].

use crate::errors::{CollatzError, ErrorKind};
use crate::verify::SequenceComparison;
use serde::ser::{SerializeMap, SerializeStruct, Serializer};
use serde::Serialize;
use strum::{EnumCount, IntoEnumIterator};
use strum_macros::{EnumCount as EnumCountMacro, EnumIter};

#[derive(EnumCountMacro, EnumIter, Debug, Copy, Clone, PartialEq, Eq)]
#[repr(u8)]
pub enum Counters {
    Tested,
    Identical,
    Mismatched,
    Errored,
    JumpUsed,
    StepsSaved,
}

const COUNT: usize = Counters::COUNT + ErrorKind::COUNT;

/// An input whose comparison could not be completed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ErrorRecord {
    pub input: u64,
    pub error: CollatzError,
}

/// Aggregate of a range scan.
///
/// Partial statistics from separate shards combine with [`merge`](Self::merge);
/// [`finish`](Self::finish) sorts the records so the result does not depend
/// on the order in which inputs were seen.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RangeStatistics {
    max_n: u64,
    stats: [u64; COUNT],
    mismatches: Vec<SequenceComparison>,
    errors: Vec<ErrorRecord>,
}

impl RangeStatistics {
    pub fn new(max_n: u64) -> Self {
        Self {
            max_n,
            stats: [0; COUNT],
            mismatches: Vec::new(),
            errors: Vec::new(),
        }
    }

    fn increment_counter(&mut self, counter: Counters, by: u64) {
        self.stats[counter as usize] += by;
    }

    fn kind_slot(kind: ErrorKind) -> usize {
        Counters::COUNT + kind as usize
    }

    /// Fold one input's comparison into the totals.
    ///
    /// Jump usage and saved steps are counted only for identical sequences.
    pub fn record(&mut self, input: u64, comparison: Result<SequenceComparison, CollatzError>) {
        self.increment_counter(Counters::Tested, 1);
        match comparison {
            Ok(c) if c.identical => {
                self.increment_counter(Counters::Identical, 1);
                if let Some(jump) = c.jump {
                    self.increment_counter(Counters::JumpUsed, 1);
                    self.increment_counter(Counters::StepsSaved, jump.saved_steps());
                }
            }
            Ok(c) => {
                self.increment_counter(Counters::Mismatched, 1);
                self.mismatches.push(c);
            }
            Err(error) => {
                self.increment_counter(Counters::Errored, 1);
                self.stats[Self::kind_slot(error.kind())] += 1;
                self.errors.push(ErrorRecord { input, error });
            }
        }
    }

    /// Combine two partial aggregates of the same scan.
    pub fn merge(mut self, other: Self) -> Self {
        for (mine, theirs) in self.stats.iter_mut().zip(other.stats) {
            *mine += theirs;
        }
        self.mismatches.extend(other.mismatches);
        self.errors.extend(other.errors);
        self
    }

    /// Sort records by input.
    pub fn finish(&mut self) {
        self.mismatches.sort_by_key(|m| m.input);
        self.errors.sort_by_key(|e| e.input);
    }

    /// Get the current value of the specified counter.
    pub fn get(&self, counter: Counters) -> u64 {
        self.stats[counter as usize]
    }

    pub fn max_n(&self) -> u64 {
        self.max_n
    }

    pub fn tested_count(&self) -> u64 {
        self.get(Counters::Tested)
    }

    pub fn identical_count(&self) -> u64 {
        self.get(Counters::Identical)
    }

    pub fn mismatch_count(&self) -> u64 {
        self.get(Counters::Mismatched)
    }

    pub fn error_count(&self) -> u64 {
        self.get(Counters::Errored)
    }

    pub fn jump_used_count(&self) -> u64 {
        self.get(Counters::JumpUsed)
    }

    pub fn total_steps_saved(&self) -> u64 {
        self.get(Counters::StepsSaved)
    }

    pub fn errors_of_kind(&self, kind: ErrorKind) -> u64 {
        self.stats[Self::kind_slot(kind)]
    }

    /// Fraction of tested inputs that used a jump, 0 when nothing was tested.
    pub fn jump_usage_rate(&self) -> f64 {
        match self.tested_count() {
            0 => 0.0,
            tested => self.jump_used_count() as f64 / tested as f64,
        }
    }

    /// True when every tested input produced identical sequences.
    pub fn all_identical(&self) -> bool {
        self.identical_count() == self.tested_count()
    }

    pub fn mismatches(&self) -> &[SequenceComparison] {
        &self.mismatches
    }

    pub fn errors(&self) -> &[ErrorRecord] {
        &self.errors
    }
}

/// Error counts keyed by kind name, zero counts omitted.
struct KindCounts<'a>(&'a RangeStatistics);

impl Serialize for KindCounts<'_> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let nonzero: Vec<(&'static str, u64)> = ErrorKind::iter()
            .map(|kind| (kind.into(), self.0.errors_of_kind(kind)))
            .filter(|&(_, count)| count > 0)
            .collect();
        let mut map = serializer.serialize_map(Some(nonzero.len()))?;
        for (name, count) in nonzero {
            map.serialize_entry(name, &count)?;
        }
        map.end()
    }
}

impl Serialize for RangeStatistics {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut s = serializer.serialize_struct("RangeStatistics", 10)?;
        s.serialize_field("max_n", &self.max_n)?;
        s.serialize_field("tested", &self.tested_count())?;
        s.serialize_field("identical", &self.identical_count())?;
        s.serialize_field("mismatched", &self.mismatch_count())?;
        s.serialize_field("errored", &self.error_count())?;
        s.serialize_field("jump_used", &self.jump_used_count())?;
        s.serialize_field("total_steps_saved", &self.total_steps_saved())?;
        s.serialize_field("errors_by_kind", &KindCounts(self))?;
        s.serialize_field("mismatches", &self.mismatches)?;
        s.serialize_field("errors", &self.errors)?;
        s.end()
    }
}
