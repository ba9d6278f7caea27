// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Jump table: entry value → known suffix to 1.
//!
//! # Dataset format
//!
//! ```json
//! {
//!   "3": { "suffix": [3, 10, 5, 16, 8, 4, 2, 1], "mr": 1, "pseudocycle": [3, 4] },
//!   "6": { "suffix": [6, 3, 10, 5, 16, 8, 4, 2, 1] }
//! }
//! ```
//!
//! `mr` and `pseudocycle` are optional metadata carried verbatim.
//!
//! # Trust
//!
//! Loading checks shape only: non-empty suffix, first element equal to the
//! key, last element 1. Whether each suffix actually follows the Collatz map
//! is checked at use time by [`verify_entry`](crate::verify::verify_entry).

use serde::Deserialize;
use std::collections::BTreeMap;
use std::path::Path;
use thiserror::Error;
use tracing::{info, warn};

/// Errors raised while loading a jump-table dataset.
#[derive(Debug, Error)]
pub enum TableError {
    #[error("cannot read jump table {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("malformed jump table: {0}")]
    Json(#[from] serde_json::Error),

    #[error("jump entry {entry} has an empty suffix")]
    EmptySuffix { entry: u64 },

    #[error("jump entry {entry} suffix starts at {first}")]
    EntryMismatch { entry: u64, first: u64 },

    #[error("jump entry {entry} suffix ends at {last}, not 1")]
    DoesNotReachOne { entry: u64, last: u64 },
}

/// Dataset row as it appears on disk.
#[derive(Debug, Deserialize)]
struct RawEntry {
    suffix: Vec<u64>,
    #[serde(default)]
    mr: Option<u64>,
    #[serde(default)]
    pseudocycle: Option<Vec<u64>>,
}

/// One precomputed suffix, keyed by its first value.
///
/// Immutable once built. The suffix is guaranteed non-empty, to start with
/// `entry` and to end with 1; nothing else is assumed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct JumpEntry {
    entry: u64,
    suffix: Vec<u64>,
    mr: Option<u64>,
    pseudocycle: Option<Vec<u64>>,
}

impl JumpEntry {
    /// Build an entry, checking the suffix shape.
    pub fn new(entry: u64, suffix: Vec<u64>) -> Result<Self, TableError> {
        Self::with_metadata(entry, suffix, None, None)
    }

    pub fn with_metadata(
        entry: u64,
        suffix: Vec<u64>,
        mr: Option<u64>,
        pseudocycle: Option<Vec<u64>>,
    ) -> Result<Self, TableError> {
        match (suffix.first(), suffix.last()) {
            (None, _) | (_, None) => return Err(TableError::EmptySuffix { entry }),
            (Some(&first), _) if first != entry => {
                return Err(TableError::EntryMismatch { entry, first })
            }
            (_, Some(&last)) if last != 1 => {
                return Err(TableError::DoesNotReachOne { entry, last })
            }
            _ => {}
        }
        Ok(Self {
            entry,
            suffix,
            mr,
            pseudocycle,
        })
    }

    #[inline]
    pub fn entry(&self) -> u64 {
        self.entry
    }

    /// The stored sequence from `entry` down to 1, inclusive.
    #[inline]
    pub fn suffix(&self) -> &[u64] {
        &self.suffix
    }

    /// Number of values in the suffix (steps saved plus one).
    #[inline]
    pub fn suffix_length(&self) -> usize {
        self.suffix.len()
    }

    pub fn mr(&self) -> Option<u64> {
        self.mr
    }

    pub fn pseudocycle(&self) -> Option<&[u64]> {
        self.pseudocycle.as_deref()
    }

    /// Whether `pseudocycle` points at this entry's own neighbour.
    ///
    /// The dataset pairs odd `n` with `[n, n+1]` and even `n` with `[n, n-1]`;
    /// entry 1 is paired with itself. Entries without the field conform.
    pub fn pseudocycle_conforms(&self) -> bool {
        let Some(pair) = self.pseudocycle.as_deref() else {
            return true;
        };
        let n = self.entry;
        let neighbour = match n {
            1 => 1,
            _ if n % 2 == 1 => n + 1,
            _ => n - 1,
        };
        *pair == [n, neighbour]
    }
}

/// Immutable map from entry value to [`JumpEntry`].
///
/// Built once and shared read-only, usually behind an `Arc`. Iteration is in
/// ascending entry order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct JumpTable {
    entries: BTreeMap<u64, JumpEntry>,
}

impl JumpTable {
    /// An empty table. Accelerated walks over it degenerate to naive walks.
    pub fn empty() -> Self {
        Self::default()
    }

    /// Build a table from already-constructed entries.
    ///
    /// Later entries with a duplicate key replace earlier ones.
    pub fn from_entries(entries: impl IntoIterator<Item = JumpEntry>) -> Self {
        Self {
            entries: entries.into_iter().map(|e| (e.entry, e)).collect(),
        }
    }

    /// Parse a dataset in the JSON format described in the module docs.
    pub fn from_json_str(json: &str) -> Result<Self, TableError> {
        let raw: BTreeMap<u64, RawEntry> = serde_json::from_str(json)?;
        let entries = raw
            .into_iter()
            .map(|(entry, row)| JumpEntry::with_metadata(entry, row.suffix, row.mr, row.pseudocycle))
            .collect::<Result<Vec<_>, _>>()?;
        let table = Self::from_entries(entries);

        for entry in table.pseudocycle_anomalies() {
            warn!(
                entry = entry.entry(),
                pseudocycle = ?entry.pseudocycle(),
                "pseudocycle does not reference the entry's neighbour"
            );
        }
        info!(entries = table.len(), "jump table loaded");
        Ok(table)
    }

    /// Read and parse a dataset file.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, TableError> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path).map_err(|source| TableError::Io {
            path: path.display().to_string(),
            source,
        })?;
        Self::from_json_str(&json)
    }

    /// The dataset compiled into the crate.
    pub fn embedded() -> Result<Self, TableError> {
        Self::from_json_str(super::dataset::JUMP_TABLE_JSON)
    }

    #[inline]
    pub fn contains(&self, n: u64) -> bool {
        self.entries.contains_key(&n)
    }

    #[inline]
    pub fn get(&self, n: u64) -> Option<&JumpEntry> {
        self.entries.get(&n)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &JumpEntry> {
        self.entries.values()
    }

    /// Entries whose `pseudocycle` metadata breaks the dataset's pattern.
    ///
    /// Reported only; metadata is never rewritten.
    pub fn pseudocycle_anomalies(&self) -> Vec<&JumpEntry> {
        self.iter().filter(|e| !e.pseudocycle_conforms()).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_entry_shape_checks() {
        assert!(JumpEntry::new(3, vec![3, 10, 5, 16, 8, 4, 2, 1]).is_ok());
        assert!(JumpEntry::new(1, vec![1]).is_ok());

        assert!(matches!(
            JumpEntry::new(3, vec![]),
            Err(TableError::EmptySuffix { entry: 3 })
        ));
        assert!(matches!(
            JumpEntry::new(3, vec![5, 16, 8, 4, 2, 1]),
            Err(TableError::EntryMismatch { entry: 3, first: 5 })
        ));
        assert!(matches!(
            JumpEntry::new(3, vec![3, 10, 5]),
            Err(TableError::DoesNotReachOne { entry: 3, last: 5 })
        ));
    }

    #[test]
    fn test_from_json() {
        let table = JumpTable::from_json_str(
            r#"{"3": {"suffix": [3,10,5,16,8,4,2,1], "mr": 1, "pseudocycle": [3,4]},
                "6": {"suffix": [6,3,10,5,16,8,4,2,1]}}"#,
        )
        .unwrap();

        assert_eq!(table.len(), 2);
        assert!(table.contains(3));
        assert!(table.contains(6));
        assert!(!table.contains(5));

        let three = table.get(3).unwrap();
        assert_eq!(three.suffix_length(), 8);
        assert_eq!(three.mr(), Some(1));
        assert_eq!(three.pseudocycle(), Some(&[3, 4][..]));
        assert_eq!(table.get(6).unwrap().mr(), None);
    }

    #[test]
    fn test_from_json_rejects_bad_rows() {
        assert!(matches!(
            JumpTable::from_json_str(r#"{"4": {"suffix": [4,2]}}"#),
            Err(TableError::DoesNotReachOne { entry: 4, last: 2 })
        ));
        assert!(matches!(
            JumpTable::from_json_str(r#"{"4": {"suffix": []}}"#),
            Err(TableError::EmptySuffix { entry: 4 })
        ));
        assert!(matches!(
            JumpTable::from_json_str(r#"{"four": {"suffix": [4,2,1]}}"#),
            Err(TableError::Json(_))
        ));
    }

    #[test]
    fn test_iteration_is_ascending() {
        let table = JumpTable::from_entries(vec![
            JumpEntry::new(6, vec![6, 3, 10, 5, 16, 8, 4, 2, 1]).unwrap(),
            JumpEntry::new(3, vec![3, 10, 5, 16, 8, 4, 2, 1]).unwrap(),
        ]);
        let keys: Vec<u64> = table.iter().map(JumpEntry::entry).collect();
        assert_eq!(keys, vec![3, 6]);
    }

    #[test]
    fn test_pseudocycle_conformance() {
        let odd = JumpEntry::with_metadata(3, vec![3, 10, 5, 16, 8, 4, 2, 1], Some(1), Some(vec![3, 4]));
        assert!(odd.unwrap().pseudocycle_conforms());

        let even = JumpEntry::with_metadata(6, vec![6, 3, 10, 5, 16, 8, 4, 2, 1], Some(2), Some(vec![6, 5]));
        assert!(even.unwrap().pseudocycle_conforms());

        let off = JumpEntry::with_metadata(3, vec![3, 10, 5, 16, 8, 4, 2, 1], None, Some(vec![7, 8]));
        assert!(!off.unwrap().pseudocycle_conforms());
    }

    #[test]
    fn test_embedded_table() {
        let table = JumpTable::embedded().unwrap();
        assert_eq!(table.len(), 42);
        assert!(table.contains(3));
        assert!(table.contains(7287));

        let anomalies: Vec<u64> = table
            .pseudocycle_anomalies()
            .into_iter()
            .map(JumpEntry::entry)
            .collect();
        assert_eq!(anomalies, vec![1731]);
    }
}
