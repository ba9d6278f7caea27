// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Integration tests for the jump table and its verification.
//!
//! These tests validate that:
//! - The shipped dataset loads from disk and from the embedded copy alike
//! - Every shipped entry follows the Collatz map
//! - A tampered entry is caught by analysis, comparison and scan

mod common;

use collatz_wormhole::errors::ErrorKind;
use collatz_wormhole::verify::verify_entry;
use collatz_wormhole::{AnalysisContext, JumpTable, Outcome, TableError, WalkerConfig};
use common::{corrupted_table, reference_stopping_time, tampered_suffix};
use std::sync::Arc;

const DATASET: &str = concat!(env!("CARGO_MANIFEST_DIR"), "/data/jump_table.json");

#[test]
fn test_dataset_file_matches_embedded() {
    let from_disk = JumpTable::from_path(DATASET).unwrap();
    assert_eq!(from_disk, JumpTable::embedded().unwrap());
}

#[test]
fn test_missing_file() {
    let err = JumpTable::from_path("/nonexistent/jump_table.json").unwrap_err();
    assert!(matches!(err, TableError::Io { .. }));
    assert!(err.to_string().contains("/nonexistent/jump_table.json"));
}

#[test]
fn test_every_entry_is_consistent() {
    let table = JumpTable::embedded().unwrap();
    for entry in table.iter() {
        let result = verify_entry(entry);
        assert!(result.valid, "entry {}", entry.entry());
        assert_eq!(
            entry.suffix_length() as u64 - 1,
            reference_stopping_time(entry.entry()),
            "entry {}",
            entry.entry()
        );
    }
}

#[test]
fn test_metadata_is_carried() {
    let table = JumpTable::embedded().unwrap();
    let entry = table.get(121).unwrap();
    assert_eq!(entry.mr(), Some(60));
    assert_eq!(entry.pseudocycle(), Some(&[121, 122][..]));

    let anomaly = table.get(1731).unwrap();
    assert!(!anomaly.pseudocycle_conforms());
    assert_eq!(anomaly.pseudocycle(), Some(&[1735, 1736][..]));
}

#[test]
fn test_tampered_entry_fails_validation() {
    // 27 meets 121 at step 16.
    let table = corrupted_table(121, tampered_suffix(121, 3));
    let ctx = AnalysisContext::with_table(Arc::new(table));

    let result = ctx.analyze(27u64);
    assert_eq!(result.outcome, Outcome::ValidationFailed);
    assert!(!result.is_ok());
    assert_eq!(result.total_stopping_time, Some(111));
    assert_eq!(
        result.error.as_ref().map(|e| e.kind()),
        Some(ErrorKind::JumpTableInconsistency)
    );
    let validation = result.validation.unwrap();
    assert_eq!(validation.mismatch_position, Some(3));
    assert_eq!(validation.expected_value, Some(92));
    assert_eq!(validation.actual_value, Some(91));

    let comparison = ctx.compare(27u64).unwrap();
    assert!(!comparison.identical);
    let difference = comparison.first_difference.unwrap();
    assert_eq!(difference.position, 19);
    assert_eq!(difference.naive_value, Some(91));
    assert_eq!(difference.accelerated_value, Some(92));

    assert_eq!(ctx.verify_table().iter().filter(|r| !r.valid).count(), 1);
}

#[test]
fn test_tampered_entry_shows_in_scan() {
    let table = corrupted_table(121, tampered_suffix(121, 3));
    let config = WalkerConfig::builder().parallel(false).build();
    let stats = AnalysisContext::with_config(Arc::new(table), config).scan(100);

    assert!(!stats.all_identical());
    assert!(stats.mismatches().iter().any(|m| m.input == 27));
    assert!(stats.mismatches().iter().all(|m| m.jump.map(|j| j.entry) == Some(121)));
    assert_eq!(stats.tested_count(), 100);
    assert_eq!(
        stats.identical_count() + stats.mismatch_count(),
        stats.tested_count()
    );
}

#[test]
fn test_empty_table_degenerates_to_naive() {
    let ctx = AnalysisContext::with_table(Arc::new(JumpTable::empty()));
    let result = ctx.analyze(27u64);
    assert_eq!(result.outcome, Outcome::NoJump);
    assert_eq!(result.total_stopping_time, Some(111));

    let stats = ctx.scan(50);
    assert!(stats.all_identical());
    assert_eq!(stats.jump_used_count(), 0);
}
