// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Plain-text rendering of analysis, scan and verification results.
//!
//! Renderers only read structured results; nothing here computes. Every
//! function returns an owned `String` and never prints.

use crate::scan::RangeStatistics;
use crate::verify::ValidationResult;
use crate::walker::{Outcome, WalkResult};
use std::fmt::Write;

const RULE_WIDTH: usize = 100;

fn rule(out: &mut String, c: char) {
    let _ = writeln!(out, "{}", c.to_string().repeat(RULE_WIDTH));
}

fn heading(out: &mut String, title: &str) {
    rule(out, '=');
    let _ = writeln!(out, "  {}", title);
    rule(out, '=');
}

fn join(values: &[u64]) -> String {
    values
        .iter()
        .map(u64::to_string)
        .collect::<Vec<_>>()
        .join("  ")
}

fn percent(part: u64, whole: u64) -> f64 {
    match whole {
        0 => 0.0,
        _ => 100.0 * part as f64 / whole as f64,
    }
}

/// Full report for one value: sequences, jump, validation, efficiency.
///
/// `naive` and `accelerated` are expected to be analyses of the same input.
pub fn analysis_report(naive: &WalkResult, accelerated: &WalkResult) -> String {
    let mut out = String::new();
    heading(&mut out, "COLLATZ TOTAL STOPPING TIME PREDICTOR");

    let failed = [naive, accelerated]
        .into_iter()
        .find_map(|r| r.error.as_ref().filter(|_| r.outcome == Outcome::Error));
    if let Some(error) = failed {
        let _ = writeln!(out, "\n[!] ERROR: {}", error);
        return out;
    }

    if let Some(n) = accelerated.input {
        let _ = writeln!(out, "\n[*] ANALYZING n = {}", n);
    }
    out.push_str(&sequences_section(naive, accelerated));
    out.push_str(&jump_section(accelerated));
    if let Some(validation) = &accelerated.validation {
        out.push_str(&validation_report(validation));
    }
    out.push_str(&efficiency_table(naive, accelerated));
    out
}

fn sequences_section(naive: &WalkResult, accelerated: &WalkResult) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "\n\t= SEQUENCES ANALYSIS:");
    let _ = writeln!(
        out,
        "\n\t   - Standard sequence ({} elements and {} steps):",
        naive.sequence.len(),
        naive.sequence.len().saturating_sub(1)
    );
    let _ = writeln!(out, "\t   {}", join(&naive.sequence));

    match accelerated.jump {
        Some(jump) => {
            let len = accelerated.sequence.len();
            let split = (jump.position as usize).min(len);
            let (computed, spliced) = accelerated.sequence.split_at(split);
            let _ = writeln!(
                out,
                "\n\t   - Predicted sequence ({} elements and {} steps):",
                len,
                len.saturating_sub(1)
            );
            let _ = writeln!(out, "\t   {} | {}", join(computed), join(spliced));
        }
        None if accelerated.outcome == Outcome::Trivial => {
            let _ = writeln!(out, "\n\t   - Predicted sequence: No jump needed for trivial cycle");
        }
        None => {
            let _ = writeln!(out, "\n\t   - Predicted sequence: No jump available before trivial cycle");
        }
    }
    out
}

fn jump_section(accelerated: &WalkResult) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "\n\t= JUMP DETECTION:\n");
    match accelerated.jump {
        Some(jump) => {
            let _ = writeln!(
                out,
                "\t   - The jump entry takes the value {} and it is reached at step {}",
                jump.entry, jump.position
            );
            if jump.position == 0 {
                let _ = writeln!(out, "\t   - n is itself a jump entry");
            }
            let _ = writeln!(
                out,
                "\t   - The stored suffix has {} elements ({} steps)",
                jump.suffix_length,
                jump.saved_steps()
            );
        }
        None => {
            let _ = writeln!(out, "\t   - No jump entry met; every step was computed");
        }
    }
    out
}

/// Outcome of verifying one jump entry.
pub fn validation_report(validation: &ValidationResult) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "\n\t= JUMP VALIDATION:\n");
    if validation.valid {
        let _ = writeln!(out, "\t   PASSED: stored suffix of {} matches the standard sequence", validation.entry);
        return out;
    }
    if let Some(error) = validation.to_error() {
        let _ = writeln!(out, "\t   FAILED: {}", error);
    }
    if validation.expected_length != validation.actual_length {
        let _ = writeln!(
            out,
            "\t   - Stored length is {} but standard length is {}",
            validation.expected_length, validation.actual_length
        );
    }
    if let (Some(expected), Some(actual)) = (validation.expected_value, validation.actual_value) {
        let _ = writeln!(
            out,
            "\t   - Stored value is {} but standard value is {}",
            expected, actual
        );
    }
    out
}

/// Side-by-side step accounting of the two algorithms.
pub fn efficiency_table(naive: &WalkResult, accelerated: &WalkResult) -> String {
    let mut out = String::new();
    let _ = writeln!(out);
    heading(&mut out, "COMPUTATIONAL EFFICIENCY TABLE");
    let _ = writeln!(
        out,
        "{:<20} {:<12} {:<10} {:<10} {:<12}",
        "Method", "Total Steps", "Computed", "Saved", "% Saved"
    );
    rule(&mut out, '-');

    for (label, result) in [("Standard", naive), ("Accelerated", accelerated)] {
        let total = result.total_stopping_time.unwrap_or(0);
        let _ = writeln!(
            out,
            "{:<20} {:>11} {:>9} {:>7} {:>11.3}%",
            label,
            total,
            result.computed_steps,
            result.saved_steps,
            percent(result.saved_steps, total)
        );
    }
    rule(&mut out, '=');
    out
}

/// Summary of a range scan.
pub fn scan_report(stats: &RangeStatistics) -> String {
    let mut out = String::new();
    heading(&mut out, "SEQUENCE EQUIVALENCE SUMMARY");
    let tested = stats.tested_count();
    let _ = writeln!(out, "Numbers tested: {}", tested);
    let _ = writeln!(
        out,
        "Sequences identical: {} ({:.3}%)",
        stats.identical_count(),
        percent(stats.identical_count(), tested)
    );
    let _ = writeln!(
        out,
        "Sequences different: {} ({:.3}%)",
        stats.mismatch_count(),
        percent(stats.mismatch_count(), tested)
    );
    let _ = writeln!(out, "Errors: {}", stats.error_count());

    if !stats.mismatches().is_empty() {
        let _ = writeln!(out, "\nRegistered differences:");
        for m in stats.mismatches() {
            match m.first_difference {
                Some(d) => {
                    let _ = writeln!(
                        out,
                        "  n={} differs at position {} (standard {}, accelerated {})",
                        m.input,
                        d.position,
                        d.naive_value.map_or_else(|| "-".to_string(), |v| v.to_string()),
                        d.accelerated_value.map_or_else(|| "-".to_string(), |v| v.to_string())
                    );
                }
                None => {
                    let _ = writeln!(out, "  n={} differs", m.input);
                }
            }
        }
    }

    if !stats.errors().is_empty() {
        let _ = writeln!(out, "\nRegistered errors:");
        for e in stats.errors() {
            let _ = writeln!(out, "  n={}: {}", e.input, e.error);
        }
    }

    if stats.jump_used_count() > 0 {
        let _ = writeln!(out, "\nJump usage:");
        let _ = writeln!(
            out,
            "  Inputs using a jump: {} out of {} ({:.3}%)",
            stats.jump_used_count(),
            tested,
            100.0 * stats.jump_usage_rate()
        );
        let _ = writeln!(out, "  Total steps saved: {}", stats.total_steps_saved());
        let _ = writeln!(
            out,
            "  Average steps saved per jump: {:.3}",
            stats.total_steps_saved() as f64 / stats.jump_used_count() as f64
        );
    }

    if stats.all_identical() {
        let _ = writeln!(out, "\nSUCCESS: All sequences are identical!");
    }
    rule(&mut out, '=');
    out
}

/// One line per table entry, then a pass/fail count.
pub fn table_report(results: &[ValidationResult]) -> String {
    let mut out = String::new();
    heading(&mut out, "JUMP TABLE VERIFICATION");
    for result in results {
        let status = if result.valid { "PASS" } else { "FAIL" };
        let _ = write!(
            out,
            "  {:>8}  {:<4}  {:>4} values",
            result.entry, status, result.expected_length
        );
        match result.to_error() {
            Some(error) => {
                let _ = writeln!(out, "  {}", error);
            }
            None => {
                let _ = writeln!(out);
            }
        }
    }
    let invalid = results.iter().filter(|r| !r.valid).count();
    let _ = writeln!(out, "\n{} entries, {} invalid", results.len(), invalid);
    out
}
