// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Numeric limits for walking Collatz sequences.
//!
//! Two of these are policy defaults (the iteration cap and the input ceiling)
//! and can be overridden through [`WalkerConfig`](crate::config::WalkerConfig).
//! The overflow threshold is a correctness boundary and is fixed.

/// Largest odd value for which `3n + 1` is still computed.
///
/// Formula: `(2^62 - 1) / 3`
///
/// `2^62 - 1` is divisible by 3, so the threshold itself is exact, and
/// `3 * OVERFLOW_THRESHOLD + 1 == 2^62`, well inside `u64`. Any odd value
/// above it is refused with [`OverflowRisk`](crate::errors::CollatzError::OverflowRisk).
pub const OVERFLOW_THRESHOLD: u64 = ((1u64 << 62) - 1) / 3;

/// Default cap on step applications before a walk is abandoned.
pub const DEFAULT_ITERATION_CAP: usize = 10_000;

/// Default inclusive ceiling on normalized input (2^50).
///
/// Accepting a start value does not promise its trajectory fits: some starts
/// near 1.4e9 already climb past 2^62, and those walks end in
/// [`OverflowRisk`](crate::errors::CollatzError::OverflowRisk).
pub const DEFAULT_MAX_INPUT: u64 = 1 << 50;

/// Extra values allowed when re-deriving a jump entry's suffix, beyond the
/// stored suffix length, before the re-derivation is declared too long.
pub const VERIFY_LENGTH_SLACK: usize = 100;

const _: () = assert!(OVERFLOW_THRESHOLD % 2 == 1, "threshold must be odd");
const _: () = assert!(DEFAULT_MAX_INPUT < OVERFLOW_THRESHOLD);
