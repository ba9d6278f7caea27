// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Collatz total stopping time, accelerated by a table of known suffixes.
//!
//! The total stopping time of `n` is the number of applications of
//! `n → n/2` (even) / `n → 3n+1` (odd) needed to reach 1. The accelerated
//! walk steps until it meets a value whose path to 1 is already stored in a
//! jump table, then splices that suffix in. Every splice is re-derived and
//! checked, so a corrupted table shows up as a failed validation rather than
//! as a wrong answer.
//!
//! # Architecture
//!
//! The implementation uses a two-tier memory model:
//!
//! ## Tier 1: MEMO Data (Immutable)
//!
//! The [`JumpTable`](memo::JumpTable), loaded once from JSON (embedded by
//! default) and shared read-only behind an `Arc`.
//!
//! ## Tier 2: Per-call Data
//!
//! Each analysis builds its own sequence and [`WalkResult`](walker::WalkResult);
//! each scan shard folds into its own [`RangeStatistics`](scan::RangeStatistics).
//!
//! # Data Flow
//!
//! 1. **Normalize** untrusted input ([`numeric::normalize`])
//! 2. **Walk** with the overflow-guarded step function ([`walker::walk`])
//! 3. **Verify** any spliced suffix ([`verify::verify_entry`])
//! 4. **Aggregate** over a range, in parallel ([`scan::scan`])
//!
//! # Example
//!
//! ```
//! use collatz_wormhole::AnalysisContext;
//!
//! let ctx = AnalysisContext::new().unwrap();
//! let result = ctx.analyze(6);
//! assert_eq!(result.sequence, vec![6, 3, 10, 5, 16, 8, 4, 2, 1]);
//! assert_eq!(result.jump_entry(), Some(3));
//! ```

pub mod config;
pub mod context;
pub mod errors;
pub mod memo;
pub mod numeric;
pub mod report;
pub mod scan;
pub mod verify;
pub mod walker;

// Re-export commonly used types
pub use config::WalkerConfig;
pub use context::AnalysisContext;
pub use errors::{CollatzError, ErrorKind};
pub use memo::{JumpEntry, JumpTable, TableError};
pub use numeric::RawInput;
pub use scan::RangeStatistics;
pub use verify::{SequenceComparison, ValidationResult};
pub use walker::{Outcome, WalkResult};
