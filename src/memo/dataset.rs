// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Default jump-table dataset.
//!
//! The rows live in `data/jump_table.json` and are compiled in verbatim; the
//! walker never sees this text, only the [`JumpTable`](super::JumpTable)
//! parsed from it. Pass a different file at runtime to swap or extend it.

/// JSON text of the default dataset: 42 entries, keys 1 through 7287.
pub const JUMP_TABLE_JSON: &str = include_str!("../../data/jump_table.json");
