// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! MEMO data (immutable, loaded once).
//!
//! The jump table is built at start-up and then only read. It is shared by
//! every walk, verification and scan worker without synchronization.
//!
//! - `jump_table`: JumpEntry, JumpTable and the JSON loader
//! - `dataset`: the default dataset compiled into the crate

pub mod dataset;
pub mod jump_table;

pub use jump_table::{JumpEntry, JumpTable, TableError};
