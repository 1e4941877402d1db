//! Domain model for task boards.
//!
//! # Responsibility
//! - Define the canonical List/Task records used by core business logic.
//! - Provide the derived completion summary as a pure function.
//!
//! # Invariants
//! - Every entity is identified by a stable UUID.
//! - A Task belongs to exactly one TaskList; ownership flows List -> Task.

pub mod list;
pub mod task;

use std::time::{SystemTime, UNIX_EPOCH};

/// Current wall-clock time as Unix epoch milliseconds.
pub(crate) fn now_epoch_ms() -> i64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|elapsed| elapsed.as_millis() as i64)
        .unwrap_or(0)
}
