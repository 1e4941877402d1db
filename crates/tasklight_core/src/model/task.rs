//! Task domain model.
//!
//! # Responsibility
//! - Define the unit-of-work record belonging to one list.
//!
//! # Invariants
//! - `uuid` is stable and never reused for another task.
//! - New tasks start incomplete; the flag only changes through the
//!   mutation service.

use crate::model::list::ListId;
use crate::model::now_epoch_ms;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Stable identifier for a task.
pub type TaskId = Uuid;

/// A unit of work belonging to one list, with a binary completion flag.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Task {
    /// Stable global ID used for linking and row identity.
    pub uuid: TaskId,
    /// Back-reference to the owning list.
    pub list_uuid: ListId,
    /// User-facing task name.
    pub name: String,
    /// Free-form note; may be empty.
    pub note: String,
    /// Completion flag; moves the task between the current and completed
    /// partitions.
    pub is_complete: bool,
    /// Unix epoch milliseconds; keeps partition ordering stable.
    pub created_at: i64,
}

impl Task {
    /// Creates a new incomplete task with a generated stable ID.
    pub fn new(list_uuid: ListId, name: impl Into<String>, note: impl Into<String>) -> Self {
        Self::with_id(Uuid::new_v4(), list_uuid, name, note)
    }

    /// Creates a new incomplete task with a caller-provided stable ID.
    pub fn with_id(
        uuid: TaskId,
        list_uuid: ListId,
        name: impl Into<String>,
        note: impl Into<String>,
    ) -> Self {
        Self {
            uuid,
            list_uuid,
            name: name.into(),
            note: note.into(),
            is_complete: false,
            created_at: now_epoch_ms(),
        }
    }
}
