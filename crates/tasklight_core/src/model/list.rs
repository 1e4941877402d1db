//! TaskList domain model and completion summary.
//!
//! # Responsibility
//! - Define the list record owning a collection of tasks.
//! - Derive the list completion summary shown next to each list row.
//!
//! # Invariants
//! - `uuid` is stable and never reused for another list.
//! - `name` is non-empty after service-level validation; the model itself
//!   does not enforce it.

use crate::model::now_epoch_ms;
use crate::model::task::Task;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Stable identifier for a task list.
///
/// Kept as a type alias to make semantic intent explicit in signatures.
pub type ListId = Uuid;

/// A named, orderable container of tasks.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaskList {
    /// Stable global ID used for linking and row identity.
    pub uuid: ListId,
    /// User-facing list name.
    pub name: String,
    /// Unix epoch milliseconds; primary key for creation-order sorting.
    pub created_at: i64,
}

impl TaskList {
    /// Creates a new list with a generated stable ID.
    pub fn new(name: impl Into<String>) -> Self {
        Self::with_id(Uuid::new_v4(), name)
    }

    /// Creates a new list with a caller-provided stable ID.
    ///
    /// Used by tests and import paths where identity already exists.
    pub fn with_id(uuid: ListId, name: impl Into<String>) -> Self {
        Self {
            uuid,
            name: name.into(),
            created_at: now_epoch_ms(),
        }
    }
}

/// Derived completion state of one list, a pure function of its tasks.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CompletionSummary {
    /// At least one task exists and all tasks are complete.
    Done,
    /// Count of incomplete tasks. An empty list yields `Remaining(0)`,
    /// never `Done`: the all-complete check requires at least one task.
    Remaining(usize),
}

/// Computes the completion summary for one list's tasks.
pub fn completion_summary(tasks: &[Task]) -> CompletionSummary {
    let remaining = tasks.iter().filter(|task| !task.is_complete).count();
    if remaining == 0 && !tasks.is_empty() {
        CompletionSummary::Done
    } else {
        CompletionSummary::Remaining(remaining)
    }
}

#[cfg(test)]
mod tests {
    use super::{completion_summary, CompletionSummary, TaskList};
    use crate::model::task::Task;

    fn task(list: &TaskList, name: &str, is_complete: bool) -> Task {
        let mut task = Task::new(list.uuid, name, "");
        task.is_complete = is_complete;
        task
    }

    #[test]
    fn empty_list_counts_zero_remaining() {
        assert_eq!(completion_summary(&[]), CompletionSummary::Remaining(0));
    }

    #[test]
    fn all_complete_list_is_done() {
        let list = TaskList::new("Groceries");
        let tasks = vec![task(&list, "Milk", true), task(&list, "Bread", true)];
        assert_eq!(completion_summary(&tasks), CompletionSummary::Done);
    }

    #[test]
    fn remaining_counts_only_incomplete_tasks() {
        let list = TaskList::new("Groceries");
        let tasks = vec![
            task(&list, "Milk", true),
            task(&list, "Bread", false),
            task(&list, "Eggs", false),
        ];
        assert_eq!(completion_summary(&tasks), CompletionSummary::Remaining(2));
    }
}
