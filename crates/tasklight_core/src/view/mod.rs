//! View projection boundary for table UIs.
//!
//! # Responsibility
//! - Compute incremental row operations between two visible-row snapshots,
//!   so tables animate inserts/deletes/reloads instead of refreshing fully.
//! - Render list/task rows and the partition labels.
//!
//! # Invariants
//! - Deletes are indexed against the old snapshot in descending order;
//!   inserts and reloads against the new snapshot in ascending order, so
//!   the ops apply sequentially.
//! - The core emits only "set changed"; this module owns the per-row diff.

use crate::live::TaskPartition;
use crate::model::list::{CompletionSummary, TaskList};
use crate::model::task::Task;
use std::collections::HashSet;
use std::hash::Hash;

/// Marker rendered for a fully completed list.
pub const DONE_MARKER: &str = "\u{2713}";

/// One incremental table operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RowOp {
    /// Insert a row at this index of the new snapshot.
    Insert(usize),
    /// Delete the row at this index of the old snapshot.
    Delete(usize),
    /// Reload the row at this index of the new snapshot.
    Reload(usize),
}

/// Diffs two row-key snapshots into incremental table operations.
///
/// `changed` marks keys whose content needs a reload even though they stayed
/// in the set. The diff covers membership changes and in-place content
/// changes; a membership-preserving reorder (sort-key switch, rename under
/// name sort) calls for a full section reload instead.
pub fn diff_rows<K: Eq + Hash + Copy>(old: &[K], new: &[K], changed: &[K]) -> Vec<RowOp> {
    let old_keys: HashSet<K> = old.iter().copied().collect();
    let new_keys: HashSet<K> = new.iter().copied().collect();
    let changed_keys: HashSet<K> = changed.iter().copied().collect();

    let mut ops = Vec::new();
    for (index, key) in old.iter().enumerate().rev() {
        if !new_keys.contains(key) {
            ops.push(RowOp::Delete(index));
        }
    }
    for (index, key) in new.iter().enumerate() {
        if !old_keys.contains(key) {
            ops.push(RowOp::Insert(index));
        } else if changed_keys.contains(key) {
            ops.push(RowOp::Reload(index));
        }
    }
    ops
}

/// Rendered row for the lists overview.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListRow {
    /// Primary text: the list name.
    pub title: String,
    /// Secondary text: the done marker or the incomplete count.
    pub summary: String,
    /// Whether the secondary text is the done marker and should be
    /// highlighted.
    pub highlight_done: bool,
}

impl ListRow {
    /// Projects one list and its completion summary into a renderable row.
    pub fn project(list: &TaskList, summary: CompletionSummary) -> Self {
        let (text, highlight) = match summary {
            CompletionSummary::Done => (DONE_MARKER.to_string(), true),
            CompletionSummary::Remaining(count) => (count.to_string(), false),
        };
        Self {
            title: list.name.clone(),
            summary: text,
            highlight_done: highlight,
        }
    }
}

/// Rendered row for the tasks screen.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TaskRow {
    /// Primary text: the task name.
    pub title: String,
    /// Secondary text: the task note.
    pub subtitle: String,
}

impl TaskRow {
    /// Projects one task into a renderable row.
    pub fn project(task: &Task) -> Self {
        Self {
            title: task.name.clone(),
            subtitle: task.note.clone(),
        }
    }
}

/// Section header for one task partition.
pub fn partition_title(partition: TaskPartition) -> &'static str {
    match partition {
        TaskPartition::Current => "CURRENT TASKS",
        TaskPartition::Completed => "COMPLETED TASKS",
    }
}

/// Label of the toggle-done swipe action for rows of one partition.
pub fn toggle_action_title(partition: TaskPartition) -> &'static str {
    match partition {
        TaskPartition::Current => "Done",
        TaskPartition::Completed => "Undone",
    }
}

#[cfg(test)]
mod tests {
    use super::{diff_rows, partition_title, toggle_action_title, ListRow, RowOp, DONE_MARKER};
    use crate::live::TaskPartition;
    use crate::model::list::{CompletionSummary, TaskList};

    #[test]
    fn identical_snapshots_produce_no_ops() {
        let ops = diff_rows(&['a', 'b', 'c'], &['a', 'b', 'c'], &[]);
        assert!(ops.is_empty());
    }

    #[test]
    fn diff_emits_delete_insert_and_reload() {
        let ops = diff_rows(&['a', 'b', 'c'], &['a', 'c', 'd'], &['c']);
        assert_eq!(
            ops,
            vec![RowOp::Delete(1), RowOp::Reload(1), RowOp::Insert(2)]
        );
    }

    #[test]
    fn deletes_come_out_in_descending_row_order() {
        let ops = diff_rows(&['a', 'b', 'c', 'd'], &['b'], &[]);
        assert_eq!(
            ops,
            vec![RowOp::Delete(3), RowOp::Delete(2), RowOp::Delete(0)]
        );
    }

    #[test]
    fn list_row_renders_done_marker_with_highlight() {
        let list = TaskList::new("Groceries");
        let row = ListRow::project(&list, CompletionSummary::Done);
        assert_eq!(row.title, "Groceries");
        assert_eq!(row.summary, DONE_MARKER);
        assert!(row.highlight_done);
    }

    #[test]
    fn list_row_renders_remaining_count_without_highlight() {
        let list = TaskList::new("Groceries");
        let row = ListRow::project(&list, CompletionSummary::Remaining(2));
        assert_eq!(row.summary, "2");
        assert!(!row.highlight_done);
    }

    #[test]
    fn task_row_projects_name_and_note() {
        let list = TaskList::new("Groceries");
        let task = crate::model::task::Task::new(list.uuid, "Milk", "2 liters");
        let row = super::TaskRow::project(&task);
        assert_eq!(row.title, "Milk");
        assert_eq!(row.subtitle, "2 liters");
    }

    #[test]
    fn partition_labels_match_screen_copy() {
        assert_eq!(partition_title(TaskPartition::Current), "CURRENT TASKS");
        assert_eq!(partition_title(TaskPartition::Completed), "COMPLETED TASKS");
        assert_eq!(toggle_action_title(TaskPartition::Current), "Done");
        assert_eq!(toggle_action_title(TaskPartition::Completed), "Undone");
    }
}
