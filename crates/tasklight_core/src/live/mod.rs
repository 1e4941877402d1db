//! Live query views over the record store.
//!
//! # Responsibility
//! - Expose auto-refreshing list/task views with re-sort, index-of, and
//!   change subscription.
//!
//! # Invariants
//! - Snapshots re-query on every call; a view never caches rows.
//! - A view over a deleted list yields an empty snapshot, not an error.
//! - `sorted_by` returns a new view and never mutates the store.

use crate::model::list::{ListId, TaskList};
use crate::model::task::{Task, TaskId};
use crate::repo::list_repo::{ListRepository, ListSortKey, SqliteListRepository};
use crate::repo::task_repo::{SqliteTaskRepository, TaskRepository};
use crate::repo::RepoResult;
use crate::store::{ChangeFilter, RecordStore, Subscription};
use std::sync::Arc;

/// Completion partition of one list's tasks.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TaskPartition {
    /// Tasks still to do (`is_complete = false`).
    Current,
    /// Finished tasks (`is_complete = true`).
    Completed,
}

impl TaskPartition {
    /// The stored flag value backing this partition.
    pub fn is_complete(self) -> bool {
        matches!(self, Self::Completed)
    }
}

/// Live view over all task lists, ordered by a chosen sort key.
pub struct ObservedLists {
    store: Arc<RecordStore>,
    sort: ListSortKey,
}

impl ObservedLists {
    /// Creates a view in creation order.
    pub fn new(store: Arc<RecordStore>) -> Self {
        Self {
            store,
            sort: ListSortKey::CreatedAt,
        }
    }

    /// The active sort key.
    pub fn sort_key(&self) -> ListSortKey {
        self.sort
    }

    /// Returns a new view ordered by `sort`.
    pub fn sorted_by(&self, sort: ListSortKey) -> Self {
        Self {
            store: Arc::clone(&self.store),
            sort,
        }
    }

    /// Re-queries the visible rows under the active sort.
    pub fn snapshot(&self) -> RepoResult<Vec<TaskList>> {
        self.store
            .read(|conn| SqliteListRepository::new(conn).list_lists(self.sort))
    }

    /// Row index of one list under the active sort.
    ///
    /// Used to place a freshly inserted row without reloading the table.
    pub fn index_of(&self, id: ListId) -> RepoResult<Option<usize>> {
        Ok(self.snapshot()?.iter().position(|list| list.uuid == id))
    }

    /// Fires `on_change` after every committed change to the list set.
    pub fn subscribe(&self, on_change: impl Fn() + Send + Sync + 'static) -> Subscription {
        self.store
            .subscribe(ChangeFilter::Lists, move |_| on_change())
    }
}

/// Live view over one completion partition of one list's tasks.
///
/// Toggling a task's flag re-partitions automatically: the task disappears
/// from one view's snapshot and appears in the other's.
pub struct ObservedTasks {
    store: Arc<RecordStore>,
    list_uuid: ListId,
    partition: TaskPartition,
}

impl ObservedTasks {
    pub fn new(store: Arc<RecordStore>, list_uuid: ListId, partition: TaskPartition) -> Self {
        Self {
            store,
            list_uuid,
            partition,
        }
    }

    /// The observed list.
    pub fn list_uuid(&self) -> ListId {
        self.list_uuid
    }

    /// The observed partition.
    pub fn partition(&self) -> TaskPartition {
        self.partition
    }

    /// Re-queries the visible rows of this partition.
    pub fn snapshot(&self) -> RepoResult<Vec<Task>> {
        self.store.read(|conn| {
            SqliteTaskRepository::new(conn)
                .list_partition(self.list_uuid, self.partition.is_complete())
        })
    }

    /// Row index of one task within this partition.
    pub fn index_of(&self, id: TaskId) -> RepoResult<Option<usize>> {
        Ok(self.snapshot()?.iter().position(|task| task.uuid == id))
    }

    /// Fires `on_change` after every committed task change of the observed
    /// list, including moves into or out of this partition.
    pub fn subscribe(&self, on_change: impl Fn() + Send + Sync + 'static) -> Subscription {
        self.store
            .subscribe(ChangeFilter::TasksOf(self.list_uuid), move |_| on_change())
    }
}
