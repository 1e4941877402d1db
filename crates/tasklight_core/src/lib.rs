//! Core domain logic for Tasklight.
//! This crate is the single source of truth for task-board invariants.

pub mod db;
pub mod demo;
pub mod live;
pub mod logging;
pub mod model;
pub mod repo;
pub mod service;
pub mod store;
pub mod view;

pub use demo::{seed_demo_data, SeedError};
pub use live::{ObservedLists, ObservedTasks, TaskPartition};
pub use logging::{default_log_level, init_logging, logging_status};
pub use model::list::{completion_summary, CompletionSummary, ListId, TaskList};
pub use model::task::{Task, TaskId};
pub use repo::list_repo::{ListRepository, ListSortKey, SqliteListRepository};
pub use repo::task_repo::{SqliteTaskRepository, TaskRepository};
pub use repo::{RepoError, RepoResult};
pub use service::list_service::{ListService, ListServiceError};
pub use service::task_service::{TaskService, TaskServiceError};
pub use store::{ChangeEvent, ChangeFilter, RecordStore, Subscription};
pub use view::{diff_rows, ListRow, RowOp, TaskRow};

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}

#[cfg(test)]
mod tests {
    use super::core_version;

    #[test]
    fn version_is_not_empty() {
        assert!(!core_version().is_empty());
    }
}
