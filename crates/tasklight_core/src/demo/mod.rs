//! First-run demo seeding.
//!
//! # Responsibility
//! - Populate one sample list with tasks on an empty store, so first launch
//!   shows a usable board.
//!
//! # Invariants
//! - Seeding only runs when the store holds no lists; reseeding an already
//!   populated store is a no-op.

use crate::model::list::ListId;
use crate::repo::list_repo::{ListRepository, ListSortKey, SqliteListRepository};
use crate::repo::RepoError;
use crate::service::list_service::{ListService, ListServiceError};
use crate::service::task_service::{TaskService, TaskServiceError};
use crate::store::RecordStore;
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::sync::Arc;

/// Errors from demo seeding.
#[derive(Debug)]
pub enum SeedError {
    /// List creation failed.
    List(ListServiceError),
    /// Task creation failed.
    Task(TaskServiceError),
    /// Persistence-layer failure while probing the store.
    Store(RepoError),
}

impl Display for SeedError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::List(err) => write!(f, "{err}"),
            Self::Task(err) => write!(f, "{err}"),
            Self::Store(err) => write!(f, "{err}"),
        }
    }
}

impl Error for SeedError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::List(err) => Some(err),
            Self::Task(err) => Some(err),
            Self::Store(err) => Some(err),
        }
    }
}

impl From<ListServiceError> for SeedError {
    fn from(value: ListServiceError) -> Self {
        Self::List(value)
    }
}

impl From<TaskServiceError> for SeedError {
    fn from(value: TaskServiceError) -> Self {
        Self::Task(value)
    }
}

impl From<RepoError> for SeedError {
    fn from(value: RepoError) -> Self {
        Self::Store(value)
    }
}

/// Seeds one sample list when the store is empty.
///
/// Returns the seeded list id, or `None` when the store already held lists.
pub fn seed_demo_data(store: &Arc<RecordStore>) -> Result<Option<ListId>, SeedError> {
    let existing =
        store.read(|conn| SqliteListRepository::new(conn).list_lists(ListSortKey::CreatedAt))?;
    if !existing.is_empty() {
        return Ok(None);
    }

    let lists = ListService::new(Arc::clone(store));
    let tasks = TaskService::new(Arc::clone(store));

    let list = lists.create_list("Shopping List")?;
    tasks.create_task(list.uuid, "Milk", "2 liters")?;
    tasks.create_task(list.uuid, "Eggs", "a dozen")?;
    let bread = tasks.create_task(list.uuid, "Bread", "")?;
    tasks.set_task_done(bread.uuid, true)?;

    Ok(Some(list.uuid))
}
