//! List mutation service.
//!
//! # Responsibility
//! - Provide the validated list operations behind the lists screen: create,
//!   rename, delete (cascading), mark-all-done.
//! - Derive the completion summary for list rows.
//!
//! # Invariants
//! - Names are trimmed and must be non-empty; validation happens before the
//!   transaction opens.
//! - Deleting a list removes all of its tasks in the same transaction.
//! - Renaming to the current name is a no-op success without a write or
//!   change event.

use crate::model::list::{completion_summary, CompletionSummary, ListId, TaskList};
use crate::repo::list_repo::{ListRepository, SqliteListRepository};
use crate::repo::task_repo::{SqliteTaskRepository, TaskRepository};
use crate::repo::RepoError;
use crate::store::{ChangeEvent, RecordStore};
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::sync::Arc;

/// Errors from list service operations.
#[derive(Debug)]
pub enum ListServiceError {
    /// Name is blank after trim.
    EmptyName,
    /// Target list does not exist (e.g. deleted by a concurrent action).
    ListNotFound(ListId),
    /// Persistence-layer failure.
    Store(RepoError),
}

impl Display for ListServiceError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::EmptyName => write!(f, "list name must not be blank"),
            Self::ListNotFound(id) => write!(f, "list not found: {id}"),
            Self::Store(err) => write!(f, "{err}"),
        }
    }
}

impl Error for ListServiceError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Store(err) => Some(err),
            _ => None,
        }
    }
}

impl From<RepoError> for ListServiceError {
    fn from(value: RepoError) -> Self {
        match value {
            RepoError::NotFound(id) => Self::ListNotFound(id),
            other => Self::Store(other),
        }
    }
}

/// List service facade over the record store.
pub struct ListService {
    store: Arc<RecordStore>,
}

impl ListService {
    /// Creates a service using the provided store handle.
    pub fn new(store: Arc<RecordStore>) -> Self {
        Self { store }
    }

    /// Creates one list and returns it.
    pub fn create_list(&self, name: impl Into<String>) -> Result<TaskList, ListServiceError> {
        let name = normalize_name(name.into())?;
        let list = TaskList::new(name);
        self.store.mutate(|tx| {
            SqliteListRepository::new(tx).create_list(&list)?;
            Ok(((), vec![ChangeEvent::Lists]))
        })?;
        Ok(list)
    }

    /// Renames one list.
    pub fn rename_list(
        &self,
        id: ListId,
        new_name: impl Into<String>,
    ) -> Result<(), ListServiceError> {
        let new_name = normalize_name(new_name.into())?;
        self.store
            .mutate(|tx| {
                let repo = SqliteListRepository::new(tx);
                let current = repo.get_list(id)?.ok_or(RepoError::NotFound(id))?;
                if current.name == new_name {
                    return Ok(((), Vec::new()));
                }
                repo.rename_list(id, new_name.as_str())?;
                Ok(((), vec![ChangeEvent::Lists]))
            })
            .map_err(Into::into)
    }

    /// Deletes one list together with all of its tasks.
    pub fn delete_list(&self, id: ListId) -> Result<(), ListServiceError> {
        self.store
            .mutate(|tx| {
                SqliteListRepository::new(tx).delete_list(id)?;
                Ok((
                    (),
                    vec![ChangeEvent::Lists, ChangeEvent::Tasks { list_uuid: id }],
                ))
            })
            .map_err(Into::into)
    }

    /// Marks every task of one list complete, all or none.
    pub fn mark_list_done(&self, id: ListId) -> Result<(), ListServiceError> {
        self.store
            .mutate(|tx| {
                if SqliteListRepository::new(tx).get_list(id)?.is_none() {
                    return Err(RepoError::NotFound(id));
                }
                let flipped = SqliteTaskRepository::new(tx).complete_all_in_list(id)?;
                let events = if flipped > 0 {
                    vec![ChangeEvent::Tasks { list_uuid: id }]
                } else {
                    Vec::new()
                };
                Ok(((), events))
            })
            .map_err(Into::into)
    }

    /// Completion summary of one list's tasks.
    ///
    /// A deleted list reads as having no tasks and yields `Remaining(0)`;
    /// read-only queries never fail with not-found.
    pub fn completion_summary(&self, id: ListId) -> Result<CompletionSummary, ListServiceError> {
        self.store
            .read(|conn| {
                let tasks = SqliteTaskRepository::new(conn).list_all(id)?;
                Ok(completion_summary(&tasks))
            })
            .map_err(Into::into)
    }
}

fn normalize_name(value: String) -> Result<String, ListServiceError> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(ListServiceError::EmptyName);
    }
    Ok(trimmed.to_string())
}
