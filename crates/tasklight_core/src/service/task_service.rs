//! Task mutation service.
//!
//! # Responsibility
//! - Provide the validated task operations behind the tasks screen: create,
//!   edit, delete, toggle-done.
//!
//! # Invariants
//! - Task names are trimmed and must be non-empty; notes may be empty.
//! - New tasks start incomplete.
//! - Toggling to the already-current flag is a no-op success without a
//!   write or change event.

use crate::model::list::ListId;
use crate::model::task::{Task, TaskId};
use crate::repo::list_repo::{ListRepository, SqliteListRepository};
use crate::repo::task_repo::{SqliteTaskRepository, TaskRepository};
use crate::repo::RepoError;
use crate::store::{ChangeEvent, RecordStore};
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::sync::Arc;

/// Errors from task service operations.
#[derive(Debug)]
pub enum TaskServiceError {
    /// Name is blank after trim.
    EmptyName,
    /// Parent list does not exist.
    ListNotFound(ListId),
    /// Target task does not exist (e.g. deleted by a concurrent action).
    TaskNotFound(TaskId),
    /// Persistence-layer failure.
    Store(RepoError),
}

impl Display for TaskServiceError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::EmptyName => write!(f, "task name must not be blank"),
            Self::ListNotFound(id) => write!(f, "list not found: {id}"),
            Self::TaskNotFound(id) => write!(f, "task not found: {id}"),
            Self::Store(err) => write!(f, "{err}"),
        }
    }
}

impl Error for TaskServiceError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Store(err) => Some(err),
            _ => None,
        }
    }
}

/// Task service facade over the record store.
pub struct TaskService {
    store: Arc<RecordStore>,
}

impl TaskService {
    /// Creates a service using the provided store handle.
    pub fn new(store: Arc<RecordStore>) -> Self {
        Self { store }
    }

    /// Creates one incomplete task under an existing list and returns it.
    pub fn create_task(
        &self,
        list_uuid: ListId,
        name: impl Into<String>,
        note: impl Into<String>,
    ) -> Result<Task, TaskServiceError> {
        let name = normalize_name(name.into())?;
        let task = Task::new(list_uuid, name, note.into());
        self.store
            .mutate(|tx| {
                if SqliteListRepository::new(tx).get_list(list_uuid)?.is_none() {
                    return Err(RepoError::NotFound(list_uuid));
                }
                SqliteTaskRepository::new(tx).create_task(&task)?;
                Ok(((), vec![ChangeEvent::Tasks { list_uuid }]))
            })
            .map_err(|err| match err {
                RepoError::NotFound(id) if id == list_uuid => {
                    TaskServiceError::ListNotFound(list_uuid)
                }
                other => TaskServiceError::Store(other),
            })?;
        Ok(task)
    }

    /// Replaces one task's name and note and returns the updated task.
    pub fn edit_task(
        &self,
        id: TaskId,
        new_name: impl Into<String>,
        new_note: impl Into<String>,
    ) -> Result<Task, TaskServiceError> {
        let new_name = normalize_name(new_name.into())?;
        let new_note = new_note.into();
        self.store
            .mutate(|tx| {
                let repo = SqliteTaskRepository::new(tx);
                let current = repo.get_task(id)?.ok_or(RepoError::NotFound(id))?;
                if current.name == new_name && current.note == new_note {
                    return Ok((current, Vec::new()));
                }
                repo.update_task_text(id, new_name.as_str(), new_note.as_str())?;
                let list_uuid = current.list_uuid;
                let updated = Task {
                    name: new_name,
                    note: new_note,
                    ..current
                };
                Ok((updated, vec![ChangeEvent::Tasks { list_uuid }]))
            })
            .map_err(|err| task_scope(err, id))
    }

    /// Deletes one task.
    pub fn delete_task(&self, id: TaskId) -> Result<(), TaskServiceError> {
        self.store
            .mutate(|tx| {
                let repo = SqliteTaskRepository::new(tx);
                let current = repo.get_task(id)?.ok_or(RepoError::NotFound(id))?;
                repo.delete_task(id)?;
                Ok((
                    (),
                    vec![ChangeEvent::Tasks {
                        list_uuid: current.list_uuid,
                    }],
                ))
            })
            .map_err(|err| task_scope(err, id))
    }

    /// Sets one task's completion flag.
    ///
    /// This is what moves a task between the current and completed
    /// partitions of the live task views.
    pub fn set_task_done(&self, id: TaskId, done: bool) -> Result<(), TaskServiceError> {
        self.store
            .mutate(|tx| {
                let repo = SqliteTaskRepository::new(tx);
                let current = repo.get_task(id)?.ok_or(RepoError::NotFound(id))?;
                if current.is_complete == done {
                    return Ok(((), Vec::new()));
                }
                repo.set_task_complete(id, done)?;
                Ok((
                    (),
                    vec![ChangeEvent::Tasks {
                        list_uuid: current.list_uuid,
                    }],
                ))
            })
            .map_err(|err| task_scope(err, id))
    }
}

fn task_scope(err: RepoError, id: TaskId) -> TaskServiceError {
    match err {
        RepoError::NotFound(missing) if missing == id => TaskServiceError::TaskNotFound(id),
        other => TaskServiceError::Store(other),
    }
}

fn normalize_name(value: String) -> Result<String, TaskServiceError> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(TaskServiceError::EmptyName);
    }
    Ok(trimmed.to_string())
}
