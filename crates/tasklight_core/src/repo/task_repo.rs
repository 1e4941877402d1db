//! Task repository contract and SQLite implementation.
//!
//! # Responsibility
//! - Provide stable CRUD APIs over `tasks` storage.
//! - Expose the per-list completion partitions used by live task views.
//!
//! # Invariants
//! - Partition ordering is deterministic: `created_at ASC, uuid ASC`.
//! - `is_complete` is stored as 0/1; any other persisted value is rejected.

use crate::model::list::ListId;
use crate::model::task::{Task, TaskId};
use crate::repo::{RepoError, RepoResult};
use rusqlite::{params, Connection, Row};
use uuid::Uuid;

const TASK_SELECT_SQL: &str =
    "SELECT uuid, list_uuid, name, note, is_complete, created_at FROM tasks";

/// Repository interface for task CRUD operations.
pub trait TaskRepository {
    /// Inserts one task record.
    fn create_task(&self, task: &Task) -> RepoResult<TaskId>;
    /// Replaces one task's name and note.
    fn update_task_text(&self, id: TaskId, name: &str, note: &str) -> RepoResult<()>;
    /// Sets one task's completion flag.
    fn set_task_complete(&self, id: TaskId, is_complete: bool) -> RepoResult<()>;
    /// Marks every task of one list complete; returns the flipped count.
    fn complete_all_in_list(&self, list_uuid: ListId) -> RepoResult<usize>;
    /// Deletes one task.
    fn delete_task(&self, id: TaskId) -> RepoResult<()>;
    /// Loads one task by id.
    fn get_task(&self, id: TaskId) -> RepoResult<Option<Task>>;
    /// Lists one completion partition of one list.
    fn list_partition(&self, list_uuid: ListId, is_complete: bool) -> RepoResult<Vec<Task>>;
    /// Lists every task of one list across both partitions.
    fn list_all(&self, list_uuid: ListId) -> RepoResult<Vec<Task>>;
}

/// SQLite-backed task repository.
pub struct SqliteTaskRepository<'conn> {
    conn: &'conn Connection,
}

impl<'conn> SqliteTaskRepository<'conn> {
    pub fn new(conn: &'conn Connection) -> Self {
        Self { conn }
    }

    fn query_tasks(&self, sql: &str, bind: &[&dyn rusqlite::ToSql]) -> RepoResult<Vec<Task>> {
        let mut stmt = self.conn.prepare(sql)?;
        let mut rows = stmt.query(bind)?;
        let mut tasks = Vec::new();
        while let Some(row) = rows.next()? {
            tasks.push(parse_task_row(row)?);
        }
        Ok(tasks)
    }
}

impl TaskRepository for SqliteTaskRepository<'_> {
    fn create_task(&self, task: &Task) -> RepoResult<TaskId> {
        self.conn.execute(
            "INSERT INTO tasks (uuid, list_uuid, name, note, is_complete, created_at)
             VALUES (?1, ?2, ?3, ?4, ?5, ?6);",
            params![
                task.uuid.to_string(),
                task.list_uuid.to_string(),
                task.name.as_str(),
                task.note.as_str(),
                bool_to_int(task.is_complete),
                task.created_at,
            ],
        )?;
        Ok(task.uuid)
    }

    fn update_task_text(&self, id: TaskId, name: &str, note: &str) -> RepoResult<()> {
        let changed = self.conn.execute(
            "UPDATE tasks SET name = ?2, note = ?3 WHERE uuid = ?1;",
            params![id.to_string(), name, note],
        )?;
        if changed == 0 {
            return Err(RepoError::NotFound(id));
        }
        Ok(())
    }

    fn set_task_complete(&self, id: TaskId, is_complete: bool) -> RepoResult<()> {
        let changed = self.conn.execute(
            "UPDATE tasks SET is_complete = ?2 WHERE uuid = ?1;",
            params![id.to_string(), bool_to_int(is_complete)],
        )?;
        if changed == 0 {
            return Err(RepoError::NotFound(id));
        }
        Ok(())
    }

    fn complete_all_in_list(&self, list_uuid: ListId) -> RepoResult<usize> {
        let changed = self.conn.execute(
            "UPDATE tasks SET is_complete = 1 WHERE list_uuid = ?1 AND is_complete = 0;",
            [list_uuid.to_string()],
        )?;
        Ok(changed)
    }

    fn delete_task(&self, id: TaskId) -> RepoResult<()> {
        let changed = self
            .conn
            .execute("DELETE FROM tasks WHERE uuid = ?1;", [id.to_string()])?;
        if changed == 0 {
            return Err(RepoError::NotFound(id));
        }
        Ok(())
    }

    fn get_task(&self, id: TaskId) -> RepoResult<Option<Task>> {
        let mut stmt = self
            .conn
            .prepare(&format!("{TASK_SELECT_SQL} WHERE uuid = ?1;"))?;
        let mut rows = stmt.query([id.to_string()])?;
        if let Some(row) = rows.next()? {
            return Ok(Some(parse_task_row(row)?));
        }
        Ok(None)
    }

    fn list_partition(&self, list_uuid: ListId, is_complete: bool) -> RepoResult<Vec<Task>> {
        self.query_tasks(
            &format!(
                "{TASK_SELECT_SQL}
                 WHERE list_uuid = ?1 AND is_complete = ?2
                 ORDER BY created_at ASC, uuid ASC;"
            ),
            &[&list_uuid.to_string(), &bool_to_int(is_complete)],
        )
    }

    fn list_all(&self, list_uuid: ListId) -> RepoResult<Vec<Task>> {
        self.query_tasks(
            &format!(
                "{TASK_SELECT_SQL}
                 WHERE list_uuid = ?1
                 ORDER BY created_at ASC, uuid ASC;"
            ),
            &[&list_uuid.to_string()],
        )
    }
}

fn parse_task_row(row: &Row<'_>) -> RepoResult<Task> {
    let uuid_text: String = row.get("uuid")?;
    let uuid = Uuid::parse_str(&uuid_text).map_err(|_| {
        RepoError::InvalidData(format!("invalid uuid value `{uuid_text}` in tasks.uuid"))
    })?;

    let list_text: String = row.get("list_uuid")?;
    let list_uuid = Uuid::parse_str(&list_text).map_err(|_| {
        RepoError::InvalidData(format!("invalid uuid value `{list_text}` in tasks.list_uuid"))
    })?;

    let is_complete = match row.get::<_, i64>("is_complete")? {
        0 => false,
        1 => true,
        other => {
            return Err(RepoError::InvalidData(format!(
                "invalid is_complete value `{other}` in tasks.is_complete"
            )));
        }
    };

    Ok(Task {
        uuid,
        list_uuid,
        name: row.get("name")?,
        note: row.get("note")?,
        is_complete,
        created_at: row.get("created_at")?,
    })
}

fn bool_to_int(value: bool) -> i64 {
    if value {
        1
    } else {
        0
    }
}
