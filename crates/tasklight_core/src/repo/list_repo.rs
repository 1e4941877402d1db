//! TaskList repository contract and SQLite implementation.
//!
//! # Responsibility
//! - Provide stable CRUD APIs over `task_lists` storage.
//! - Keep SQL details and ordering behavior inside the repository boundary.
//!
//! # Invariants
//! - List ordering is deterministic: the sort key first, `uuid ASC` as the
//!   tie-breaker.
//! - `delete_list` removes child tasks in the same statement batch; callers
//!   run it inside a store transaction.

use crate::model::list::{ListId, TaskList};
use crate::repo::{RepoError, RepoResult};
use rusqlite::{params, Connection, Row};
use uuid::Uuid;

const LIST_SELECT_SQL: &str = "SELECT uuid, name, created_at FROM task_lists";

/// Sort key for the lists overview.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ListSortKey {
    /// Creation order, oldest first.
    CreatedAt,
    /// Lexicographic by name.
    Name,
}

impl ListSortKey {
    fn order_clause(self) -> &'static str {
        match self {
            Self::CreatedAt => "created_at ASC, uuid ASC",
            Self::Name => "name ASC, uuid ASC",
        }
    }
}

/// Repository interface for list CRUD operations.
pub trait ListRepository {
    /// Inserts one list record.
    fn create_list(&self, list: &TaskList) -> RepoResult<ListId>;
    /// Renames one list.
    fn rename_list(&self, id: ListId, name: &str) -> RepoResult<()>;
    /// Deletes one list together with all of its tasks.
    fn delete_list(&self, id: ListId) -> RepoResult<()>;
    /// Loads one list by id.
    fn get_list(&self, id: ListId) -> RepoResult<Option<TaskList>>;
    /// Lists all lists under the given sort key.
    fn list_lists(&self, sort: ListSortKey) -> RepoResult<Vec<TaskList>>;
}

/// SQLite-backed list repository.
pub struct SqliteListRepository<'conn> {
    conn: &'conn Connection,
}

impl<'conn> SqliteListRepository<'conn> {
    pub fn new(conn: &'conn Connection) -> Self {
        Self { conn }
    }
}

impl ListRepository for SqliteListRepository<'_> {
    fn create_list(&self, list: &TaskList) -> RepoResult<ListId> {
        self.conn.execute(
            "INSERT INTO task_lists (uuid, name, created_at) VALUES (?1, ?2, ?3);",
            params![list.uuid.to_string(), list.name.as_str(), list.created_at],
        )?;
        Ok(list.uuid)
    }

    fn rename_list(&self, id: ListId, name: &str) -> RepoResult<()> {
        let changed = self.conn.execute(
            "UPDATE task_lists SET name = ?2 WHERE uuid = ?1;",
            params![id.to_string(), name],
        )?;
        if changed == 0 {
            return Err(RepoError::NotFound(id));
        }
        Ok(())
    }

    fn delete_list(&self, id: ListId) -> RepoResult<()> {
        // Child tasks go first so the cascade is explicit in the write path
        // and does not depend on pragma state.
        self.conn.execute(
            "DELETE FROM tasks WHERE list_uuid = ?1;",
            [id.to_string()],
        )?;
        let changed = self
            .conn
            .execute("DELETE FROM task_lists WHERE uuid = ?1;", [id.to_string()])?;
        if changed == 0 {
            return Err(RepoError::NotFound(id));
        }
        Ok(())
    }

    fn get_list(&self, id: ListId) -> RepoResult<Option<TaskList>> {
        let mut stmt = self
            .conn
            .prepare(&format!("{LIST_SELECT_SQL} WHERE uuid = ?1;"))?;
        let mut rows = stmt.query([id.to_string()])?;
        if let Some(row) = rows.next()? {
            return Ok(Some(parse_list_row(row)?));
        }
        Ok(None)
    }

    fn list_lists(&self, sort: ListSortKey) -> RepoResult<Vec<TaskList>> {
        let mut stmt = self.conn.prepare(&format!(
            "{LIST_SELECT_SQL} ORDER BY {};",
            sort.order_clause()
        ))?;
        let mut rows = stmt.query([])?;
        let mut lists = Vec::new();
        while let Some(row) = rows.next()? {
            lists.push(parse_list_row(row)?);
        }
        Ok(lists)
    }
}

fn parse_list_row(row: &Row<'_>) -> RepoResult<TaskList> {
    let uuid_text: String = row.get("uuid")?;
    let uuid = Uuid::parse_str(&uuid_text).map_err(|_| {
        RepoError::InvalidData(format!("invalid uuid value `{uuid_text}` in task_lists.uuid"))
    })?;

    Ok(TaskList {
        uuid,
        name: row.get("name")?,
        created_at: row.get("created_at")?,
    })
}
