//! Task repository contract and SQLite implementation.
//!
//! # Responsibility
//! - Provide CRUD over the `tasks` tree table.
//! - Keep SQL details inside the persistence boundary; callers see
//!   typed rows and ids only.
//!
//! # Invariants
//! - `insert_task` returns the generated rowid so importers can thread
//!   it into child rows before those children are inserted.
//! - `delete_task` removes the whole subtree through the FK cascade.

use super::{RepoError, RepoResult};
use crate::model::task::{NewTask, Task, TaskId, TaskStatus};
use rusqlite::types::Value;
use rusqlite::{params, params_from_iter, Connection, Row};

const TASK_SELECT_SQL: &str = "SELECT
    id,
    title,
    description,
    status,
    created_at,
    parent_id
FROM tasks";

/// Filter options for listing tasks.
#[derive(Debug, Clone, Default)]
pub struct TaskListQuery {
    pub status: Option<TaskStatus>,
    /// When set, only rows without a parent.
    pub roots_only: bool,
}

/// Repository interface for task persistence.
///
/// The org importer is generic over this trait; tests may substitute a
/// recording implementation.
pub trait TaskRepository {
    /// Inserts one row and returns its generated id.
    fn insert_task(&self, task: &NewTask) -> RepoResult<TaskId>;
    /// Loads one row by id.
    fn get_task(&self, id: TaskId) -> RepoResult<Option<Task>>;
    /// Lists rows matching the query, oldest first.
    fn list_tasks(&self, query: &TaskListQuery) -> RepoResult<Vec<Task>>;
    /// Lists direct children of `parent` (or root rows for `None`) in
    /// insertion order.
    fn list_children(&self, parent: Option<TaskId>) -> RepoResult<Vec<Task>>;
    /// Updates the status of one row.
    fn set_status(&self, id: TaskId, status: TaskStatus) -> RepoResult<()>;
    /// Deletes one row; children go with it via cascade.
    fn delete_task(&self, id: TaskId) -> RepoResult<()>;
}

/// SQLite-backed task repository.
pub struct SqliteTaskRepository<'conn> {
    conn: &'conn Connection,
}

impl<'conn> SqliteTaskRepository<'conn> {
    pub fn new(conn: &'conn Connection) -> Self {
        Self { conn }
    }
}

impl TaskRepository for SqliteTaskRepository<'_> {
    fn insert_task(&self, task: &NewTask) -> RepoResult<TaskId> {
        self.conn.execute(
            "INSERT INTO tasks (title, description, status, parent_id)
             VALUES (?1, ?2, ?3, ?4);",
            params![
                task.title.as_str(),
                task.description.as_deref(),
                task.status.as_db_str(),
                task.parent_id,
            ],
        )?;
        Ok(self.conn.last_insert_rowid())
    }

    fn get_task(&self, id: TaskId) -> RepoResult<Option<Task>> {
        let mut stmt = self
            .conn
            .prepare(&format!("{TASK_SELECT_SQL} WHERE id = ?1;"))?;
        let mut rows = stmt.query([id])?;
        if let Some(row) = rows.next()? {
            return Ok(Some(parse_task_row(row)?));
        }
        Ok(None)
    }

    fn list_tasks(&self, query: &TaskListQuery) -> RepoResult<Vec<Task>> {
        let mut sql = format!("{TASK_SELECT_SQL} WHERE 1 = 1");
        let mut bind_values: Vec<Value> = Vec::new();

        if let Some(status) = query.status {
            sql.push_str(" AND status = ?");
            bind_values.push(Value::Text(status.as_db_str().to_string()));
        }
        if query.roots_only {
            sql.push_str(" AND parent_id IS NULL");
        }
        sql.push_str(" ORDER BY id ASC");

        let mut stmt = self.conn.prepare(&sql)?;
        let mut rows = stmt.query(params_from_iter(bind_values))?;
        let mut tasks = Vec::new();
        while let Some(row) = rows.next()? {
            tasks.push(parse_task_row(row)?);
        }
        Ok(tasks)
    }

    fn list_children(&self, parent: Option<TaskId>) -> RepoResult<Vec<Task>> {
        let sql = match parent {
            Some(_) => format!("{TASK_SELECT_SQL} WHERE parent_id = ?1 ORDER BY id ASC;"),
            None => format!("{TASK_SELECT_SQL} WHERE parent_id IS NULL ORDER BY id ASC;"),
        };
        let mut stmt = self.conn.prepare(&sql)?;
        let mut rows = match parent {
            Some(parent) => stmt.query([parent])?,
            None => stmt.query([])?,
        };
        let mut tasks = Vec::new();
        while let Some(row) = rows.next()? {
            tasks.push(parse_task_row(row)?);
        }
        Ok(tasks)
    }

    fn set_status(&self, id: TaskId, status: TaskStatus) -> RepoResult<()> {
        let changed = self.conn.execute(
            "UPDATE tasks SET status = ?2 WHERE id = ?1;",
            params![id, status.as_db_str()],
        )?;
        if changed == 0 {
            return Err(RepoError::NotFound { table: "tasks", id });
        }
        Ok(())
    }

    fn delete_task(&self, id: TaskId) -> RepoResult<()> {
        let changed = self
            .conn
            .execute("DELETE FROM tasks WHERE id = ?1;", [id])?;
        if changed == 0 {
            return Err(RepoError::NotFound { table: "tasks", id });
        }
        Ok(())
    }
}

fn parse_task_row(row: &Row<'_>) -> RepoResult<Task> {
    let status_text: String = row.get("status")?;
    let status = TaskStatus::from_db_str(&status_text).ok_or_else(|| {
        RepoError::InvalidData(format!("invalid status `{status_text}` in tasks.status"))
    })?;

    Ok(Task {
        id: row.get("id")?,
        title: row.get("title")?,
        description: row.get("description")?,
        status,
        created_at: row.get("created_at")?,
        parent_id: row.get("parent_id")?,
    })
}
