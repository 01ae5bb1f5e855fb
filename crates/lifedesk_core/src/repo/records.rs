//! Persistence for the four flat tables.
//!
//! # Responsibility
//! - Insert/list/update rows for personal info, projects, daily logs
//!   and bookmarks.
//!
//! # Invariants
//! - Listing order is `id ASC` (insertion order).
//! - `technologies`/`tags` round-trip through the comma-separated form
//!   defined in `model::records`.

use super::{RepoError, RepoResult};
use crate::model::records::{
    join_csv, split_csv, Bookmark, DailyLog, PersonalInfo, Project, RecordId,
};
use rusqlite::{params, Connection, Row};

/// Inserts one personal_info row and returns its generated id.
pub fn insert_personal_info(
    conn: &Connection,
    name: &str,
    age: Option<i64>,
    bio: Option<&str>,
) -> RepoResult<RecordId> {
    conn.execute(
        "INSERT INTO personal_info (name, age, bio) VALUES (?1, ?2, ?3);",
        params![name, age, bio],
    )?;
    Ok(conn.last_insert_rowid())
}

/// Replaces name/age/bio of one personal_info row.
pub fn update_personal_info(
    conn: &Connection,
    id: RecordId,
    name: &str,
    age: Option<i64>,
    bio: Option<&str>,
) -> RepoResult<()> {
    let changed = conn.execute(
        "UPDATE personal_info SET name = ?2, age = ?3, bio = ?4 WHERE id = ?1;",
        params![id, name, age, bio],
    )?;
    if changed == 0 {
        return Err(RepoError::NotFound {
            table: "personal_info",
            id,
        });
    }
    Ok(())
}

/// Lists personal_info rows in insertion order.
pub fn list_personal_info(conn: &Connection) -> RepoResult<Vec<PersonalInfo>> {
    collect_rows(
        conn,
        "SELECT id, name, age, bio, created_at FROM personal_info ORDER BY id ASC;",
        |row| {
            Ok(PersonalInfo {
                id: row.get("id")?,
                name: row.get("name")?,
                age: row.get("age")?,
                bio: row.get("bio")?,
                created_at: row.get("created_at")?,
            })
        },
    )
}

/// Inserts one project row and returns its generated id.
pub fn insert_project(
    conn: &Connection,
    title: &str,
    description: Option<&str>,
    technologies: &[String],
) -> RepoResult<RecordId> {
    conn.execute(
        "INSERT INTO projects (title, description, technologies) VALUES (?1, ?2, ?3);",
        params![title, description, join_csv(technologies)],
    )?;
    Ok(conn.last_insert_rowid())
}

/// Lists project rows in insertion order.
pub fn list_projects(conn: &Connection) -> RepoResult<Vec<Project>> {
    collect_rows(
        conn,
        "SELECT id, title, description, technologies, created_at
         FROM projects ORDER BY id ASC;",
        |row| {
            let technologies: Option<String> = row.get("technologies")?;
            Ok(Project {
                id: row.get("id")?,
                title: row.get("title")?,
                description: row.get("description")?,
                technologies: split_csv(technologies.as_deref().unwrap_or_default()),
                created_at: row.get("created_at")?,
            })
        },
    )
}

/// Inserts one daily_logs row and returns its generated id.
pub fn insert_daily_log(conn: &Connection, entry: &str) -> RepoResult<RecordId> {
    conn.execute("INSERT INTO daily_logs (entry) VALUES (?1);", [entry])?;
    Ok(conn.last_insert_rowid())
}

/// Lists daily_logs rows in insertion order.
pub fn list_daily_logs(conn: &Connection) -> RepoResult<Vec<DailyLog>> {
    collect_rows(
        conn,
        "SELECT id, entry, created_at FROM daily_logs ORDER BY id ASC;",
        |row| {
            Ok(DailyLog {
                id: row.get("id")?,
                entry: row.get("entry")?,
                created_at: row.get("created_at")?,
            })
        },
    )
}

/// Inserts one bookmark row and returns its generated id.
pub fn insert_bookmark(
    conn: &Connection,
    title: &str,
    url: &str,
    tags: &[String],
) -> RepoResult<RecordId> {
    conn.execute(
        "INSERT INTO bookmarks (title, url, tags) VALUES (?1, ?2, ?3);",
        params![title, url, join_csv(tags)],
    )?;
    Ok(conn.last_insert_rowid())
}

/// Lists bookmark rows in insertion order.
pub fn list_bookmarks(conn: &Connection) -> RepoResult<Vec<Bookmark>> {
    collect_rows(
        conn,
        "SELECT id, title, url, tags, created_at FROM bookmarks ORDER BY id ASC;",
        |row| {
            let tags: Option<String> = row.get("tags")?;
            Ok(Bookmark {
                id: row.get("id")?,
                title: row.get("title")?,
                url: row.get("url")?,
                tags: split_csv(tags.as_deref().unwrap_or_default()),
                created_at: row.get("created_at")?,
            })
        },
    )
}

fn collect_rows<T>(
    conn: &Connection,
    sql: &str,
    parse: impl Fn(&Row<'_>) -> RepoResult<T>,
) -> RepoResult<Vec<T>> {
    let mut stmt = conn.prepare(sql)?;
    let mut rows = stmt.query([])?;
    let mut items = Vec::new();
    while let Some(row) = rows.next()? {
        items.push(parse(row)?);
    }
    Ok(items)
}
