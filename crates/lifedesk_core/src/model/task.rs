//! Task domain model.
//!
//! # Invariants
//! - `parent_id` is either `None` (tree root) or references an existing
//!   task row; deleting the parent cascades to the whole subtree.
//! - `status` is constrained to the `open`/`done` pair, defaulting to open.

use serde::{Deserialize, Serialize};

/// Generated task row id.
pub type TaskId = i64;

/// Task lifecycle state, mirrored 1:1 by the `tasks.status` column.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TaskStatus {
    Open,
    Done,
}

impl TaskStatus {
    /// Column value stored in `tasks.status`.
    pub fn as_db_str(self) -> &'static str {
        match self {
            Self::Open => "open",
            Self::Done => "done",
        }
    }

    /// Parses a `tasks.status` column value.
    pub fn from_db_str(value: &str) -> Option<Self> {
        match value {
            "open" => Some(Self::Open),
            "done" => Some(Self::Done),
            _ => None,
        }
    }
}

impl Default for TaskStatus {
    fn default() -> Self {
        Self::Open
    }
}

/// Persisted task row.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Task {
    pub id: TaskId,
    pub title: String,
    pub description: Option<String>,
    pub status: TaskStatus,
    /// Epoch ms, assigned by the database on insert.
    pub created_at: i64,
    pub parent_id: Option<TaskId>,
}

/// Insert payload for one task row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewTask {
    pub title: String,
    pub description: Option<String>,
    pub status: TaskStatus,
    pub parent_id: Option<TaskId>,
}

impl NewTask {
    /// Creates an open, root-level task with no description.
    pub fn titled(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            description: None,
            status: TaskStatus::Open,
            parent_id: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::TaskStatus;

    #[test]
    fn status_db_mapping_roundtrips() {
        for status in [TaskStatus::Open, TaskStatus::Done] {
            assert_eq!(TaskStatus::from_db_str(status.as_db_str()), Some(status));
        }
        assert_eq!(TaskStatus::from_db_str("cancelled"), None);
    }

    #[test]
    fn status_serializes_as_snake_case() {
        let value = serde_json::to_value(TaskStatus::Open).unwrap();
        assert_eq!(value, serde_json::json!("open"));
    }
}
