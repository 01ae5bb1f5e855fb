//! Core domain logic for lifedesk, a personal command-line data manager.
//! This crate is the single source of truth for parsing and storage
//! invariants.

pub mod db;
pub mod export;
pub mod logging;
pub mod model;
pub mod outline;
pub mod repo;
pub mod service;

pub use export::{export_all, export_to_file, ExportError};
pub use logging::{default_log_level, init_logging};
pub use model::records::{Bookmark, DailyLog, PersonalInfo, Project, RecordId};
pub use model::task::{NewTask, Task, TaskId, TaskStatus};
pub use outline::document::OutlineDocument;
pub use outline::parse::parse_subtasks;
pub use outline::split::split_description_and_subtree;
pub use outline::OutlineNode;
pub use repo::task_repo::{SqliteTaskRepository, TaskListQuery, TaskRepository};
pub use repo::{RepoError, RepoResult};
pub use service::import::{ImportService, ImportSummary};

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
