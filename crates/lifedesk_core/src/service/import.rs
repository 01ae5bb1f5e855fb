//! Recursive outline-to-tasks import.
//!
//! # Responsibility
//! - Walk a loaded outline document and persist each qualifying heading
//!   as one task row, threading generated parent ids down the tree.
//!
//! # Invariants
//! - Rows are inserted depth-first in document order, so every child's
//!   `parent_id` references a row that already exists.
//! - Top-level entries without a TODO/DONE keyword are skipped whole.
//! - No rollback: rows inserted before a failure stay (commit-per-row).

use crate::model::task::{NewTask, TaskStatus};
use crate::outline::document::OutlineDocument;
use crate::outline::parse::parse_subtasks;
use crate::outline::split::split_description_and_subtree;
use crate::outline::OutlineNode;
use crate::repo::task_repo::TaskRepository;
use crate::repo::RepoResult;
use log::info;

/// Counters returned by one import run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ImportSummary {
    /// Task rows inserted, nested headings included.
    pub imported: u64,
    /// Top-level entries skipped for lacking a status keyword.
    pub skipped: u64,
}

/// Imports outline documents into the tasks table.
pub struct ImportService<R: TaskRepository> {
    repo: R,
}

impl<R: TaskRepository> ImportService<R> {
    pub fn new(repo: R) -> Self {
        Self { repo }
    }

    /// Imports every qualifying top-level entry of `document`.
    ///
    /// For each entry carrying a status keyword: the body is split into
    /// description and subtree text, the entry is inserted as a root
    /// task, and the subtree is parsed and persisted underneath it.
    /// Repository failures propagate immediately; already-inserted rows
    /// are kept.
    pub fn import_document(&self, document: &OutlineDocument) -> RepoResult<ImportSummary> {
        let mut summary = ImportSummary::default();

        for entry in &document.entries {
            let Some(status) = entry.status else {
                info!(
                    "event=org_import module=import status=skipped heading={:?}",
                    entry.heading
                );
                summary.skipped += 1;
                continue;
            };

            let (description, subtree) = split_description_and_subtree(&entry.body);
            let task_id = self.repo.insert_task(&NewTask {
                title: entry.heading.clone(),
                description: none_if_empty(description),
                status,
                parent_id: None,
            })?;
            summary.imported += 1;

            if !subtree.is_empty() {
                for child in parse_subtasks(&subtree) {
                    summary.imported += self.persist_node(&child, task_id)?;
                }
            }
        }

        info!(
            "event=org_import module=import status=ok imported={} skipped={}",
            summary.imported, summary.skipped
        );
        Ok(summary)
    }

    /// Persists one parsed node and its children, pre-order.
    ///
    /// Parsed nodes already carry their nesting; their bodies contain no
    /// heading lines, so no further splitting is needed. Nodes without a
    /// status keyword fall back to the table default (open).
    fn persist_node(&self, node: &OutlineNode, parent_id: i64) -> RepoResult<u64> {
        let task_id = self.repo.insert_task(&NewTask {
            title: node.heading.clone(),
            description: none_if_empty(node.body.clone()),
            status: node.status.unwrap_or(TaskStatus::Open),
            parent_id: Some(parent_id),
        })?;

        let mut inserted = 1;
        for child in &node.children {
            inserted += self.persist_node(child, task_id)?;
        }
        Ok(inserted)
    }
}

fn none_if_empty(text: String) -> Option<String> {
    if text.is_empty() {
        None
    } else {
        Some(text)
    }
}
