//! Org-style outline parsing.
//!
//! # Responsibility
//! - Split a heading body into free-text description and nested subtree.
//! - Parse a subtree into an in-memory task forest keyed by star depth.
//! - Load whole outline files into top-level entries for the importer.
//!
//! # Invariants
//! - All parsing functions are total over arbitrary string input; bad
//!   nesting degrades to a flatter forest instead of failing.
//! - A child's star count is strictly greater than its parent's at the
//!   moment of attachment.

pub mod document;
pub mod parse;
pub mod split;

use crate::model::task::TaskStatus;

/// One parsed outline heading with its body text and nested children.
///
/// Transient: built during parsing, consumed by the importer, dropped.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutlineNode {
    /// Heading title with stars and status keyword stripped.
    pub heading: String,
    /// `TODO` maps to open, `DONE` to done. `None` for plain headings.
    pub status: Option<TaskStatus>,
    /// Trimmed body lines up to the next heading at any depth.
    pub body: String,
    /// Nested headings in document order.
    pub children: Vec<OutlineNode>,
}

impl OutlineNode {
    /// Creates a leaf node with an empty body.
    pub fn new(heading: impl Into<String>, status: Option<TaskStatus>) -> Self {
        Self {
            heading: heading.into(),
            status,
            body: String::new(),
            children: Vec::new(),
        }
    }
}
