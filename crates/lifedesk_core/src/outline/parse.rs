//! Subtree parser: raw outline text to a nested task forest.
//!
//! # Invariants
//! - Depth is the star count alone, never the leading whitespace.
//! - A node attaches only under a node with strictly fewer stars; equal
//!   or deeper stack entries are closed first.
//! - Body text seen before the first heading is discarded.

use super::OutlineNode;
use crate::model::task::TaskStatus;
use once_cell::sync::Lazy;
use regex::Regex;

/// Heading line: optional indent, stars, optional status keyword, title.
static HEADING_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^(\s*)(\*+)\s+(TODO|DONE)?\s*(.+)").expect("valid heading regex"));

/// A matched heading line, before tree placement.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct Heading<'line> {
    pub depth: usize,
    pub status: Option<TaskStatus>,
    pub title: &'line str,
}

/// Matches one line against the heading pattern.
pub(crate) fn match_heading(line: &str) -> Option<Heading<'_>> {
    let caps = HEADING_RE.captures(line)?;
    let depth = caps[2].len();
    let status = caps.get(3).map(|m| match m.as_str() {
        "DONE" => TaskStatus::Done,
        _ => TaskStatus::Open,
    });
    let title = caps.get(4).map_or("", |m| m.as_str()).trim();
    Some(Heading {
        depth,
        status,
        title,
    })
}

/// Parses subtree text into an ordered forest of [`OutlineNode`].
///
/// Maintains a stack of the currently open ancestor chain as
/// `(depth, node)` pairs. A new heading at depth `D` closes every stack
/// entry at depth `>= D`; each closed node is attached to the entry
/// below it, or to the forest when the stack runs out. Non-heading lines
/// accumulate (trimmed) as the body of the innermost open node.
///
/// Total over arbitrary input: empty or whitespace-only text yields an
/// empty forest, and malformed depth jumps flatten instead of failing.
pub fn parse_subtasks(subtree_text: &str) -> Vec<OutlineNode> {
    if subtree_text.trim().is_empty() {
        return Vec::new();
    }

    let mut forest: Vec<OutlineNode> = Vec::new();
    let mut stack: Vec<(usize, OutlineNode)> = Vec::new();
    let mut body_lines: Vec<&str> = Vec::new();

    for line in subtree_text.split('\n') {
        let Some(heading) = match_heading(line) else {
            if !stack.is_empty() {
                body_lines.push(line.trim());
            }
            continue;
        };

        finalize_body(&mut stack, &mut body_lines);
        close_to_depth(&mut stack, &mut forest, heading.depth);
        stack.push((
            heading.depth,
            OutlineNode::new(heading.title, heading.status),
        ));
    }

    finalize_body(&mut stack, &mut body_lines);
    close_to_depth(&mut stack, &mut forest, 0);

    forest
}

/// Assigns accumulated body lines to the innermost open node.
fn finalize_body(stack: &mut [(usize, OutlineNode)], body_lines: &mut Vec<&str>) {
    if let Some((_, node)) = stack.last_mut() {
        node.body = body_lines.join("\n").trim().to_string();
    }
    body_lines.clear();
}

/// Closes stack entries at depth >= `depth`, attaching each to its parent.
fn close_to_depth(stack: &mut Vec<(usize, OutlineNode)>, forest: &mut Vec<OutlineNode>, depth: usize) {
    while let Some((open_depth, closed)) = stack.pop() {
        if open_depth < depth {
            stack.push((open_depth, closed));
            return;
        }
        match stack.last_mut() {
            Some((_, parent)) => parent.children.push(closed),
            None => forest.push(closed),
        }
    }
}
