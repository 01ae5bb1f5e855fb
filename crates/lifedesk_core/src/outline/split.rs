//! Body splitter: free-text description vs. nested subtree.
//!
//! # Invariants
//! - Description lines are trimmed per line; subtree lines stay verbatim
//!   so the subtree parser sees the original star depth.
//! - Pure and total: any input string is valid.

use once_cell::sync::Lazy;
use regex::Regex;

/// A line opening a nested subtask: up to three stars followed by a space.
static SUBTASK_MARKER_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^\s*\*{1,3} ").expect("valid subtask marker regex"));

/// Splits a heading body into `(description, subtree)`.
///
/// Everything before the first subtask marker line becomes the
/// description; the marker line and everything after it becomes the
/// subtree. Either half may be empty. Both halves are trimmed as a whole.
pub fn split_description_and_subtree(body: &str) -> (String, String) {
    if body.is_empty() {
        return (String::new(), String::new());
    }

    let mut description_lines: Vec<&str> = Vec::new();
    let mut subtree_lines: Vec<&str> = Vec::new();
    let mut found_subtask = false;

    for line in body.split('\n') {
        if SUBTASK_MARKER_RE.is_match(line) {
            found_subtask = true;
        }

        if found_subtask {
            subtree_lines.push(line);
        } else {
            description_lines.push(line.trim());
        }
    }

    let description = description_lines.join("\n").trim().to_string();
    let subtree = subtree_lines.join("\n").trim().to_string();

    (description, subtree)
}

#[cfg(test)]
mod tests {
    use super::split_description_and_subtree;

    #[test]
    fn empty_body_yields_empty_halves() {
        assert_eq!(
            split_description_and_subtree(""),
            (String::new(), String::new())
        );
    }

    #[test]
    fn body_without_markers_is_all_description() {
        let (description, subtree) = split_description_and_subtree("  notes \nmore notes  ");
        assert_eq!(description, "notes\nmore notes");
        assert_eq!(subtree, "");
    }

    #[test]
    fn marker_line_starts_the_subtree() {
        let (description, subtree) =
            split_description_and_subtree("line1\nline2\n* TODO Sub\nbody");
        assert_eq!(description, "line1\nline2");
        assert_eq!(subtree, "* TODO Sub\nbody");
    }

    #[test]
    fn indented_marker_counts() {
        let (description, subtree) = split_description_and_subtree("intro\n  ** DONE Deep");
        assert_eq!(description, "intro");
        assert_eq!(subtree, "** DONE Deep");
    }

    #[test]
    fn four_stars_is_not_a_marker() {
        let (description, subtree) = split_description_and_subtree("**** not a subtask");
        assert_eq!(description, "**** not a subtask");
        assert_eq!(subtree, "");
    }

    #[test]
    fn stars_without_trailing_space_are_body_text() {
        let (description, subtree) = split_description_and_subtree("*bold* text\nstill notes");
        assert_eq!(description, "*bold* text\nstill notes");
        assert_eq!(subtree, "");
    }
}
