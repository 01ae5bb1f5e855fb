//! Outline document loader.
//!
//! # Responsibility
//! - Turn a whole outline file into its top-level (`* `) entries.
//! - Keep entry bodies verbatim so the importer can re-derive nesting
//!   through the splitter and subtree parser.

use super::parse::match_heading;
use super::OutlineNode;
use std::fs;
use std::io;
use std::path::Path;

/// A loaded outline file: ordered top-level entries.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct OutlineDocument {
    pub entries: Vec<OutlineNode>,
}

impl OutlineDocument {
    /// Parses outline text into top-level entries.
    ///
    /// An entry opens at every depth-1 heading; every following line up
    /// to the next depth-1 heading lands verbatim in its body (deeper
    /// headings included). Text before the first heading is ignored.
    pub fn parse(text: &str) -> Self {
        let mut entries: Vec<OutlineNode> = Vec::new();
        let mut body_lines: Vec<&str> = Vec::new();

        for line in text.split('\n') {
            match match_heading(line) {
                Some(heading) if heading.depth == 1 => {
                    flush_body(&mut entries, &mut body_lines);
                    entries.push(OutlineNode::new(heading.title, heading.status));
                }
                _ => body_lines.push(line),
            }
        }
        flush_body(&mut entries, &mut body_lines);

        Self { entries }
    }

    /// Loads and parses an outline file from disk.
    pub fn load(path: impl AsRef<Path>) -> io::Result<Self> {
        let text = fs::read_to_string(path)?;
        Ok(Self::parse(&text))
    }
}

fn flush_body(entries: &mut [OutlineNode], body_lines: &mut Vec<&str>) {
    if let Some(entry) = entries.last_mut() {
        entry.body = body_lines.join("\n");
    }
    body_lines.clear();
}

#[cfg(test)]
mod tests {
    use super::OutlineDocument;
    use crate::model::task::TaskStatus;

    #[test]
    fn splits_file_into_top_level_entries() {
        let doc = OutlineDocument::parse(
            "preamble\n* TODO First\nbody\n** DONE Nested\n* Second\nmore",
        );
        assert_eq!(doc.entries.len(), 2);
        assert_eq!(doc.entries[0].heading, "First");
        assert_eq!(doc.entries[0].status, Some(TaskStatus::Open));
        assert_eq!(doc.entries[0].body, "body\n** DONE Nested");
        assert_eq!(doc.entries[1].heading, "Second");
        assert_eq!(doc.entries[1].status, None);
        assert_eq!(doc.entries[1].body, "more");
    }

    #[test]
    fn empty_text_has_no_entries() {
        assert!(OutlineDocument::parse("").entries.is_empty());
        assert!(OutlineDocument::parse("just prose\nno headings").entries.is_empty());
    }
}
