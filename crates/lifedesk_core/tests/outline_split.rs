use lifedesk_core::split_description_and_subtree;

#[test]
fn empty_body_has_no_description_or_subtree() {
    assert_eq!(
        split_description_and_subtree(""),
        (String::new(), String::new())
    );
}

#[test]
fn body_without_marker_lines_is_all_description() {
    let body = "  first line \n\n second line ";
    let (description, subtree) = split_description_and_subtree(body);
    assert_eq!(description, "first line\n\nsecond line");
    assert_eq!(subtree, "");
}

#[test]
fn subtree_starts_at_the_first_marker_line() {
    let (description, subtree) = split_description_and_subtree("line1\nline2\n* TODO Sub\nbody");
    assert_eq!(description, "line1\nline2");
    assert_eq!(subtree, "* TODO Sub\nbody");
}

#[test]
fn subtree_lines_keep_their_indentation() {
    let (_, subtree) = split_description_and_subtree("intro\n** TODO Deep\n  indented body");
    assert_eq!(subtree, "** TODO Deep\n  indented body");
}

#[test]
fn description_after_marker_belongs_to_subtree() {
    let (description, subtree) =
        split_description_and_subtree("notes\n* DONE First\ntrailing text");
    assert_eq!(description, "notes");
    assert_eq!(subtree, "* DONE First\ntrailing text");
}

#[test]
fn subtree_always_begins_with_a_marker_line() {
    for body in ["only text", "a\nb\n* TODO X\nc", "* TODO X", "  ** DONE Y\nz"] {
        let (_, subtree) = split_description_and_subtree(body);
        if !subtree.is_empty() {
            let first_line = subtree.lines().next().unwrap();
            assert!(
                first_line.trim_start().starts_with('*'),
                "subtree must start at a marker line, got `{first_line}`"
            );
        }
    }
}
