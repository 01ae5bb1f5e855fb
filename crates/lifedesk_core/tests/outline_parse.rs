use lifedesk_core::{parse_subtasks, OutlineNode, TaskStatus};

#[test]
fn blank_input_yields_empty_forest() {
    assert!(parse_subtasks("").is_empty());
    assert!(parse_subtasks("   \n  ").is_empty());
}

#[test]
fn parent_with_two_children_in_document_order() {
    let forest =
        parse_subtasks("* TODO Parent\nSome text\n** TODO Child A\nchild body\n** DONE Child B");

    assert_eq!(forest.len(), 1);
    let parent = &forest[0];
    assert_eq!(parent.heading, "Parent");
    assert_eq!(parent.status, Some(TaskStatus::Open));
    assert_eq!(parent.body, "Some text");

    assert_eq!(parent.children.len(), 2);
    assert_eq!(parent.children[0].heading, "Child A");
    assert_eq!(parent.children[0].status, Some(TaskStatus::Open));
    assert_eq!(parent.children[0].body, "child body");
    assert_eq!(parent.children[1].heading, "Child B");
    assert_eq!(parent.children[1].status, Some(TaskStatus::Done));
    assert_eq!(parent.children[1].body, "");
}

#[test]
fn three_levels_nest_under_each_other() {
    let forest = parse_subtasks("* TODO A\n** TODO B\n*** DONE C\n* TODO D");
    assert_eq!(forest.len(), 2);
    assert_eq!(forest[0].heading, "A");
    assert_eq!(forest[0].children.len(), 1);
    assert_eq!(forest[0].children[0].heading, "B");
    assert_eq!(forest[0].children[0].children.len(), 1);
    assert_eq!(forest[0].children[0].children[0].heading, "C");
    assert_eq!(forest[1].heading, "D");
}

#[test]
fn depth_jump_then_shallower_sibling_attaches_to_the_same_parent() {
    // C skips a level; B then closes C and still hangs off A.
    let forest = parse_subtasks("* TODO A\n*** TODO C\n** TODO B");
    assert_eq!(forest.len(), 1);
    let children: Vec<&str> = forest[0]
        .children
        .iter()
        .map(|node| node.heading.as_str())
        .collect();
    assert_eq!(children, ["C", "B"]);
}

#[test]
fn shallower_heading_closes_the_open_chain() {
    let forest = parse_subtasks("** TODO Deep first\n* TODO Shallow after");
    assert_eq!(forest.len(), 2);
    assert_eq!(forest[0].heading, "Deep first");
    assert!(forest[0].children.is_empty());
    assert_eq!(forest[1].heading, "Shallow after");
}

#[test]
fn sibling_order_is_preserved_at_every_level() {
    let forest = parse_subtasks(
        "* TODO One\n** TODO One-a\n** TODO One-b\n** TODO One-c\n* TODO Two\n* TODO Three",
    );
    let roots: Vec<&str> = forest.iter().map(|n| n.heading.as_str()).collect();
    assert_eq!(roots, ["One", "Two", "Three"]);
    let children: Vec<&str> = forest[0]
        .children
        .iter()
        .map(|n| n.heading.as_str())
        .collect();
    assert_eq!(children, ["One-a", "One-b", "One-c"]);
}

#[test]
fn children_are_always_strictly_deeper_than_their_parent() {
    // Equal-depth runs never nest, whatever their status keywords.
    let forest = parse_subtasks("** TODO A\n** DONE B\n** TODO C");
    assert_eq!(forest.len(), 3);
    assert!(forest.iter().all(|node| node.children.is_empty()));
}

#[test]
fn body_lines_are_trimmed_and_joined() {
    let forest = parse_subtasks("* TODO Task\n  line one  \n\tline two\t");
    assert_eq!(forest[0].body, "line one\nline two");
}

#[test]
fn heading_without_keyword_has_no_status() {
    let forest = parse_subtasks("* Groceries\n** TODO Milk");
    assert_eq!(forest[0].status, None);
    assert_eq!(forest[0].children[0].status, Some(TaskStatus::Open));
}

#[test]
fn last_node_body_is_finalized_after_the_loop() {
    let forest = parse_subtasks("* TODO Only\ntail line one\ntail line two");
    assert_eq!(forest[0].body, "tail line one\ntail line two");
}

fn max_forest_depth(forest: &[OutlineNode]) -> usize {
    forest
        .iter()
        .map(|node| 1 + max_forest_depth(&node.children))
        .max()
        .unwrap_or(0)
}

#[test]
fn malformed_depth_sequences_flatten_instead_of_failing() {
    let forest = parse_subtasks("*** TODO Deep\n* TODO Shallow\n**** TODO Deeper");
    assert_eq!(forest.len(), 2);
    assert!(max_forest_depth(&forest) <= 2);
}
