use lifedesk_core::db::open_db_in_memory;
use lifedesk_core::{
    ImportService, OutlineDocument, SqliteTaskRepository, TaskListQuery, TaskRepository,
    TaskStatus,
};

const SAMPLE: &str = "\
* TODO Roadmap
Plan the quarter
** TODO Draft goals
rough notes
*** DONE Collect input
** DONE Review
* Someday
not imported
* DONE Archive";

#[test]
fn import_persists_the_whole_tree_with_parent_links() {
    let conn = open_db_in_memory().unwrap();
    let service = ImportService::new(SqliteTaskRepository::new(&conn));

    let summary = service
        .import_document(&OutlineDocument::parse(SAMPLE))
        .unwrap();
    assert_eq!(summary.imported, 5);
    assert_eq!(summary.skipped, 1);

    let repo = SqliteTaskRepository::new(&conn);
    let all = repo.list_tasks(&TaskListQuery::default()).unwrap();
    assert_eq!(all.len(), 5);

    // Depth-first pre-order: generated ids follow document order.
    let titles: Vec<&str> = all.iter().map(|task| task.title.as_str()).collect();
    assert_eq!(
        titles,
        ["Roadmap", "Draft goals", "Collect input", "Review", "Archive"]
    );

    let roadmap = &all[0];
    assert_eq!(roadmap.parent_id, None);
    assert_eq!(roadmap.status, TaskStatus::Open);
    assert_eq!(roadmap.description.as_deref(), Some("Plan the quarter"));

    let draft = &all[1];
    assert_eq!(draft.parent_id, Some(roadmap.id));
    assert_eq!(draft.description.as_deref(), Some("rough notes"));

    let collect = &all[2];
    assert_eq!(collect.parent_id, Some(draft.id));
    assert_eq!(collect.status, TaskStatus::Done);
    assert_eq!(collect.description, None);

    let review = &all[3];
    assert_eq!(review.parent_id, Some(roadmap.id));
    assert_eq!(review.status, TaskStatus::Done);

    let archive = &all[4];
    assert_eq!(archive.parent_id, None);
    assert_eq!(archive.status, TaskStatus::Done);
}

#[test]
fn every_child_row_references_an_earlier_row() {
    let conn = open_db_in_memory().unwrap();
    let service = ImportService::new(SqliteTaskRepository::new(&conn));
    service
        .import_document(&OutlineDocument::parse(SAMPLE))
        .unwrap();

    let repo = SqliteTaskRepository::new(&conn);
    for task in repo.list_tasks(&TaskListQuery::default()).unwrap() {
        if let Some(parent_id) = task.parent_id {
            assert!(parent_id < task.id, "parent must be inserted before child");
        }
    }
}

#[test]
fn entries_without_status_keyword_are_not_persisted() {
    let conn = open_db_in_memory().unwrap();
    let service = ImportService::new(SqliteTaskRepository::new(&conn));

    let summary = service
        .import_document(&OutlineDocument::parse(
            "* Plain heading\nbody text\n** TODO Would-be child",
        ))
        .unwrap();
    assert_eq!(summary.imported, 0);
    assert_eq!(summary.skipped, 1);

    let repo = SqliteTaskRepository::new(&conn);
    assert!(repo.list_tasks(&TaskListQuery::default()).unwrap().is_empty());
}

#[test]
fn nested_heading_without_keyword_defaults_to_open() {
    let conn = open_db_in_memory().unwrap();
    let service = ImportService::new(SqliteTaskRepository::new(&conn));

    service
        .import_document(&OutlineDocument::parse("* TODO Parent\n** Plain child"))
        .unwrap();

    let repo = SqliteTaskRepository::new(&conn);
    let all = repo.list_tasks(&TaskListQuery::default()).unwrap();
    assert_eq!(all.len(), 2);
    assert_eq!(all[1].title, "Plain child");
    assert_eq!(all[1].status, TaskStatus::Open);
    assert_eq!(all[1].parent_id, Some(all[0].id));
}

#[test]
fn empty_document_imports_nothing() {
    let conn = open_db_in_memory().unwrap();
    let service = ImportService::new(SqliteTaskRepository::new(&conn));

    let summary = service
        .import_document(&OutlineDocument::parse(""))
        .unwrap();
    assert_eq!(summary.imported, 0);
    assert_eq!(summary.skipped, 0);
}
