use lifedesk_core::db::open_db_in_memory;
use lifedesk_core::repo::records;
use lifedesk_core::{export_all, export_to_file, NewTask, SqliteTaskRepository, TaskRepository};

#[test]
fn export_contains_every_table_as_row_objects() {
    let conn = open_db_in_memory().unwrap();
    records::insert_daily_log(&conn, "exported entry").unwrap();
    let repo = SqliteTaskRepository::new(&conn);
    repo.insert_task(&NewTask::titled("exported task")).unwrap();

    let document = export_all(&conn).unwrap();
    let tables = document.as_object().unwrap();
    for expected in ["bookmarks", "daily_logs", "personal_info", "projects", "tasks"] {
        assert!(tables.contains_key(expected), "missing {expected}");
    }

    let logs = tables["daily_logs"].as_array().unwrap();
    assert_eq!(logs.len(), 1);
    assert_eq!(logs[0]["entry"], serde_json::json!("exported entry"));
    assert!(logs[0]["created_at"].is_i64());

    let tasks = tables["tasks"].as_array().unwrap();
    assert_eq!(tasks[0]["title"], serde_json::json!("exported task"));
    assert_eq!(tasks[0]["status"], serde_json::json!("open"));
    assert!(tasks[0]["parent_id"].is_null());
}

#[test]
fn export_to_file_writes_parseable_json() {
    let conn = open_db_in_memory().unwrap();
    records::insert_bookmark(&conn, "saved", "https://example.com", &[]).unwrap();

    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("database_export.json");
    export_to_file(&conn, &path).unwrap();

    let text = std::fs::read_to_string(&path).unwrap();
    let parsed: serde_json::Value = serde_json::from_str(&text).unwrap();
    assert_eq!(
        parsed["bookmarks"][0]["url"],
        serde_json::json!("https://example.com")
    );
}
