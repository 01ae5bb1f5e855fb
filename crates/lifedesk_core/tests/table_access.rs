use lifedesk_core::db::open_db_in_memory;
use lifedesk_core::repo::records;
use lifedesk_core::repo::tables::{fetch_table, list_tables, search_table, TableError};

#[test]
fn list_tables_exposes_the_user_tables() {
    let conn = open_db_in_memory().unwrap();
    let names = list_tables(&conn).unwrap();
    for expected in ["bookmarks", "daily_logs", "personal_info", "projects", "tasks"] {
        assert!(names.iter().any(|name| name == expected), "missing {expected}");
    }
    assert!(names.iter().all(|name| !name.starts_with("sqlite_")));
}

#[test]
fn fetch_table_returns_columns_and_rows() {
    let conn = open_db_in_memory().unwrap();
    records::insert_daily_log(&conn, "a quiet day").unwrap();

    let dump = fetch_table(&conn, "daily_logs").unwrap();
    assert_eq!(dump.columns, ["id", "entry", "created_at"]);
    assert_eq!(dump.rows.len(), 1);
    assert_eq!(dump.rows[0][1], serde_json::json!("a quiet day"));
}

#[test]
fn fetch_unknown_table_is_rejected() {
    let conn = open_db_in_memory().unwrap();
    let err = fetch_table(&conn, "secrets; DROP TABLE tasks").unwrap_err();
    assert!(matches!(err, TableError::UnknownTable(_)));
}

#[test]
fn search_matches_substrings_case_insensitively() {
    let conn = open_db_in_memory().unwrap();
    records::insert_bookmark(&conn, "Rust Book", "https://doc.rust-lang.org", &[]).unwrap();
    records::insert_bookmark(&conn, "Cooking", "https://example.com", &[]).unwrap();

    let hits = search_table(&conn, "bookmarks", "title", "rust").unwrap();
    assert_eq!(hits.rows.len(), 1);
    assert_eq!(hits.rows[0][1], serde_json::json!("Rust Book"));

    let none = search_table(&conn, "bookmarks", "title", "gardening").unwrap();
    assert!(none.rows.is_empty());
}

#[test]
fn search_unknown_column_is_rejected() {
    let conn = open_db_in_memory().unwrap();
    let err = search_table(&conn, "bookmarks", "rating", "5").unwrap_err();
    assert!(matches!(
        err,
        TableError::UnknownColumn { table, column } if table == "bookmarks" && column == "rating"
    ));
}
