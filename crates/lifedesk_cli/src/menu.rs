//! Interactive menu loop.
//!
//! # Responsibility
//! - Drive the add/view/edit/search/export/import flows over stdin.
//! - Keep every prompt and colored print in one place; storage calls go
//!   through `lifedesk_core`.
//!
//! # Invariants
//! - Storage errors are reported in red and return to the menu; only
//!   stdin EOF ends the loop.

use crate::render::format_table;
use colored::Colorize;
use lifedesk_core::repo::tables::{fetch_table, list_tables, search_table};
use lifedesk_core::repo::{records, RepoError};
use lifedesk_core::{
    export_to_file, ImportService, NewTask, OutlineDocument, SqliteTaskRepository, TaskRepository,
};
use rusqlite::Connection;
use std::io::{self, BufRead, Write};

const EXPORT_FILE: &str = "database_export.json";

/// Runs the interactive menu until the user exits or stdin closes.
pub fn run(conn: &Connection) -> Result<(), String> {
    let stdin = io::stdin();
    let mut lines = stdin.lock().lines();

    loop {
        print_banner();
        print_main_menu();

        let Some(choice) = prompt(&mut lines, "Choose an option: ")? else {
            return Ok(());
        };

        match choice.as_str() {
            "1" => add_loop(conn, &mut lines)?,
            "2" => view_data(conn, &mut lines)?,
            "3" => edit_personal_info(conn, &mut lines)?,
            "4" => search_data(conn, &mut lines)?,
            "5" => match export_to_file(conn, EXPORT_FILE) {
                Ok(()) => success(&format!("All tables exported to {EXPORT_FILE}")),
                Err(err) => failure(&err.to_string()),
            },
            "6" => import_org_file(conn, &mut lines)?,
            "7" => {
                println!("{}", "\nGoodbye, see you next time!\n".red());
                return Ok(());
            }
            _ => failure("Invalid choice. Please try again."),
        }
    }
}

fn print_banner() {
    println!("{}", "=".repeat(40).cyan());
    println!("{}", "        Personal Data Manager".yellow());
    println!("{}", "=".repeat(40).cyan());
}

fn print_main_menu() {
    println!(" {} Add Data", "[1]".green());
    println!(" {} View Data", "[2]".blue());
    println!(" {} Edit Personal Info", "[3]".magenta());
    println!(" {} Search Data", "[4]".cyan());
    println!(" {} Export Data to JSON", "[5]".yellow());
    println!(" {} Import Tasks from Org File", "[6]".green());
    println!(" {} Exit", "[7]".red());
    println!("{}", "=".repeat(40).cyan());
}

fn print_add_menu() {
    println!(" {} Add Personal Info", "[1]".green());
    println!(" {} Add Project", "[2]".green());
    println!(" {} Add Daily Log", "[3]".green());
    println!(" {} Add Bookmark", "[4]".green());
    println!(" {} Add Task", "[5]".green());
    println!(" {} Back to Main Menu", "[6]".red());
    println!("{}", "=".repeat(40).cyan());
}

type Lines<'a> = io::Lines<io::StdinLock<'a>>;

fn add_loop(conn: &Connection, lines: &mut Lines<'_>) -> Result<(), String> {
    loop {
        print_banner();
        print_add_menu();

        let Some(choice) = prompt(lines, "Choose what to add: ")? else {
            return Ok(());
        };

        let outcome = match choice.as_str() {
            "1" => add_personal_info(conn, lines)?,
            "2" => add_project(conn, lines)?,
            "3" => add_daily_log(conn, lines)?,
            "4" => add_bookmark(conn, lines)?,
            "5" => add_task(conn, lines)?,
            "6" => return Ok(()),
            _ => {
                failure("Invalid choice. Try again.");
                continue;
            }
        };
        match outcome {
            Ok(message) => success(&message),
            Err(err) => failure(&err.to_string()),
        }
    }
}

fn add_personal_info(
    conn: &Connection,
    lines: &mut Lines<'_>,
) -> Result<Result<String, RepoError>, String> {
    let Some(name) = prompt(lines, "Enter your name: ")? else {
        return Ok(Ok(String::new()));
    };
    let age = prompt(lines, "Enter your age: ")?
        .filter(|value| !value.is_empty())
        .and_then(|value| value.parse::<i64>().ok());
    let bio = prompt(lines, "Enter a short bio: ")?.filter(|value| !value.is_empty());

    Ok(
        records::insert_personal_info(conn, &name, age, bio.as_deref())
            .map(|_| "Personal info added!".to_string()),
    )
}

fn add_project(
    conn: &Connection,
    lines: &mut Lines<'_>,
) -> Result<Result<String, RepoError>, String> {
    let Some(title) = prompt(lines, "Enter project title: ")? else {
        return Ok(Ok(String::new()));
    };
    let description = prompt(lines, "Enter project description: ")?.filter(|v| !v.is_empty());
    let technologies = prompt(lines, "Enter technologies used (comma-separated): ")?
        .map(|value| split_input_list(&value))
        .unwrap_or_default();

    Ok(
        records::insert_project(conn, &title, description.as_deref(), &technologies)
            .map(|_| "Project added!".to_string()),
    )
}

fn add_daily_log(
    conn: &Connection,
    lines: &mut Lines<'_>,
) -> Result<Result<String, RepoError>, String> {
    let Some(entry) = prompt(lines, "Write your journal entry: ")? else {
        return Ok(Ok(String::new()));
    };
    Ok(records::insert_daily_log(conn, &entry).map(|_| "Daily log added!".to_string()))
}

fn add_bookmark(
    conn: &Connection,
    lines: &mut Lines<'_>,
) -> Result<Result<String, RepoError>, String> {
    let Some(title) = prompt(lines, "Enter bookmark title: ")? else {
        return Ok(Ok(String::new()));
    };
    let Some(url) = prompt(lines, "Enter URL: ")? else {
        return Ok(Ok(String::new()));
    };
    let tags = prompt(lines, "Enter tags (comma-separated): ")?
        .map(|value| split_input_list(&value))
        .unwrap_or_default();

    Ok(records::insert_bookmark(conn, &title, &url, &tags).map(|_| "Bookmark added!".to_string()))
}

fn add_task(
    conn: &Connection,
    lines: &mut Lines<'_>,
) -> Result<Result<String, RepoError>, String> {
    let Some(title) = prompt(lines, "Enter task name: ")? else {
        return Ok(Ok(String::new()));
    };
    let description = prompt(lines, "Enter description or leave blank: ")?.filter(|v| !v.is_empty());

    let repo = SqliteTaskRepository::new(conn);
    let mut task = NewTask::titled(title);
    task.description = description;
    Ok(repo.insert_task(&task).map(|_| "Task added!".to_string()))
}

fn view_data(conn: &Connection, lines: &mut Lines<'_>) -> Result<(), String> {
    print_table_names(conn);
    let Some(table) = prompt(lines, "Enter table name to view: ")? else {
        return Ok(());
    };
    show_table(conn, &table);
    Ok(())
}

fn edit_personal_info(conn: &Connection, lines: &mut Lines<'_>) -> Result<(), String> {
    show_table(conn, "personal_info");

    let Some(id_text) = prompt(lines, "Enter the ID of the record to edit: ")? else {
        return Ok(());
    };
    let Ok(id) = id_text.parse::<i64>() else {
        failure("Invalid id.");
        return Ok(());
    };
    let Some(name) = prompt(lines, "Enter the new name: ")? else {
        return Ok(());
    };
    let age = prompt(lines, "Enter the new age: ")?
        .filter(|value| !value.is_empty())
        .and_then(|value| value.parse::<i64>().ok());
    let bio = prompt(lines, "Enter the new bio: ")?.filter(|value| !value.is_empty());

    match records::update_personal_info(conn, id, &name, age, bio.as_deref()) {
        Ok(()) => success("Personal info updated!"),
        Err(err) => failure(&err.to_string()),
    }
    Ok(())
}

fn search_data(conn: &Connection, lines: &mut Lines<'_>) -> Result<(), String> {
    print_table_names(conn);
    let Some(table) = prompt(lines, "Enter table name to search: ")? else {
        return Ok(());
    };
    show_table(conn, &table);

    let Some(column) = prompt(lines, &format!("Enter the column name to search in {table}: "))?
    else {
        return Ok(());
    };
    let Some(keyword) = prompt(lines, &format!("Enter the keyword to search in {column}: "))?
    else {
        return Ok(());
    };

    match search_table(conn, &table, &column, &keyword) {
        Ok(dump) => match format_table(&dump) {
            Some(grid) => println!("{grid}"),
            None => println!("No matching data found."),
        },
        Err(err) => failure(&err.to_string()),
    }
    Ok(())
}

fn import_org_file(conn: &Connection, lines: &mut Lines<'_>) -> Result<(), String> {
    let Some(path) = prompt(lines, "Enter path of the org file to import: ")? else {
        return Ok(());
    };
    let document = match OutlineDocument::load(&path) {
        Ok(document) => document,
        Err(err) => {
            failure(&format!("cannot read `{path}`: {err}"));
            return Ok(());
        }
    };
    let service = ImportService::new(SqliteTaskRepository::new(conn));
    match service.import_document(&document) {
        Ok(summary) => success(&format!(
            "Imported {} tasks ({} entries skipped)",
            summary.imported, summary.skipped
        )),
        Err(err) => failure(&err.to_string()),
    }
    Ok(())
}

fn print_table_names(conn: &Connection) {
    match list_tables(conn) {
        Ok(names) => println!("{} ({})", "Table names:".blue(), names.join(", ").cyan()),
        Err(err) => failure(&err.to_string()),
    }
}

fn show_table(conn: &Connection, table: &str) {
    match fetch_table(conn, table) {
        Ok(dump) => match format_table(&dump) {
            Some(grid) => println!("{grid}"),
            None => println!("No data found."),
        },
        Err(err) => failure(&err.to_string()),
    }
}

/// Prints `label` and reads one trimmed line; `None` means stdin closed.
fn prompt(lines: &mut Lines<'_>, label: &str) -> Result<Option<String>, String> {
    print!("{}", label.yellow());
    io::stdout()
        .flush()
        .map_err(|err| format!("cannot flush stdout: {err}"))?;
    match lines.next() {
        Some(Ok(line)) => Ok(Some(line.trim().to_string())),
        Some(Err(err)) => Err(format!("cannot read stdin: {err}")),
        None => Ok(None),
    }
}

fn split_input_list(value: &str) -> Vec<String> {
    value
        .split(',')
        .map(str::trim)
        .filter(|item| !item.is_empty())
        .map(str::to_string)
        .collect()
}

fn success(message: &str) {
    if !message.is_empty() {
        println!("{}", message.green());
    }
}

fn failure(message: &str) {
    println!("{}", message.red());
}
