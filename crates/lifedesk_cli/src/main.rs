//! lifedesk command-line entry point.
//!
//! # Responsibility
//! - Parse command-line options, bootstrap logging and the database.
//! - Dispatch to the interactive menu or to one-shot subcommands.

mod menu;
mod render;

use clap::{Parser, Subcommand};
use colored::Colorize;
use log::info;
use lifedesk_core::db::open_db;
use lifedesk_core::{
    default_log_level, export_to_file, init_logging, ImportService, OutlineDocument,
    SqliteTaskRepository,
};
use std::path::PathBuf;
use std::process::ExitCode;

#[derive(Parser)]
#[command(name = "lifedesk", version, about = "Personal data manager")]
struct Cli {
    /// Database file (default: the platform data directory).
    #[arg(long, value_name = "PATH")]
    db: Option<PathBuf>,
    /// Log directory (default: next to the database).
    #[arg(long, value_name = "DIR")]
    log_dir: Option<PathBuf>,
    /// Log level: trace|debug|info|warn|error.
    #[arg(long, value_name = "LEVEL")]
    log_level: Option<String>,
    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand)]
enum Command {
    /// Import an org outline file into the tasks table.
    Import {
        /// Outline file to import.
        file: PathBuf,
    },
    /// Export every table to one JSON file.
    Export {
        /// Output file path.
        #[arg(long, default_value = "database_export.json")]
        output: PathBuf,
    },
}

fn main() -> ExitCode {
    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(message) => {
            eprintln!("{} {message}", "error:".red().bold());
            ExitCode::FAILURE
        }
    }
}

fn run() -> Result<(), String> {
    let cli = Cli::parse();

    let db_path = cli.db.clone().unwrap_or_else(default_db_path);
    let log_dir = cli
        .log_dir
        .clone()
        .unwrap_or_else(|| db_path.parent().map_or_else(|| PathBuf::from("logs"), |dir| dir.join("logs")));
    init_logging(
        cli.log_level.as_deref().unwrap_or_else(|| default_log_level()),
        &log_dir,
    )?;

    if let Some(parent) = db_path.parent() {
        std::fs::create_dir_all(parent)
            .map_err(|err| format!("cannot create `{}`: {err}", parent.display()))?;
    }
    let conn = open_db(&db_path)
        .map_err(|err| format!("cannot open database at `{}`: {err}", db_path.display()))?;

    match cli.command {
        Some(Command::Import { file }) => {
            let document = OutlineDocument::load(&file)
                .map_err(|err| format!("cannot read `{}`: {err}", file.display()))?;
            let service = ImportService::new(SqliteTaskRepository::new(&conn));
            let summary = service
                .import_document(&document)
                .map_err(|err| err.to_string())?;
            info!(
                "event=cli_import module=cli status=ok file={} imported={} skipped={}",
                file.display(),
                summary.imported,
                summary.skipped
            );
            println!(
                "{}",
                format!(
                    "Imported {} tasks ({} entries skipped)",
                    summary.imported, summary.skipped
                )
                .green()
            );
            Ok(())
        }
        Some(Command::Export { output }) => {
            export_to_file(&conn, &output).map_err(|err| err.to_string())?;
            info!(
                "event=cli_export module=cli status=ok path={}",
                output.display()
            );
            println!(
                "{}",
                format!("All tables exported to {}", output.display()).green()
            );
            Ok(())
        }
        None => menu::run(&conn),
    }
}

fn default_db_path() -> PathBuf {
    dirs::data_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("lifedesk")
        .join("lifedesk.db")
}
