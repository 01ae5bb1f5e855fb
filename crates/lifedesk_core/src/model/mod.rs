//! Domain models for the five user-facing tables.
//!
//! # Responsibility
//! - Define canonical row shapes used by repositories and the CLI.
//! - Keep status/tag normalization helpers next to the data they shape.
//!
//! # Invariants
//! - Row ids are SQLite rowids: generated on insert, never reused by core.
//! - Task rows form a tree via `parent_id`; cycles are impossible because
//!   a parent id must already exist at insert time.

pub mod records;
pub mod task;
