//! Row models for the four flat tables: personal info, projects, daily
//! logs and bookmarks.
//!
//! `technologies` and `tags` are stored as comma-separated TEXT; the
//! normalization helpers here are the single place that format is
//! encoded and decoded.

use serde::{Deserialize, Serialize};

/// Generated row id shared by all flat tables.
pub type RecordId = i64;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PersonalInfo {
    pub id: RecordId,
    pub name: String,
    pub age: Option<i64>,
    pub bio: Option<String>,
    pub created_at: i64,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Project {
    pub id: RecordId,
    pub title: String,
    pub description: Option<String>,
    pub technologies: Vec<String>,
    pub created_at: i64,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DailyLog {
    pub id: RecordId,
    pub entry: String,
    pub created_at: i64,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Bookmark {
    pub id: RecordId,
    pub title: String,
    pub url: String,
    pub tags: Vec<String>,
    pub created_at: i64,
}

/// Splits a stored comma-separated list, dropping empty entries.
pub fn split_csv(value: &str) -> Vec<String> {
    value
        .split(',')
        .map(str::trim)
        .filter(|item| !item.is_empty())
        .map(str::to_string)
        .collect()
}

/// Joins list values into the stored comma-separated form.
pub fn join_csv(values: &[String]) -> String {
    values
        .iter()
        .map(|item| item.trim())
        .filter(|item| !item.is_empty())
        .collect::<Vec<_>>()
        .join(",")
}
