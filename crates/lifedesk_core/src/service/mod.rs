//! Core use-case services.
//!
//! # Responsibility
//! - Orchestrate outline parsing and repository calls into use-case
//!   level APIs.
//! - Keep the CLI decoupled from parsing and storage details.

pub mod import;
