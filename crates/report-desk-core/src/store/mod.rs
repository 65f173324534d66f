//! Storage abstraction for Report Desk.
//!
//! The [`Store`] trait defines all persistence operations needed by the
//! HTTP layer and the CLI commands, enabling pluggable backends (SQLite,
//! in-memory). The repeated-word detector itself never touches a store;
//! its callers fetch a materialized corpus via [`Store::all_reports`]
//! and hand it to [`analysis::filter_repeated`](crate::analysis::filter_repeated).
//!
//! Implementations must be `Send + Sync` to work with async runtimes.

pub mod memory;

use anyhow::Result;
use async_trait::async_trait;

use crate::models::{Project, Report};

/// Abstract storage backend for Report Desk.
///
/// All operations are async (via `async-trait`). Update and delete
/// methods return `false` when no row matched, which the HTTP layer
/// maps to `404 Not Found`.
#[async_trait]
pub trait Store: Send + Sync {
    /// List all projects.
    async fn list_projects(&self) -> Result<Vec<Project>>;

    /// Fetch a single project by ID.
    async fn get_project(&self, id: &str) -> Result<Option<Project>>;

    /// Insert a new project.
    async fn create_project(&self, project: &Project) -> Result<()>;

    /// Update a project's name and description. Returns `false` when the
    /// project does not exist.
    async fn update_project(
        &self,
        id: &str,
        name: &str,
        description: Option<&str>,
    ) -> Result<bool>;

    /// Delete a project. Returns `false` when the project does not exist.
    async fn delete_project(&self, id: &str) -> Result<bool>;

    /// List all reports belonging to one project.
    async fn reports_for_project(&self, project_id: &str) -> Result<Vec<Report>>;

    /// Fetch a single report by ID.
    async fn get_report(&self, id: &str) -> Result<Option<Report>>;

    /// Insert a new report.
    async fn create_report(&self, report: &Report) -> Result<()>;

    /// Update a report's text. Returns `false` when the report does not exist.
    async fn update_report(&self, id: &str, text: &str) -> Result<bool>;

    /// Delete a report. Returns `false` when the report does not exist.
    async fn delete_report(&self, id: &str) -> Result<bool>;

    /// Fetch the full report corpus as a finite, materialized sequence.
    ///
    /// This is the detector's read contract: every report is returned
    /// with `id`, `text`, and `project_id` present, and a NULL text
    /// column surfaces as the empty string.
    async fn all_reports(&self) -> Result<Vec<Report>>;
}
