//! Core data models used throughout Report Desk.
//!
//! These types represent the projects and reports that flow through the
//! storage layer, the HTTP API, and the repeated-word analysis.
//!
//! JSON field names use camelCase (`projectId`) to match the wire format
//! of the original API.

use serde::{Deserialize, Serialize};

/// A project grouping an arbitrary number of reports.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Project {
    pub id: String,
    pub name: String,
    pub description: Option<String>,
}

/// A free-text report belonging to a project.
///
/// `text` is arbitrary UTF-8 and may be empty. The analysis layer only
/// ever inspects `text`; `id` and `project_id` are carried through
/// unchanged.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Report {
    pub id: String,
    pub text: String,
    pub project_id: String,
}
