//! SQLite-backed [`Store`] implementation.
//!
//! Maps each [`Store`] operation to a single SQL statement against the
//! projects and reports tables. Update and delete operations report
//! whether a row matched via `rows_affected`.

use anyhow::Result;
use async_trait::async_trait;
use sqlx::{Row, SqlitePool};

use report_desk_core::models::{Project, Report};
use report_desk_core::store::Store;

/// SQLite implementation of the [`Store`] trait.
pub struct SqliteStore {
    pool: SqlitePool,
}

impl SqliteStore {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }
}

fn project_from_row(row: &sqlx::sqlite::SqliteRow) -> Project {
    Project {
        id: row.get("id"),
        name: row.get("name"),
        description: row.get("description"),
    }
}

fn report_from_row(row: &sqlx::sqlite::SqliteRow) -> Report {
    // A NULL text column surfaces as the empty string, per the
    // detector's read contract.
    let text: Option<String> = row.get("text");
    Report {
        id: row.get("id"),
        text: text.unwrap_or_default(),
        project_id: row.get("project_id"),
    }
}

#[async_trait]
impl Store for SqliteStore {
    async fn list_projects(&self) -> Result<Vec<Project>> {
        let rows = sqlx::query("SELECT id, name, description FROM projects ORDER BY rowid")
            .fetch_all(&self.pool)
            .await?;
        Ok(rows.iter().map(project_from_row).collect())
    }

    async fn get_project(&self, id: &str) -> Result<Option<Project>> {
        let row = sqlx::query("SELECT id, name, description FROM projects WHERE id = ?")
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;
        Ok(row.as_ref().map(project_from_row))
    }

    async fn create_project(&self, project: &Project) -> Result<()> {
        sqlx::query("INSERT INTO projects (id, name, description) VALUES (?, ?, ?)")
            .bind(&project.id)
            .bind(&project.name)
            .bind(&project.description)
            .execute(&self.pool)
            .await?;
        Ok(())
    }

    async fn update_project(
        &self,
        id: &str,
        name: &str,
        description: Option<&str>,
    ) -> Result<bool> {
        let result = sqlx::query("UPDATE projects SET name = ?, description = ? WHERE id = ?")
            .bind(name)
            .bind(description)
            .bind(id)
            .execute(&self.pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }

    async fn delete_project(&self, id: &str) -> Result<bool> {
        let result = sqlx::query("DELETE FROM projects WHERE id = ?")
            .bind(id)
            .execute(&self.pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }

    async fn reports_for_project(&self, project_id: &str) -> Result<Vec<Report>> {
        let rows = sqlx::query(
            "SELECT id, text, project_id FROM reports WHERE project_id = ? ORDER BY rowid",
        )
        .bind(project_id)
        .fetch_all(&self.pool)
        .await?;
        Ok(rows.iter().map(report_from_row).collect())
    }

    async fn get_report(&self, id: &str) -> Result<Option<Report>> {
        let row = sqlx::query("SELECT id, text, project_id FROM reports WHERE id = ?")
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;
        Ok(row.as_ref().map(report_from_row))
    }

    async fn create_report(&self, report: &Report) -> Result<()> {
        sqlx::query("INSERT INTO reports (id, text, project_id) VALUES (?, ?, ?)")
            .bind(&report.id)
            .bind(&report.text)
            .bind(&report.project_id)
            .execute(&self.pool)
            .await?;
        Ok(())
    }

    async fn update_report(&self, id: &str, text: &str) -> Result<bool> {
        let result = sqlx::query("UPDATE reports SET text = ? WHERE id = ?")
            .bind(text)
            .bind(id)
            .execute(&self.pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }

    async fn delete_report(&self, id: &str) -> Result<bool> {
        let result = sqlx::query("DELETE FROM reports WHERE id = ?")
            .bind(id)
            .execute(&self.pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }

    async fn all_reports(&self) -> Result<Vec<Report>> {
        let rows = sqlx::query("SELECT id, text, project_id FROM reports ORDER BY rowid")
            .fetch_all(&self.pool)
            .await?;
        Ok(rows.iter().map(report_from_row).collect())
    }
}
