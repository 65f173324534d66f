//! In-memory [`Store`] implementation for testing.
//!
//! Uses `Vec`s behind `std::sync::RwLock` for thread safety. Insertion
//! order is preserved, so `all_reports` returns the corpus in the order
//! reports were created — the same ordering guarantee the SQLite store
//! provides via its rowid scan.

use std::sync::RwLock;

use anyhow::Result;
use async_trait::async_trait;

use crate::models::{Project, Report};

use super::Store;

/// In-memory store for tests and ephemeral environments.
#[derive(Default)]
pub struct InMemoryStore {
    projects: RwLock<Vec<Project>>,
    reports: RwLock<Vec<Report>>,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl Store for InMemoryStore {
    async fn list_projects(&self) -> Result<Vec<Project>> {
        Ok(self.projects.read().unwrap().clone())
    }

    async fn get_project(&self, id: &str) -> Result<Option<Project>> {
        Ok(self
            .projects
            .read()
            .unwrap()
            .iter()
            .find(|p| p.id == id)
            .cloned())
    }

    async fn create_project(&self, project: &Project) -> Result<()> {
        self.projects.write().unwrap().push(project.clone());
        Ok(())
    }

    async fn update_project(
        &self,
        id: &str,
        name: &str,
        description: Option<&str>,
    ) -> Result<bool> {
        let mut projects = self.projects.write().unwrap();
        match projects.iter_mut().find(|p| p.id == id) {
            Some(project) => {
                project.name = name.to_string();
                project.description = description.map(str::to_string);
                Ok(true)
            }
            None => Ok(false),
        }
    }

    async fn delete_project(&self, id: &str) -> Result<bool> {
        let mut projects = self.projects.write().unwrap();
        let before = projects.len();
        projects.retain(|p| p.id != id);
        Ok(projects.len() < before)
    }

    async fn reports_for_project(&self, project_id: &str) -> Result<Vec<Report>> {
        Ok(self
            .reports
            .read()
            .unwrap()
            .iter()
            .filter(|r| r.project_id == project_id)
            .cloned()
            .collect())
    }

    async fn get_report(&self, id: &str) -> Result<Option<Report>> {
        Ok(self
            .reports
            .read()
            .unwrap()
            .iter()
            .find(|r| r.id == id)
            .cloned())
    }

    async fn create_report(&self, report: &Report) -> Result<()> {
        self.reports.write().unwrap().push(report.clone());
        Ok(())
    }

    async fn update_report(&self, id: &str, text: &str) -> Result<bool> {
        let mut reports = self.reports.write().unwrap();
        match reports.iter_mut().find(|r| r.id == id) {
            Some(report) => {
                report.text = text.to_string();
                Ok(true)
            }
            None => Ok(false),
        }
    }

    async fn delete_report(&self, id: &str) -> Result<bool> {
        let mut reports = self.reports.write().unwrap();
        let before = reports.len();
        reports.retain(|r| r.id != id);
        Ok(reports.len() < before)
    }

    async fn all_reports(&self) -> Result<Vec<Report>> {
        Ok(self.reports.read().unwrap().clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analysis::filter_repeated;

    fn report(id: &str, text: &str, project_id: &str) -> Report {
        Report {
            id: id.to_string(),
            text: text.to_string(),
            project_id: project_id.to_string(),
        }
    }

    #[tokio::test]
    async fn test_project_crud_roundtrip() {
        let store = InMemoryStore::new();
        let project = Project {
            id: "p1".to_string(),
            name: "Alpha".to_string(),
            description: Some("first".to_string()),
        };

        store.create_project(&project).await.unwrap();
        assert_eq!(store.get_project("p1").await.unwrap(), Some(project));

        assert!(store.update_project("p1", "Beta", None).await.unwrap());
        let updated = store.get_project("p1").await.unwrap().unwrap();
        assert_eq!(updated.name, "Beta");
        assert_eq!(updated.description, None);

        assert!(store.delete_project("p1").await.unwrap());
        assert!(!store.delete_project("p1").await.unwrap());
        assert_eq!(store.get_project("p1").await.unwrap(), None);
    }

    #[tokio::test]
    async fn test_report_update_missing_returns_false() {
        let store = InMemoryStore::new();
        assert!(!store.update_report("ghost", "text").await.unwrap());
    }

    #[tokio::test]
    async fn test_all_reports_preserves_insertion_order() {
        let store = InMemoryStore::new();
        for id in ["r1", "r2", "r3"] {
            store.create_report(&report(id, "", "p1")).await.unwrap();
        }
        let ids: Vec<String> = store
            .all_reports()
            .await
            .unwrap()
            .into_iter()
            .map(|r| r.id)
            .collect();
        assert_eq!(ids, ["r1", "r2", "r3"]);
    }

    #[tokio::test]
    async fn test_reports_for_project_filters() {
        let store = InMemoryStore::new();
        store.create_report(&report("r1", "", "p1")).await.unwrap();
        store.create_report(&report("r2", "", "p2")).await.unwrap();
        store.create_report(&report("r3", "", "p1")).await.unwrap();

        let reports = store.reports_for_project("p1").await.unwrap();
        let ids: Vec<&str> = reports.iter().map(|r| r.id.as_str()).collect();
        assert_eq!(ids, ["r1", "r3"]);
    }

    #[tokio::test]
    async fn test_corpus_feeds_detector() {
        let store = InMemoryStore::new();
        store
            .create_report(&report("r1", "drum drum drum", "p1"))
            .await
            .unwrap();
        store
            .create_report(&report("r2", "quiet text", "p1"))
            .await
            .unwrap();

        let corpus = store.all_reports().await.unwrap();
        let flagged = filter_repeated(&corpus);
        assert_eq!(flagged.len(), 1);
        assert_eq!(flagged[0].id, "r1");
    }
}
