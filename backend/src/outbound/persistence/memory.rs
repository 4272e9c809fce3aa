//! In-memory document store implementing the project repository port.
//!
//! Documents are plain JSON values keyed by project id, mirroring a
//! document-style key-value store: every save replaces the full document,
//! every read re-parses it. There is no compare-and-swap, so concurrent
//! writers to the same key are last-write-wins.

use std::collections::HashMap;

use async_trait::async_trait;
use serde_json::Value;
use tokio::sync::RwLock;

use crate::domain::ports::{ProjectRepository, ProjectRepositoryError};
use crate::domain::{Project, ProjectId};
use crate::outbound::persistence::record::ProjectRecord;

/// Process-local project store. One JSON document per project.
#[derive(Debug, Default)]
pub struct MemoryProjectRepository {
    documents: RwLock<HashMap<String, Value>>,
}

impl MemoryProjectRepository {
    pub fn new() -> Self {
        Self::default()
    }

    fn encode(project: &Project) -> Result<Value, ProjectRepositoryError> {
        serde_json::to_value(ProjectRecord::from(project)).map_err(|err| {
            ProjectRepositoryError::query(format!("cannot encode project document: {err}"))
        })
    }

    fn decode(document: &Value) -> Result<Project, ProjectRepositoryError> {
        let record: ProjectRecord = serde_json::from_value(document.clone()).map_err(|err| {
            ProjectRepositoryError::query(format!("cannot parse project document: {err}"))
        })?;
        Project::try_from(record).map_err(|err| {
            ProjectRepositoryError::query(format!("cannot parse project document: {err}"))
        })
    }

    /// Insert a raw document, bypassing the domain model. Lets tests stage
    /// corrupt documents the way a foreign writer could.
    #[cfg(test)]
    async fn insert_raw(&self, key: &str, document: Value) {
        self.documents
            .write()
            .await
            .insert(key.to_owned(), document);
    }
}

#[async_trait]
impl ProjectRepository for MemoryProjectRepository {
    async fn get(&self, id: &ProjectId) -> Result<Option<Project>, ProjectRepositoryError> {
        let documents = self.documents.read().await;
        documents.get(id.as_str()).map(Self::decode).transpose()
    }

    async fn get_all(&self) -> Result<Vec<Project>, ProjectRepositoryError> {
        // An in-memory scan always yields a result set; MissingResultSet is
        // reserved for stores whose scan can come back empty-handed.
        let documents = self.documents.read().await;
        documents.values().map(Self::decode).collect()
    }

    async fn save(&self, project: &Project) -> Result<(), ProjectRepositoryError> {
        let document = Self::encode(project)?;
        self.documents
            .write()
            .await
            .insert(project.id().as_str().to_owned(), document);
        Ok(())
    }

    async fn save_many(&self, projects: &[Project]) -> Result<(), ProjectRepositoryError> {
        // Item-by-item writes: each document becomes visible independently.
        for project in projects {
            self.save(project).await?;
        }
        Ok(())
    }

    async fn delete_by_key(&self, id: &ProjectId) -> Result<(), ProjectRepositoryError> {
        self.documents.write().await.remove(id.as_str());
        Ok(())
    }

    async fn delete(&self, project: &Project) -> Result<(), ProjectRepositoryError> {
        self.delete_by_key(project.id()).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::Task;
    use serde_json::json;

    fn sample_project(name: &str) -> Project {
        let mut project = Project::new(name).expect("valid project");
        project.push_task(Task::new("first").expect("valid task"));
        project
    }

    #[tokio::test]
    async fn save_then_get_round_trips_the_aggregate() {
        let repo = MemoryProjectRepository::new();
        let project = sample_project("Errands");

        repo.save(&project).await.expect("save succeeds");
        let loaded = repo.get(project.id()).await.expect("get succeeds");
        assert_eq!(loaded, Some(project));
    }

    #[tokio::test]
    async fn get_missing_key_is_none_not_an_error() {
        let repo = MemoryProjectRepository::new();
        let loaded = repo.get(&ProjectId::random()).await.expect("get succeeds");
        assert_eq!(loaded, None);
    }

    #[tokio::test]
    async fn get_all_returns_empty_set_for_empty_store() {
        let repo = MemoryProjectRepository::new();
        let all = repo.get_all().await.expect("scan succeeds");
        assert!(all.is_empty());
    }

    #[tokio::test]
    async fn save_replaces_the_whole_document() {
        let repo = MemoryProjectRepository::new();
        let mut project = sample_project("Before");
        repo.save(&project).await.expect("save succeeds");

        project.rename("After").expect("valid rename");
        project.push_task(Task::new("second").expect("valid task"));
        repo.save(&project).await.expect("save succeeds");

        let loaded = repo
            .get(project.id())
            .await
            .expect("get succeeds")
            .expect("document present");
        assert_eq!(loaded.name(), "After");
        assert_eq!(loaded.tasks().len(), 2);
    }

    #[tokio::test]
    async fn save_many_stores_each_document() {
        let repo = MemoryProjectRepository::new();
        let projects = vec![sample_project("One"), sample_project("Two")];

        repo.save_many(&projects).await.expect("batch save succeeds");
        repo.save_many(&[]).await.expect("empty batch is a no-op");

        let all = repo.get_all().await.expect("scan succeeds");
        assert_eq!(all.len(), 2);
    }

    #[tokio::test]
    async fn delete_by_key_removes_the_document() {
        let repo = MemoryProjectRepository::new();
        let project = sample_project("Doomed");
        repo.save(&project).await.expect("save succeeds");

        repo.delete_by_key(project.id()).await.expect("delete succeeds");
        assert_eq!(repo.get(project.id()).await.expect("get succeeds"), None);
    }

    #[tokio::test]
    async fn delete_takes_an_already_fetched_aggregate() {
        let repo = MemoryProjectRepository::new();
        let project = sample_project("Fetched");
        repo.save(&project).await.expect("save succeeds");

        repo.delete(&project).await.expect("delete succeeds");
        assert!(repo.get_all().await.expect("scan succeeds").is_empty());
    }

    #[tokio::test]
    async fn corrupt_document_surfaces_as_query_error() {
        let repo = MemoryProjectRepository::new();
        repo.insert_raw("broken", json!({ "id": "broken", "name": "   ", "tasks": [] }))
            .await;

        let id = ProjectId::new("broken").expect("non-empty id");
        let error = repo.get(&id).await.expect_err("corrupt document");
        assert!(matches!(error, ProjectRepositoryError::Query { .. }));
    }

    #[tokio::test]
    async fn document_missing_fields_surfaces_as_query_error() {
        let repo = MemoryProjectRepository::new();
        repo.insert_raw("partial", json!({ "id": "partial" })).await;

        let error = repo.get_all().await.expect_err("unparseable document");
        assert!(matches!(error, ProjectRepositoryError::Query { .. }));
    }
}
