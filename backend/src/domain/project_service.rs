//! Project operations over the repository port.

use std::sync::Arc;

use tracing::info;

use crate::domain::ports::{ProjectRepository, ProjectRepositoryError};
use crate::domain::{Project, ProjectId};

/// Errors raised by [`ProjectService`] operations.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ProjectServiceError {
    /// Create was called with an empty or whitespace-only name. Handlers
    /// pre-validate; the service rejects this defensively.
    #[error("cannot create project - name must not be empty")]
    EmptyName,
    /// Delete referenced a project id with no stored document.
    #[error("no project exists with id: {id}")]
    NoProjectExistsWithId { id: ProjectId },
    /// The repository failed.
    #[error(transparent)]
    Repository(#[from] ProjectRepositoryError),
}

/// Project create/read/save/delete operations.
///
/// Saves are unconditional whole-document upserts; callers wanting
/// update-only semantics must confirm existence first.
#[derive(Clone)]
pub struct ProjectService {
    repo: Arc<dyn ProjectRepository>,
}

impl ProjectService {
    pub fn new(repo: Arc<dyn ProjectRepository>) -> Self {
        Self { repo }
    }

    /// Create and persist a project with a fresh id and no tasks.
    pub async fn create(&self, name: &str) -> Result<Project, ProjectServiceError> {
        let project = Project::new(name).map_err(|_| ProjectServiceError::EmptyName)?;
        self.repo.save(&project).await?;
        info!(project_id = %project.id(), "created project");
        Ok(project)
    }

    /// Fetch a project by id. A missing id is `Ok(None)`, never an error.
    pub async fn get(&self, id: &ProjectId) -> Result<Option<Project>, ProjectServiceError> {
        Ok(self.repo.get(id).await?)
    }

    /// Fetch every stored project, in unspecified order.
    pub async fn get_all(&self) -> Result<Vec<Project>, ProjectServiceError> {
        Ok(self.repo.get_all().await?)
    }

    /// Unconditional upsert of the full aggregate, tasks included.
    pub async fn save(&self, project: &Project) -> Result<(), ProjectServiceError> {
        self.repo.save(project).await?;
        info!(project_id = %project.id(), "saved project");
        Ok(())
    }

    /// Upsert a batch of aggregates, item by item.
    pub async fn save_all(&self, projects: &[Project]) -> Result<(), ProjectServiceError> {
        self.repo.save_many(projects).await?;
        info!(count = projects.len(), "saved projects");
        Ok(())
    }

    /// Delete by id, returning the removed project.
    ///
    /// Fails with [`ProjectServiceError::NoProjectExistsWithId`] when no
    /// project exists with that id; the store is not touched in that case.
    pub async fn delete(&self, id: &ProjectId) -> Result<Project, ProjectServiceError> {
        let Some(project) = self.repo.get(id).await? else {
            return Err(ProjectServiceError::NoProjectExistsWithId { id: id.clone() });
        };
        self.repo.delete_by_key(id).await?;
        info!(project_id = %id, "deleted project");
        Ok(project)
    }

    /// Delete an already-fetched project, skipping the existence check.
    pub async fn delete_project(&self, project: Project) -> Result<Project, ProjectServiceError> {
        self.repo.delete(&project).await?;
        info!(project_id = %project.id(), "deleted project");
        Ok(project)
    }
}
