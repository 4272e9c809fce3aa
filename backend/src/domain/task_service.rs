//! Task operations, folded into the owning project's write path.
//!
//! Every mutation takes an already-loaded [`Project`], edits its in-memory
//! task list through the aggregate, and re-persists the whole document.
//! Reads stay `async` for interface uniformity with the project operations
//! even though they only touch the aggregate.

use std::sync::Arc;

use tracing::info;

use crate::domain::ports::{ProjectRepository, ProjectRepositoryError};
use crate::domain::{Project, ProjectId, Task, TaskId};

/// Errors raised by [`TaskService`] operations.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum TaskServiceError {
    /// Create was called with an empty or whitespace-only description.
    /// Handlers pre-validate; the service rejects this defensively.
    #[error("cannot create task - description must not be empty")]
    EmptyDescription,
    /// Delete referenced a task id not present in the project.
    #[error("no task exists with id: {id} in project with id: {project_id}")]
    NoTaskExistsWithId { id: TaskId, project_id: ProjectId },
    /// The repository failed while persisting the owning project.
    #[error(transparent)]
    Repository(#[from] ProjectRepositoryError),
}

/// Task create/read/save/delete operations on a project aggregate.
#[derive(Clone)]
pub struct TaskService {
    repo: Arc<dyn ProjectRepository>,
}

impl TaskService {
    pub fn new(repo: Arc<dyn ProjectRepository>) -> Self {
        Self { repo }
    }

    /// Append a fresh task (generated id, `is_done` false) and persist the
    /// owning project.
    pub async fn create(
        &self,
        project: &mut Project,
        description: &str,
    ) -> Result<Task, TaskServiceError> {
        let task = Task::new(description).map_err(|_| TaskServiceError::EmptyDescription)?;
        project.push_task(task.clone());
        self.repo.save(project).await?;
        info!(task_id = %task.id(), project_id = %project.id(), "created task");
        Ok(task)
    }

    /// Linear search of the project's tasks by id. Missing ids are
    /// `Ok(None)`, never an error.
    pub async fn get(
        &self,
        project: &Project,
        id: &TaskId,
    ) -> Result<Option<Task>, TaskServiceError> {
        Ok(project.task(id).cloned())
    }

    /// Snapshot of the project's tasks, in insertion order.
    pub async fn get_all(&self, project: &Project) -> Result<Vec<Task>, TaskServiceError> {
        Ok(project.tasks().to_vec())
    }

    /// Upsert-by-id into the project's task list and persist the project.
    /// Existing tasks are replaced in place; new ids are appended.
    pub async fn save(
        &self,
        project: &mut Project,
        task: Task,
    ) -> Result<Task, TaskServiceError> {
        project.upsert_task(task.clone());
        self.repo.save(project).await?;
        info!(task_id = %task.id(), project_id = %project.id(), "saved task");
        Ok(task)
    }

    /// Remove a task by id and persist the project, returning the removed
    /// task. Fails with [`TaskServiceError::NoTaskExistsWithId`] when the
    /// id is absent; the project is not persisted in that case.
    pub async fn delete(
        &self,
        project: &mut Project,
        id: &TaskId,
    ) -> Result<Task, TaskServiceError> {
        let Some(removed) = project.remove_task(id) else {
            return Err(TaskServiceError::NoTaskExistsWithId {
                id: id.clone(),
                project_id: project.id().clone(),
            });
        };
        self.repo.save(project).await?;
        info!(task_id = %id, project_id = %project.id(), "deleted task");
        Ok(removed)
    }

    /// Delete an already-fetched task, delegating to the id-based form.
    pub async fn delete_task(
        &self,
        project: &mut Project,
        task: &Task,
    ) -> Result<Task, TaskServiceError> {
        let id = task.id().clone();
        self.delete(project, &id).await
    }
}

#[cfg(test)]
#[path = "task_service_tests.rs"]
mod tests;
