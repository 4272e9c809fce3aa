//! Serde models for the stored project document.
//!
//! One document per project, tasks embedded inline. Parsing back into the
//! domain re-checks the aggregate invariants, so a hand-edited or corrupt
//! document fails loudly instead of smuggling an invalid aggregate into the
//! service layer.

use serde::{Deserialize, Serialize};

use crate::domain::{
    Project, ProjectId, ProjectValidationError, Task, TaskId, TaskValidationError,
};

/// Stored shape of a task inside a project document.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TaskRecord {
    pub id: String,
    pub description: String,
    pub is_done: bool,
}

/// Stored shape of a project document.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectRecord {
    pub id: String,
    pub name: String,
    pub tasks: Vec<TaskRecord>,
}

/// A stored document no longer satisfies the aggregate invariants.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DocumentError {
    #[error(transparent)]
    Project(#[from] ProjectValidationError),
    #[error(transparent)]
    Task(#[from] TaskValidationError),
}

impl From<&Task> for TaskRecord {
    fn from(task: &Task) -> Self {
        Self {
            id: task.id().as_str().to_owned(),
            description: task.description().to_owned(),
            is_done: task.is_done(),
        }
    }
}

impl TryFrom<TaskRecord> for Task {
    type Error = DocumentError;

    fn try_from(record: TaskRecord) -> Result<Self, Self::Error> {
        let id = TaskId::new(record.id)?;
        Ok(Task::from_parts(id, record.description, record.is_done)?)
    }
}

impl From<&Project> for ProjectRecord {
    fn from(project: &Project) -> Self {
        Self {
            id: project.id().as_str().to_owned(),
            name: project.name().to_owned(),
            tasks: project.tasks().iter().map(TaskRecord::from).collect(),
        }
    }
}

impl TryFrom<ProjectRecord> for Project {
    type Error = DocumentError;

    fn try_from(record: ProjectRecord) -> Result<Self, Self::Error> {
        let id = ProjectId::new(record.id)?;
        let tasks = record
            .tasks
            .into_iter()
            .map(Task::try_from)
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Project::from_parts(id, record.name, tasks)?)
    }
}
