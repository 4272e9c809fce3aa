//! Wire DTOs for the project and task resources.

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::domain::{Project, Task};

/// A task as it appears on the wire.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct TaskDto {
    pub id: String,
    pub description: String,
    pub is_done: bool,
}

/// A project as it appears on the wire, tasks embedded in order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ProjectDto {
    pub id: String,
    pub name: String,
    pub tasks: Vec<TaskDto>,
}

impl From<&Task> for TaskDto {
    fn from(task: &Task) -> Self {
        Self {
            id: task.id().as_str().to_owned(),
            description: task.description().to_owned(),
            is_done: task.is_done(),
        }
    }
}

impl From<&Project> for ProjectDto {
    fn from(project: &Project) -> Self {
        Self {
            id: project.id().as_str().to_owned(),
            name: project.name().to_owned(),
            tasks: project.tasks().iter().map(TaskDto::from).collect(),
        }
    }
}
