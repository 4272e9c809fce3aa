//! Project aggregate root.
//!
//! A project owns an ordered collection of tasks and is persisted as a
//! single document. All task mutation goes through the aggregate so that a
//! whole-document write captures every change.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::domain::{Task, TaskId};

/// Opaque project identifier.
///
/// Stored as a plain string so that lookups with arbitrary path segments
/// miss instead of failing to parse. Fresh ids are UUIDv4.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ProjectId(String);

impl ProjectId {
    /// Generate a fresh unique id.
    pub fn random() -> Self {
        Self(Uuid::new_v4().to_string())
    }

    /// Wrap an existing id value. Rejects empty or whitespace-only input.
    pub fn new(value: impl Into<String>) -> Result<Self, ProjectValidationError> {
        let value = value.into();
        if value.trim().is_empty() {
            return Err(ProjectValidationError::EmptyId);
        }
        Ok(Self(value))
    }

    /// The raw id value.
    pub fn as_str(&self) -> &str {
        self.0.as_str()
    }
}

impl std::fmt::Display for ProjectId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// Validation errors raised by [`Project`] and [`ProjectId`] constructors.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ProjectValidationError {
    /// Id is empty or whitespace-only.
    #[error("project id must not be empty")]
    EmptyId,
    /// Name is empty or whitespace-only.
    #[error("project name must not be empty")]
    EmptyName,
    /// Two tasks share the same id.
    #[error("duplicate task id in project: {id}")]
    DuplicateTaskId { id: TaskId },
}

/// Project aggregate: id, name, and an ordered task list.
///
/// ## Invariants
/// - `name` is non-empty once trimmed; constructors and mutators trim it.
/// - Task ids are unique within the project.
/// - Task order is insertion order; updates replace in place.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Project {
    id: ProjectId,
    name: String,
    tasks: Vec<Task>,
}

impl Project {
    /// Create a fresh project with a generated id and no tasks.
    pub fn new(name: impl Into<String>) -> Result<Self, ProjectValidationError> {
        Self::from_parts(ProjectId::random(), name, Vec::new())
    }

    /// Reassemble a project from stored or client-supplied parts.
    pub fn from_parts(
        id: ProjectId,
        name: impl Into<String>,
        tasks: Vec<Task>,
    ) -> Result<Self, ProjectValidationError> {
        let name = name.into();
        let trimmed = name.trim();
        if trimmed.is_empty() {
            return Err(ProjectValidationError::EmptyName);
        }
        for (index, task) in tasks.iter().enumerate() {
            if tasks
                .iter()
                .skip(index + 1)
                .any(|other| other.id() == task.id())
            {
                return Err(ProjectValidationError::DuplicateTaskId {
                    id: task.id().clone(),
                });
            }
        }
        Ok(Self {
            id,
            name: trimmed.to_owned(),
            tasks,
        })
    }

    /// Immutable project identifier.
    pub fn id(&self) -> &ProjectId {
        &self.id
    }

    /// Trimmed, non-empty project name.
    pub fn name(&self) -> &str {
        self.name.as_str()
    }

    /// Read-only view of the task list, in insertion order.
    ///
    /// Callers must mutate tasks through the aggregate so invariants hold
    /// and every change flows through a whole-document save.
    pub fn tasks(&self) -> &[Task] {
        self.tasks.as_slice()
    }

    /// Rename the project. Rejects empty or whitespace-only names.
    pub fn rename(&mut self, name: impl Into<String>) -> Result<(), ProjectValidationError> {
        let name = name.into();
        let trimmed = name.trim();
        if trimmed.is_empty() {
            return Err(ProjectValidationError::EmptyName);
        }
        self.name = trimmed.to_owned();
        Ok(())
    }

    /// Linear search for a task by id.
    pub fn task(&self, id: &TaskId) -> Option<&Task> {
        self.tasks.iter().find(|task| task.id() == id)
    }

    /// Append a freshly created task.
    pub fn push_task(&mut self, task: Task) {
        self.tasks.push(task);
    }

    /// Upsert-by-id: replace an existing task in place (position unchanged)
    /// or append when no task shares the id.
    pub fn upsert_task(&mut self, task: Task) {
        match self
            .tasks
            .iter()
            .position(|existing| existing.id() == task.id())
        {
            Some(index) => self.tasks[index] = task,
            None => self.tasks.push(task),
        }
    }

    /// Remove the task with the given id, returning it if present.
    pub fn remove_task(&mut self, id: &TaskId) -> Option<Task> {
        let index = self.tasks.iter().position(|task| task.id() == id)?;
        Some(self.tasks.remove(index))
    }
}
