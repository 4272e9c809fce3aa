//! Task entity, exclusively owned by a [`Project`](crate::domain::Project).
//!
//! Tasks have no independent lifecycle: they are created, updated, and
//! deleted only through their owning project, and every mutation persists
//! the whole project document.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Opaque task identifier.
///
/// Stored as a plain string so that lookups with arbitrary path segments
/// miss instead of failing to parse. Fresh ids are UUIDv4.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TaskId(String);

impl TaskId {
    /// Generate a fresh unique id.
    pub fn random() -> Self {
        Self(Uuid::new_v4().to_string())
    }

    /// Wrap an existing id value. Rejects empty or whitespace-only input.
    pub fn new(value: impl Into<String>) -> Result<Self, TaskValidationError> {
        let value = value.into();
        if value.trim().is_empty() {
            return Err(TaskValidationError::EmptyId);
        }
        Ok(Self(value))
    }

    /// The raw id value.
    pub fn as_str(&self) -> &str {
        self.0.as_str()
    }
}

impl std::fmt::Display for TaskId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// Validation errors raised by [`Task`] and [`TaskId`] constructors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum TaskValidationError {
    /// Id is empty or whitespace-only.
    #[error("task id must not be empty")]
    EmptyId,
    /// Description is empty or whitespace-only.
    #[error("task description must not be empty")]
    EmptyDescription,
}

/// A single task inside a project.
///
/// ## Invariants
/// - `description` is non-empty once trimmed; constructors trim it.
/// - `id` is immutable after creation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Task {
    id: TaskId,
    description: String,
    is_done: bool,
}

impl Task {
    /// Create a fresh task with a generated id. `is_done` starts false.
    pub fn new(description: impl Into<String>) -> Result<Self, TaskValidationError> {
        Self::from_parts(TaskId::random(), description, false)
    }

    /// Reassemble a task from stored or client-supplied parts.
    pub fn from_parts(
        id: TaskId,
        description: impl Into<String>,
        is_done: bool,
    ) -> Result<Self, TaskValidationError> {
        let description = description.into();
        let trimmed = description.trim();
        if trimmed.is_empty() {
            return Err(TaskValidationError::EmptyDescription);
        }
        Ok(Self {
            id,
            description: trimmed.to_owned(),
            is_done,
        })
    }

    /// Immutable task identifier.
    pub fn id(&self) -> &TaskId {
        &self.id
    }

    /// Trimmed, non-empty description.
    pub fn description(&self) -> &str {
        self.description.as_str()
    }

    /// Completion flag.
    pub fn is_done(&self) -> bool {
        self.is_done
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[test]
    fn new_generates_unique_ids_and_starts_not_done() {
        let a = Task::new("buy milk").expect("valid task");
        let b = Task::new("buy milk").expect("valid task");
        assert_ne!(a.id(), b.id());
        assert!(!a.is_done());
    }

    #[test]
    fn from_parts_trims_description() {
        let task = Task::from_parts(TaskId::random(), "  tidy up  ", true).expect("valid task");
        assert_eq!(task.description(), "tidy up");
        assert!(task.is_done());
    }

    #[rstest]
    #[case("")]
    #[case("   ")]
    #[case("\t\n")]
    fn rejects_blank_description(#[case] description: &str) {
        assert_eq!(
            Task::new(description),
            Err(TaskValidationError::EmptyDescription)
        );
    }

    #[rstest]
    #[case("")]
    #[case(" ")]
    fn task_id_rejects_blank_values(#[case] value: &str) {
        assert_eq!(TaskId::new(value), Err(TaskValidationError::EmptyId));
    }

    #[test]
    fn task_id_keeps_raw_value() {
        let id = TaskId::new("not-a-uuid").expect("non-empty id");
        assert_eq!(id.as_str(), "not-a-uuid");
    }
}
