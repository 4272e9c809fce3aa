//! Port for project aggregate persistence.
//!
//! The [`ProjectRepository`] trait is the contract for a document-style
//! key-value store holding one document per project, keyed by project id.
//! Tasks are embedded in the project document; there is no independent task
//! storage.

use async_trait::async_trait;

use crate::domain::{Project, ProjectId};

/// Errors raised by project repository adapters.
///
/// Absence of a document is not an error: lookups return `Ok(None)`.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ProjectRepositoryError {
    /// The store could not be reached.
    #[error("project store connection failed: {message}")]
    Connection { message: String },
    /// A read or write failed during execution, including documents that
    /// no longer parse as a project aggregate.
    #[error("project store query failed: {message}")]
    Query { message: String },
    /// A scan produced no result set at all. Distinct from an empty result
    /// set, which is a valid `Ok(vec![])`.
    #[error("project scan returned no result set")]
    MissingResultSet,
}

impl ProjectRepositoryError {
    pub fn connection(message: impl Into<String>) -> Self {
        Self::Connection {
            message: message.into(),
        }
    }

    pub fn query(message: impl Into<String>) -> Self {
        Self::Query {
            message: message.into(),
        }
    }
}

/// Persistence port for the project aggregate.
///
/// Every write replaces the full document at its key; there is no partial
/// update and no compare-and-swap, so concurrent writers to the same
/// project race with last-write-wins semantics.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ProjectRepository: Send + Sync {
    /// Fetch a project by id. Missing documents are `Ok(None)`.
    async fn get(&self, id: &ProjectId) -> Result<Option<Project>, ProjectRepositoryError>;

    /// Fetch every stored project. Order is unspecified (scan order).
    async fn get_all(&self) -> Result<Vec<Project>, ProjectRepositoryError>;

    /// Unconditional whole-document upsert.
    async fn save(&self, project: &Project) -> Result<(), ProjectRepositoryError>;

    /// Upsert zero, one, or many projects. Each item becomes visible
    /// independently; there is no cross-item transaction. An empty slice is
    /// a no-op.
    async fn save_many(&self, projects: &[Project]) -> Result<(), ProjectRepositoryError>;

    /// Remove the document at the given key. Deleting a missing key is not
    /// an adapter error; existence checks belong to the service layer.
    async fn delete_by_key(&self, id: &ProjectId) -> Result<(), ProjectRepositoryError>;

    /// Remove the document for an already-fetched aggregate.
    async fn delete(&self, project: &Project) -> Result<(), ProjectRepositoryError>;
}
