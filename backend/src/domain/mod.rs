//! Domain model: aggregates, services, and driven ports.
//!
//! Everything here is transport agnostic. Inbound adapters translate domain
//! results and errors into HTTP responses; outbound adapters implement the
//! ports against real storage.

pub mod error;
pub mod ports;
pub mod project;
pub mod project_service;
pub mod task;
pub mod task_service;

pub use error::ErrorId;
pub use project::{Project, ProjectId, ProjectValidationError};
pub use project_service::{ProjectService, ProjectServiceError};
pub use task::{Task, TaskId, TaskValidationError};
pub use task_service::{TaskService, TaskServiceError};
