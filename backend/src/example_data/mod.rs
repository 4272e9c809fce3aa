//! Example projects seeded at startup.
//!
//! Enabled via `SEED_EXAMPLE_DATA=1`, so a fresh instance has something to
//! show. Seeding is best-effort: the server starts with an empty store if
//! it fails.

use thiserror::Error;
use tracing::info;

use crate::domain::{
    Project, ProjectService, ProjectServiceError, ProjectValidationError, Task,
    TaskValidationError,
};

/// Errors raised while building or persisting the seed projects.
#[derive(Debug, Error)]
pub enum SeedError {
    #[error("invalid seed project: {0}")]
    Project(#[from] ProjectValidationError),
    #[error("invalid seed task: {0}")]
    Task(#[from] TaskValidationError),
    #[error(transparent)]
    Service(#[from] ProjectServiceError),
}

fn seed_project(name: &str, tasks: &[&str]) -> Result<Project, SeedError> {
    let mut project = Project::new(name)?;
    for description in tasks {
        project.push_task(Task::new(*description)?);
    }
    Ok(project)
}

/// The starter projects shipped with the server.
pub fn example_projects() -> Result<Vec<Project>, SeedError> {
    Ok(vec![
        seed_project(
            "Weekly groceries",
            &["buy milk", "buy eggs", "return bottles"],
        )?,
        seed_project("Garden", &["water plants", "mow the lawn"])?,
    ])
}

/// Build the starter projects and persist them in one batch.
pub async fn seed_on_startup(service: &ProjectService) -> Result<(), SeedError> {
    let projects = example_projects()?;
    let count = projects.len();
    service.save_all(&projects).await?;
    info!(project_count = count, "example data seeded");
    Ok(())
}
