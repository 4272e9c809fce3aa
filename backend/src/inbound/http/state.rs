//! Shared application state handed to every HTTP handler.

use std::sync::Arc;

use crate::domain::ports::ProjectRepository;
use crate::domain::{ProjectService, TaskService};

/// Services the handlers dispatch into. Cloned per worker by actix.
#[derive(Clone)]
pub struct HttpState {
    pub projects: ProjectService,
    pub tasks: TaskService,
}

impl HttpState {
    pub fn new(repository: Arc<dyn ProjectRepository>) -> Self {
        Self {
            projects: ProjectService::new(Arc::clone(&repository)),
            tasks: TaskService::new(repository),
        }
    }
}
