//! OpenAPI documentation configuration.
//!
//! The generated specification covers every project and task endpoint and
//! the shared error envelope. Swagger UI serves it in debug builds.

use utoipa::OpenApi;

use crate::domain::ErrorId;
use crate::inbound::http::dto::{ProjectDto, TaskDto};
use crate::inbound::http::error::{ApiError, ErrorDetail, GenericError, RequestValidationError};

/// OpenAPI document for the REST API.
#[derive(OpenApi)]
#[openapi(
    info(
        title = "Project backend API",
        description = "CRUD interface for projects and their embedded tasks."
    ),
    servers(
        (url = "/", description = "Relative to the deployment base URL")
    ),
    paths(
        crate::inbound::http::projects::create_project,
        crate::inbound::http::projects::get_all_projects,
        crate::inbound::http::projects::get_project,
        crate::inbound::http::projects::save_project,
        crate::inbound::http::projects::delete_project,
        crate::inbound::http::tasks::create_task,
        crate::inbound::http::tasks::get_all_tasks,
        crate::inbound::http::tasks::get_task,
        crate::inbound::http::tasks::save_task,
        crate::inbound::http::tasks::delete_task,
    ),
    components(schemas(
        ProjectDto,
        TaskDto,
        ApiError,
        ErrorDetail,
        GenericError,
        RequestValidationError,
        ErrorId,
    )),
    tags(
        (name = "projects", description = "Project CRUD"),
        (name = "tasks", description = "Task CRUD inside an owning project")
    )
)]
pub struct ApiDoc;
