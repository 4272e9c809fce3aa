//! Project API handlers.
//!
//! ```text
//! POST   /project        {"name":"Groceries"}
//! GET    /project
//! GET    /project/{id}
//! PUT    /project/{id}   {"name":"Renamed"}
//! DELETE /project/{id}
//! ```

use actix_web::{delete, get, post, put, web, HttpRequest, HttpResponse};
use tracing::debug;

use crate::domain::{ErrorId, Project, ProjectId, ProjectServiceError};
use crate::inbound::http::dto::ProjectDto;
use crate::inbound::http::error::{ApiError, ApiResult};
use crate::inbound::http::state::HttpState;
use crate::inbound::http::validation::{
    optional_string, parse_json_body, project_id_param, required_string, FieldName,
    MSG_NON_EMPTY_STRING,
};

pub(crate) fn no_project_message(id: &ProjectId) -> String {
    format!("No project exists with id: {id}")
}

/// Fetch a project or map its absence to the caller's 404 error id.
pub(crate) async fn require_project(
    state: &HttpState,
    id: &ProjectId,
    missing: ErrorId,
) -> Result<Project, ApiError> {
    state
        .projects
        .get(id)
        .await
        .map_err(ApiError::unexpected)?
        .ok_or_else(|| ApiError::not_found(missing, no_project_message(id)))
}

fn map_project_service_error(error: ProjectServiceError) -> ApiError {
    match error {
        ProjectServiceError::EmptyName => {
            ApiError::bad_request_field("name", MSG_NON_EMPTY_STRING)
        }
        other => ApiError::unexpected(other),
    }
}

/// Create a project from a JSON body with a required `name`.
#[utoipa::path(
    post,
    path = "/project",
    request_body = serde_json::Value,
    responses(
        (status = 201, description = "Project created", body = ProjectDto),
        (status = 400, description = "Invalid request", body = ApiError),
        (status = 500, description = "Internal server error", body = ApiError)
    ),
    tags = ["projects"],
    operation_id = "createProject"
)]
#[post("/project")]
pub async fn create_project(
    state: web::Data<HttpState>,
    request: HttpRequest,
    body: web::Bytes,
) -> ApiResult<HttpResponse> {
    let payload = parse_json_body(&request, &body)?;

    let mut errors = Vec::new();
    let name = required_string(&payload, FieldName::new("name"), &mut errors);
    let Some(name) = name else {
        return Err(ApiError::bad_request(errors));
    };

    let project = state
        .projects
        .create(&name)
        .await
        .map_err(map_project_service_error)?;
    debug!(project_id = %project.id(), "created project");
    Ok(HttpResponse::Created().json(ProjectDto::from(&project)))
}

/// List every project with its embedded tasks.
#[utoipa::path(
    get,
    path = "/project",
    responses(
        (status = 200, description = "All projects", body = [ProjectDto]),
        (status = 500, description = "Internal server error", body = ApiError)
    ),
    tags = ["projects"],
    operation_id = "getAllProjects"
)]
#[get("/project")]
pub async fn get_all_projects(state: web::Data<HttpState>) -> ApiResult<web::Json<Vec<ProjectDto>>> {
    let projects = state
        .projects
        .get_all()
        .await
        .map_err(ApiError::unexpected)?;
    Ok(web::Json(projects.iter().map(ProjectDto::from).collect()))
}

/// Fetch one project by id.
#[utoipa::path(
    get,
    path = "/project/{id}",
    params(("id" = String, Path, description = "Project id")),
    responses(
        (status = 200, description = "Project", body = ProjectDto),
        (status = 400, description = "Invalid request", body = ApiError),
        (status = 404, description = "No such project", body = ApiError),
        (status = 500, description = "Internal server error", body = ApiError)
    ),
    tags = ["projects"],
    operation_id = "getProject"
)]
#[get("/project/{id}")]
pub async fn get_project(
    state: web::Data<HttpState>,
    path: web::Path<String>,
) -> ApiResult<web::Json<ProjectDto>> {
    let id = project_id_param(&path.into_inner(), FieldName::new("id"))?;
    let project = require_project(&state, &id, ErrorId::ProjectGetNoProjectExistsWithId).await?;
    Ok(web::Json(ProjectDto::from(&project)))
}

/// Rename a project. The body's `name` is optional; when absent the project
/// is re-saved unchanged.
#[utoipa::path(
    put,
    path = "/project/{id}",
    params(("id" = String, Path, description = "Project id")),
    request_body = serde_json::Value,
    responses(
        (status = 200, description = "Saved project", body = ProjectDto),
        (status = 400, description = "Invalid request", body = ApiError),
        (status = 404, description = "No such project", body = ApiError),
        (status = 500, description = "Internal server error", body = ApiError)
    ),
    tags = ["projects"],
    operation_id = "saveProject"
)]
#[put("/project/{id}")]
pub async fn save_project(
    state: web::Data<HttpState>,
    request: HttpRequest,
    path: web::Path<String>,
    body: web::Bytes,
) -> ApiResult<web::Json<ProjectDto>> {
    let id = project_id_param(&path.into_inner(), FieldName::new("id"))?;
    let payload = parse_json_body(&request, &body)?;

    let mut project =
        require_project(&state, &id, ErrorId::ProjectSaveNoProjectExistsWithId).await?;

    let mut errors = Vec::new();
    let name = optional_string(&payload, FieldName::new("name"), &mut errors);
    if !errors.is_empty() {
        return Err(ApiError::bad_request(errors));
    }

    if let Some(name) = name {
        project.rename(&name).map_err(ApiError::unexpected)?;
    }
    state
        .projects
        .save(&project)
        .await
        .map_err(map_project_service_error)?;
    Ok(web::Json(ProjectDto::from(&project)))
}

/// Delete a project and return its last state.
#[utoipa::path(
    delete,
    path = "/project/{id}",
    params(("id" = String, Path, description = "Project id")),
    responses(
        (status = 200, description = "Deleted project", body = ProjectDto),
        (status = 400, description = "Invalid request", body = ApiError),
        (status = 404, description = "No such project", body = ApiError),
        (status = 500, description = "Internal server error", body = ApiError)
    ),
    tags = ["projects"],
    operation_id = "deleteProject"
)]
#[delete("/project/{id}")]
pub async fn delete_project(
    state: web::Data<HttpState>,
    path: web::Path<String>,
) -> ApiResult<web::Json<ProjectDto>> {
    let id = project_id_param(&path.into_inner(), FieldName::new("id"))?;
    let removed = state.projects.delete(&id).await.map_err(|error| match error {
        ProjectServiceError::NoProjectExistsWithId { id } => ApiError::not_found(
            ErrorId::ProjectDeleteNoProjectExistsWithId,
            no_project_message(&id),
        ),
        other => ApiError::unexpected(other),
    })?;
    debug!(project_id = %removed.id(), "deleted project");
    Ok(web::Json(ProjectDto::from(&removed)))
}

#[cfg(test)]
#[path = "projects_tests.rs"]
mod tests;
