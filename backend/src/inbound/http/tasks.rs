//! Task API handlers. Tasks live inside a project, so every route is
//! scoped under `/project/{projectId}/task` and every write goes through
//! the owning project document.
//!
//! ```text
//! POST   /project/{projectId}/task       {"description":"buy milk"}
//! GET    /project/{projectId}/task
//! GET    /project/{projectId}/task/{id}
//! PUT    /project/{projectId}/task/{id}  {"description":"…","isDone":true}
//! DELETE /project/{projectId}/task/{id}
//! ```

use actix_web::{delete, get, post, put, web, HttpRequest, HttpResponse};
use tracing::debug;

use crate::domain::{ErrorId, Task, TaskId, TaskServiceError};
use crate::inbound::http::dto::TaskDto;
use crate::inbound::http::error::{ApiError, ApiResult};
use crate::inbound::http::projects::require_project;
use crate::inbound::http::state::HttpState;
use crate::inbound::http::validation::{
    optional_bool, optional_string, parse_json_body, project_id_param, required_string,
    task_id_param, FieldName, MSG_NON_EMPTY_STRING,
};

fn no_task_message(id: &TaskId) -> String {
    format!("No task exists with id: {id}")
}

fn task_not_found(missing: ErrorId, id: &TaskId) -> ApiError {
    ApiError::not_found(missing, no_task_message(id))
}

fn map_task_service_error(error: TaskServiceError) -> ApiError {
    match error {
        TaskServiceError::EmptyDescription => {
            ApiError::bad_request_field("description", MSG_NON_EMPTY_STRING)
        }
        other => ApiError::unexpected(other),
    }
}

/// Add a task to a project from a JSON body with a required `description`.
#[utoipa::path(
    post,
    path = "/project/{projectId}/task",
    params(("projectId" = String, Path, description = "Owning project id")),
    request_body = serde_json::Value,
    responses(
        (status = 201, description = "Task created", body = TaskDto),
        (status = 400, description = "Invalid request", body = ApiError),
        (status = 404, description = "No such project", body = ApiError),
        (status = 500, description = "Internal server error", body = ApiError)
    ),
    tags = ["tasks"],
    operation_id = "createTask"
)]
#[post("/project/{project_id}/task")]
pub async fn create_task(
    state: web::Data<HttpState>,
    request: HttpRequest,
    path: web::Path<String>,
    body: web::Bytes,
) -> ApiResult<HttpResponse> {
    let project_id = project_id_param(&path.into_inner(), FieldName::new("projectId"))?;
    let payload = parse_json_body(&request, &body)?;

    let mut project =
        require_project(&state, &project_id, ErrorId::TaskCreateNoProjectExistsWithId).await?;

    let mut errors = Vec::new();
    let description = required_string(&payload, FieldName::new("description"), &mut errors);
    let Some(description) = description else {
        return Err(ApiError::bad_request(errors));
    };

    let task = state
        .tasks
        .create(&mut project, &description)
        .await
        .map_err(map_task_service_error)?;
    debug!(task_id = %task.id(), project_id = %project.id(), "created task");
    Ok(HttpResponse::Created().json(TaskDto::from(&task)))
}

/// List a project's tasks in order.
#[utoipa::path(
    get,
    path = "/project/{projectId}/task",
    params(("projectId" = String, Path, description = "Owning project id")),
    responses(
        (status = 200, description = "Tasks", body = [TaskDto]),
        (status = 400, description = "Invalid request", body = ApiError),
        (status = 404, description = "No such project", body = ApiError),
        (status = 500, description = "Internal server error", body = ApiError)
    ),
    tags = ["tasks"],
    operation_id = "getAllTasks"
)]
#[get("/project/{project_id}/task")]
pub async fn get_all_tasks(
    state: web::Data<HttpState>,
    path: web::Path<String>,
) -> ApiResult<web::Json<Vec<TaskDto>>> {
    let project_id = project_id_param(&path.into_inner(), FieldName::new("projectId"))?;
    let project =
        require_project(&state, &project_id, ErrorId::TaskGetNoProjectExistsWithId).await?;
    let tasks = state
        .tasks
        .get_all(&project)
        .await
        .map_err(ApiError::unexpected)?;
    Ok(web::Json(tasks.iter().map(TaskDto::from).collect()))
}

/// Fetch one task by id.
#[utoipa::path(
    get,
    path = "/project/{projectId}/task/{id}",
    params(
        ("projectId" = String, Path, description = "Owning project id"),
        ("id" = String, Path, description = "Task id")
    ),
    responses(
        (status = 200, description = "Task", body = TaskDto),
        (status = 400, description = "Invalid request", body = ApiError),
        (status = 404, description = "No such project or task", body = ApiError),
        (status = 500, description = "Internal server error", body = ApiError)
    ),
    tags = ["tasks"],
    operation_id = "getTask"
)]
#[get("/project/{project_id}/task/{id}")]
pub async fn get_task(
    state: web::Data<HttpState>,
    path: web::Path<(String, String)>,
) -> ApiResult<web::Json<TaskDto>> {
    let (project_segment, task_segment) = path.into_inner();
    let project_id = project_id_param(&project_segment, FieldName::new("projectId"))?;
    let task_id = task_id_param(&task_segment, FieldName::new("id"))?;

    let project =
        require_project(&state, &project_id, ErrorId::TaskGetNoProjectExistsWithId).await?;
    let task = state
        .tasks
        .get(&project, &task_id)
        .await
        .map_err(ApiError::unexpected)?
        .ok_or_else(|| task_not_found(ErrorId::TaskGetNoTaskExistsWithId, &task_id))?;
    Ok(web::Json(TaskDto::from(&task)))
}

/// Update a task. Both `description` and `isDone` are optional; absent
/// fields keep their stored value.
#[utoipa::path(
    put,
    path = "/project/{projectId}/task/{id}",
    params(
        ("projectId" = String, Path, description = "Owning project id"),
        ("id" = String, Path, description = "Task id")
    ),
    request_body = serde_json::Value,
    responses(
        (status = 200, description = "Saved task", body = TaskDto),
        (status = 400, description = "Invalid request", body = ApiError),
        (status = 404, description = "No such project or task", body = ApiError),
        (status = 500, description = "Internal server error", body = ApiError)
    ),
    tags = ["tasks"],
    operation_id = "saveTask"
)]
#[put("/project/{project_id}/task/{id}")]
pub async fn save_task(
    state: web::Data<HttpState>,
    request: HttpRequest,
    path: web::Path<(String, String)>,
    body: web::Bytes,
) -> ApiResult<web::Json<TaskDto>> {
    let (project_segment, task_segment) = path.into_inner();
    let project_id = project_id_param(&project_segment, FieldName::new("projectId"))?;
    let task_id = task_id_param(&task_segment, FieldName::new("id"))?;
    let payload = parse_json_body(&request, &body)?;

    let mut project =
        require_project(&state, &project_id, ErrorId::TaskSaveNoProjectExistsWithId).await?;
    let existing = project
        .task(&task_id)
        .cloned()
        .ok_or_else(|| task_not_found(ErrorId::TaskSaveNoTaskExistsWithId, &task_id))?;

    let mut errors = Vec::new();
    let description = optional_string(&payload, FieldName::new("description"), &mut errors);
    let is_done = optional_bool(&payload, FieldName::new("isDone"), &mut errors);
    if !errors.is_empty() {
        return Err(ApiError::bad_request(errors));
    }

    let updated = Task::from_parts(
        task_id,
        description.unwrap_or_else(|| existing.description().to_owned()),
        is_done.unwrap_or(existing.is_done()),
    )
    .map_err(ApiError::unexpected)?;

    let saved = state
        .tasks
        .save(&mut project, updated)
        .await
        .map_err(map_task_service_error)?;
    Ok(web::Json(TaskDto::from(&saved)))
}

/// Delete a task from its project and return its last state.
#[utoipa::path(
    delete,
    path = "/project/{projectId}/task/{id}",
    params(
        ("projectId" = String, Path, description = "Owning project id"),
        ("id" = String, Path, description = "Task id")
    ),
    responses(
        (status = 200, description = "Deleted task", body = TaskDto),
        (status = 400, description = "Invalid request", body = ApiError),
        (status = 404, description = "No such project or task", body = ApiError),
        (status = 500, description = "Internal server error", body = ApiError)
    ),
    tags = ["tasks"],
    operation_id = "deleteTask"
)]
#[delete("/project/{project_id}/task/{id}")]
pub async fn delete_task(
    state: web::Data<HttpState>,
    path: web::Path<(String, String)>,
) -> ApiResult<web::Json<TaskDto>> {
    let (project_segment, task_segment) = path.into_inner();
    let project_id = project_id_param(&project_segment, FieldName::new("projectId"))?;
    let task_id = task_id_param(&task_segment, FieldName::new("id"))?;

    let mut project =
        require_project(&state, &project_id, ErrorId::TaskDeleteNoProjectExistsWithId).await?;
    let removed = state
        .tasks
        .delete(&mut project, &task_id)
        .await
        .map_err(|error| match error {
            TaskServiceError::NoTaskExistsWithId { id, .. } => {
                task_not_found(ErrorId::TaskDeleteNoTaskExistsWithId, &id)
            }
            other => ApiError::unexpected(other),
        })?;
    debug!(task_id = %removed.id(), project_id = %project.id(), "deleted task");
    Ok(web::Json(TaskDto::from(&removed)))
}

#[cfg(test)]
#[path = "tasks_tests.rs"]
mod tests;
