//! Shared fixtures for handler tests.

use std::sync::Arc;

use actix_web::body::MessageBody;
use actix_web::dev::{ServiceFactory, ServiceRequest, ServiceResponse};
use actix_web::http::header;
use actix_web::{test as actix_test, web, App};
use serde_json::Value;

use crate::inbound::http::state::HttpState;
use crate::outbound::persistence::MemoryProjectRepository;
use crate::server::configure_api;

pub(crate) fn test_state() -> web::Data<HttpState> {
    web::Data::new(HttpState::new(Arc::new(MemoryProjectRepository::new())))
}

pub(crate) fn test_app(
    state: web::Data<HttpState>,
) -> App<
    impl ServiceFactory<
        ServiceRequest,
        Config = (),
        Response = ServiceResponse,
        Error = actix_web::Error,
        InitError = (),
    >,
> {
    App::new().app_data(state).configure(configure_api)
}

/// Attach a JSON body and the matching content type to a request.
pub(crate) fn json_request(
    request: actix_test::TestRequest,
    body: &Value,
) -> actix_test::TestRequest {
    request
        .insert_header((header::CONTENT_TYPE, "application/json"))
        .set_payload(body.to_string())
}

pub(crate) async fn read_json(response: ServiceResponse<impl MessageBody>) -> Value {
    let body = actix_test::read_body(response).await;
    serde_json::from_slice(&body).expect("response JSON")
}

/// POST a project and return the created resource.
pub(crate) async fn create_project<S, B>(app: &S, name: &str) -> Value
where
    S: actix_web::dev::Service<
        actix_http::Request,
        Response = ServiceResponse<B>,
        Error = actix_web::Error,
    >,
    B: MessageBody,
{
    let request = json_request(
        actix_test::TestRequest::post().uri("/project"),
        &serde_json::json!({ "name": name }),
    )
    .to_request();
    let response = actix_test::call_service(app, request).await;
    assert_eq!(response.status(), actix_web::http::StatusCode::CREATED);
    read_json(response).await
}

/// POST a task into an existing project and return the created resource.
pub(crate) async fn create_task<S, B>(app: &S, project_id: &str, description: &str) -> Value
where
    S: actix_web::dev::Service<
        actix_http::Request,
        Response = ServiceResponse<B>,
        Error = actix_web::Error,
    >,
    B: MessageBody,
{
    let request = json_request(
        actix_test::TestRequest::post().uri(&format!("/project/{project_id}/task")),
        &serde_json::json!({ "description": description }),
    )
    .to_request();
    let response = actix_test::call_service(app, request).await;
    assert_eq!(response.status(), actix_web::http::StatusCode::CREATED);
    read_json(response).await
}
