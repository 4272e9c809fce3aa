use actix_web::http::StatusCode;
use actix_web::test as actix_test;
use rstest::rstest;
use serde_json::{json, Value};

use crate::inbound::http::test_support::{
    create_project, json_request, read_json, test_app, test_state,
};

#[actix_web::test]
async fn create_project_returns_201_with_trimmed_name() {
    let app = actix_test::init_service(test_app(test_state())).await;

    let created = create_project(&app, "  Groceries  ").await;
    assert_eq!(created["name"], "Groceries");
    assert_eq!(created["tasks"], json!([]));
    assert!(!created["id"].as_str().expect("id string").is_empty());
}

#[rstest]
#[case(json!({}), "name", "Field must be a non-empty string")]
#[case(json!({ "name": "" }), "name", "Field must be a non-empty string")]
#[case(json!({ "name": 42 }), "name", "Field must be a non-empty string")]
#[actix_web::test]
async fn create_project_rejects_invalid_name(
    #[case] body: Value,
    #[case] field: &str,
    #[case] message: &str,
) {
    let app = actix_test::init_service(test_app(test_state())).await;

    let request = json_request(actix_test::TestRequest::post().uri("/project"), &body).to_request();
    let response = actix_test::call_service(&app, request).await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let envelope = read_json(response).await;
    assert_eq!(envelope["model"], "ApiError");
    assert_eq!(envelope["modelVersion"], 1);
    assert_eq!(envelope["errors"][0]["model"], "RequestValidationError");
    assert_eq!(envelope["errors"][0]["field"], field);
    assert_eq!(envelope["errors"][0]["message"], message);
}

#[actix_web::test]
async fn create_project_rejects_missing_content_type() {
    let app = actix_test::init_service(test_app(test_state())).await;

    let request = actix_test::TestRequest::post()
        .uri("/project")
        .set_payload(r#"{"name":"Groceries"}"#)
        .to_request();
    let response = actix_test::call_service(&app, request).await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let envelope = read_json(response).await;
    assert_eq!(envelope["errors"][0]["field"], "headers");
    assert_eq!(
        envelope["errors"][0]["message"],
        "Requests must be JSON with header 'Content-Type: application/json'"
    );
}

#[rstest]
#[case("", "Missing or empty body")]
#[case("{not json", "Could not parse body - likely invalid JSON")]
#[actix_web::test]
async fn create_project_rejects_broken_bodies(#[case] payload: &str, #[case] message: &str) {
    let app = actix_test::init_service(test_app(test_state())).await;

    let request = actix_test::TestRequest::post()
        .uri("/project")
        .insert_header((actix_web::http::header::CONTENT_TYPE, "application/json"))
        .set_payload(payload.to_owned())
        .to_request();
    let response = actix_test::call_service(&app, request).await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let envelope = read_json(response).await;
    assert_eq!(envelope["errors"][0]["field"], "body");
    assert_eq!(envelope["errors"][0]["message"], message);
}

#[actix_web::test]
async fn get_all_projects_starts_empty() {
    let app = actix_test::init_service(test_app(test_state())).await;

    let request = actix_test::TestRequest::get().uri("/project").to_request();
    let response = actix_test::call_service(&app, request).await;
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(read_json(response).await, json!([]));
}

#[actix_web::test]
async fn get_project_returns_the_created_resource() {
    let app = actix_test::init_service(test_app(test_state())).await;
    let created = create_project(&app, "Errands").await;
    let id = created["id"].as_str().expect("id string");

    let request = actix_test::TestRequest::get()
        .uri(&format!("/project/{id}"))
        .to_request();
    let response = actix_test::call_service(&app, request).await;
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(read_json(response).await, created);
}

#[actix_web::test]
async fn get_project_unknown_id_returns_the_published_envelope() {
    let app = actix_test::init_service(test_app(test_state())).await;

    let request = actix_test::TestRequest::get()
        .uri("/project/does-not-exist")
        .to_request();
    let response = actix_test::call_service(&app, request).await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    assert_eq!(
        read_json(response).await,
        json!({
            "model": "ApiError",
            "modelVersion": 1,
            "errors": [{
                "model": "GenericError",
                "modelVersion": 1,
                "id": "Project_Get_NoProjectExistsWithId",
                "message": "No project exists with id: does-not-exist",
            }],
        })
    );
}

#[actix_web::test]
async fn blank_path_parameter_is_a_validation_error() {
    let app = actix_test::init_service(test_app(test_state())).await;

    let request = actix_test::TestRequest::get()
        .uri("/project/%20")
        .to_request();
    let response = actix_test::call_service(&app, request).await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let envelope = read_json(response).await;
    assert_eq!(envelope["errors"][0]["field"], "id");
    assert_eq!(
        envelope["errors"][0]["message"],
        "Missing or invalid path parameter"
    );
}

#[actix_web::test]
async fn save_project_renames_and_persists() {
    let app = actix_test::init_service(test_app(test_state())).await;
    let created = create_project(&app, "Before").await;
    let id = created["id"].as_str().expect("id string");

    let request = json_request(
        actix_test::TestRequest::put().uri(&format!("/project/{id}")),
        &json!({ "name": "After" }),
    )
    .to_request();
    let response = actix_test::call_service(&app, request).await;
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(read_json(response).await["name"], "After");

    let request = actix_test::TestRequest::get()
        .uri(&format!("/project/{id}"))
        .to_request();
    let fetched = read_json(actix_test::call_service(&app, request).await).await;
    assert_eq!(fetched["name"], "After");
}

#[actix_web::test]
async fn save_project_without_name_keeps_the_stored_name() {
    let app = actix_test::init_service(test_app(test_state())).await;
    let created = create_project(&app, "Unchanged").await;
    let id = created["id"].as_str().expect("id string");

    let request = json_request(
        actix_test::TestRequest::put().uri(&format!("/project/{id}")),
        &json!({}),
    )
    .to_request();
    let response = actix_test::call_service(&app, request).await;
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(read_json(response).await["name"], "Unchanged");
}

#[actix_web::test]
async fn save_project_unknown_id_uses_the_save_error_id() {
    let app = actix_test::init_service(test_app(test_state())).await;

    let request = json_request(
        actix_test::TestRequest::put().uri("/project/missing"),
        &json!({ "name": "irrelevant" }),
    )
    .to_request();
    let response = actix_test::call_service(&app, request).await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    let envelope = read_json(response).await;
    assert_eq!(
        envelope["errors"][0]["id"],
        "Project_Save_NoProjectExistsWithId"
    );
}

// Body well-formedness is checked before project existence, so a broken
// body on an unknown id reports 400, not 404.
#[actix_web::test]
async fn save_project_reports_broken_body_before_missing_project() {
    let app = actix_test::init_service(test_app(test_state())).await;

    let request = actix_test::TestRequest::put()
        .uri("/project/missing")
        .insert_header((actix_web::http::header::CONTENT_TYPE, "application/json"))
        .to_request();
    let response = actix_test::call_service(&app, request).await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let envelope = read_json(response).await;
    assert_eq!(envelope["errors"][0]["field"], "body");
    assert_eq!(envelope["errors"][0]["message"], "Missing or empty body");
}

#[actix_web::test]
async fn save_project_rejects_explicit_null_name() {
    let app = actix_test::init_service(test_app(test_state())).await;
    let created = create_project(&app, "Kept").await;
    let id = created["id"].as_str().expect("id string");

    let request = json_request(
        actix_test::TestRequest::put().uri(&format!("/project/{id}")),
        &json!({ "name": null }),
    )
    .to_request();
    let response = actix_test::call_service(&app, request).await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let envelope = read_json(response).await;
    assert_eq!(envelope["errors"][0]["field"], "name");
    assert_eq!(
        envelope["errors"][0]["message"],
        "Field must be a non-empty string"
    );

    // The stored name is untouched.
    let request = actix_test::TestRequest::get()
        .uri(&format!("/project/{id}"))
        .to_request();
    let fetched = read_json(actix_test::call_service(&app, request).await).await;
    assert_eq!(fetched["name"], "Kept");
}

#[actix_web::test]
async fn save_project_rejects_wrongly_typed_name() {
    let app = actix_test::init_service(test_app(test_state())).await;
    let created = create_project(&app, "Typed").await;
    let id = created["id"].as_str().expect("id string");

    let request = json_request(
        actix_test::TestRequest::put().uri(&format!("/project/{id}")),
        &json!({ "name": true }),
    )
    .to_request();
    let response = actix_test::call_service(&app, request).await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let envelope = read_json(response).await;
    assert_eq!(envelope["errors"][0]["field"], "name");
}

#[actix_web::test]
async fn delete_project_returns_the_last_state_and_removes_it() {
    let app = actix_test::init_service(test_app(test_state())).await;
    let created = create_project(&app, "Doomed").await;
    let id = created["id"].as_str().expect("id string");

    let request = actix_test::TestRequest::delete()
        .uri(&format!("/project/{id}"))
        .to_request();
    let response = actix_test::call_service(&app, request).await;
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(read_json(response).await, created);

    let request = actix_test::TestRequest::get()
        .uri(&format!("/project/{id}"))
        .to_request();
    let response = actix_test::call_service(&app, request).await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[actix_web::test]
async fn delete_project_unknown_id_uses_the_delete_error_id() {
    let app = actix_test::init_service(test_app(test_state())).await;

    let request = actix_test::TestRequest::delete()
        .uri("/project/missing")
        .to_request();
    let response = actix_test::call_service(&app, request).await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    let envelope = read_json(response).await;
    assert_eq!(
        envelope["errors"][0]["id"],
        "Project_Delete_NoProjectExistsWithId"
    );
    assert_eq!(
        envelope["errors"][0]["message"],
        "No project exists with id: missing"
    );
}
