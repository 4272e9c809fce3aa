//! Request validation shared by the HTTP handlers.
//!
//! Handlers read the raw body so that the published error envelopes stay
//! stable: typed extractors would collapse a wrongly-typed field into a
//! body parse failure, where the contract demands a field-level error.
//! Validation runs in a fixed order per request: path parameters, body
//! presence, content type, JSON parse, and only then field checks. Field
//! checks are collected, not short-circuited, so a client sees every
//! broken field at once.

use actix_web::http::header;
use actix_web::HttpRequest;
use serde_json::Value;

use crate::domain::{ProjectId, TaskId};
use crate::inbound::http::error::{ApiError, ErrorDetail, RequestValidationError};

pub(crate) const MSG_INVALID_PATH_PARAM: &str = "Missing or invalid path parameter";
pub(crate) const MSG_MISSING_BODY: &str = "Missing or empty body";
pub(crate) const MSG_NOT_JSON: &str =
    "Requests must be JSON with header 'Content-Type: application/json'";
pub(crate) const MSG_UNPARSEABLE_BODY: &str = "Could not parse body - likely invalid JSON";
pub(crate) const MSG_NON_EMPTY_STRING: &str = "Field must be a non-empty string";
pub(crate) const MSG_BOOLEAN: &str = "Field must be a boolean";

/// Wire name of a validated request field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct FieldName(&'static str);

impl FieldName {
    pub(crate) const fn new(name: &'static str) -> Self {
        Self(name)
    }

    pub(crate) const fn as_str(self) -> &'static str {
        self.0
    }
}

fn field_error(field: FieldName, message: &str) -> ErrorDetail {
    RequestValidationError::new(field.as_str(), message).into()
}

/// Parse a project id path segment. Any non-blank segment is accepted;
/// unknown ids fall through to the existence check and its 404.
pub(crate) fn project_id_param(value: &str, field: FieldName) -> Result<ProjectId, ApiError> {
    ProjectId::new(value)
        .map_err(|_| ApiError::bad_request([field_error(field, MSG_INVALID_PATH_PARAM)]))
}

/// Parse a task id path segment, same rules as [`project_id_param`].
pub(crate) fn task_id_param(value: &str, field: FieldName) -> Result<TaskId, ApiError> {
    TaskId::new(value)
        .map_err(|_| ApiError::bad_request([field_error(field, MSG_INVALID_PATH_PARAM)]))
}

/// Check body presence, content type, then JSON well-formedness, in that
/// order. Each failure maps to its own field (`body` or `headers`).
pub(crate) fn parse_json_body(request: &HttpRequest, body: &[u8]) -> Result<Value, ApiError> {
    let text = String::from_utf8_lossy(body);
    if text.trim().is_empty() {
        return Err(ApiError::bad_request([field_error(
            FieldName::new("body"),
            MSG_MISSING_BODY,
        )]));
    }

    let content_type = request
        .headers()
        .get(header::CONTENT_TYPE)
        .and_then(|value| value.to_str().ok())
        .unwrap_or_default();
    if !content_type
        .trim()
        .to_ascii_lowercase()
        .starts_with("application/json")
    {
        return Err(ApiError::bad_request([field_error(
            FieldName::new("headers"),
            MSG_NOT_JSON,
        )]));
    }

    serde_json::from_str(&text).map_err(|_| {
        ApiError::bad_request([field_error(FieldName::new("body"), MSG_UNPARSEABLE_BODY)])
    })
}

/// A field that must be present and a non-empty string. Returns the trimmed
/// value, or records an error and yields `None`.
pub(crate) fn required_string(
    body: &Value,
    field: FieldName,
    errors: &mut Vec<ErrorDetail>,
) -> Option<String> {
    match body.get(field.as_str()) {
        Some(Value::String(value)) if !value.trim().is_empty() => Some(value.trim().to_owned()),
        _ => {
            errors.push(field_error(field, MSG_NON_EMPTY_STRING));
            None
        }
    }
}

/// A field that may be absent, but must be a non-empty string when present.
/// An explicit `null` counts as present and wrongly typed.
pub(crate) fn optional_string(
    body: &Value,
    field: FieldName,
    errors: &mut Vec<ErrorDetail>,
) -> Option<String> {
    match body.get(field.as_str()) {
        None => None,
        Some(Value::String(value)) if !value.trim().is_empty() => Some(value.trim().to_owned()),
        Some(_) => {
            errors.push(field_error(field, MSG_NON_EMPTY_STRING));
            None
        }
    }
}

/// A field that may be absent, but must be a boolean when present.
/// An explicit `null` counts as present and wrongly typed.
pub(crate) fn optional_bool(
    body: &Value,
    field: FieldName,
    errors: &mut Vec<ErrorDetail>,
) -> Option<bool> {
    match body.get(field.as_str()) {
        None => None,
        Some(Value::Bool(value)) => Some(*value),
        Some(_) => {
            errors.push(field_error(field, MSG_BOOLEAN));
            None
        }
    }
}
