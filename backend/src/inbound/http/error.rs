//! Wire-format error envelope and its HTTP mapping.
//!
//! Every non-2xx response carries an `ApiError` envelope. The
//! `model`/`modelVersion` pair on the envelope and on each sub-error is a
//! forward-compatibility contract with clients: never change a model's
//! fields without bumping its version.

use actix_web::{http::StatusCode, HttpResponse, ResponseError};
use serde::{Deserialize, Serialize};
use tracing::error;
use utoipa::ToSchema;

use crate::domain::ErrorId;

/// Convenient result alias for HTTP handlers.
pub type ApiResult<T> = Result<T, ApiError>;

/// Fixed 500 message; internal failure details never reach the client.
pub const PROCESSING_ERROR_MESSAGE: &str = "An error occurred while processing.";

const API_ERROR_MODEL: &str = "ApiError";
const GENERIC_ERROR_MODEL: &str = "GenericError";
const REQUEST_VALIDATION_ERROR_MODEL: &str = "RequestValidationError";
const MODEL_VERSION: u32 = 1;

/// A domain error with a published [`ErrorId`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct GenericError {
    model: String,
    model_version: u32,
    /// Stable identifier clients match on.
    pub id: ErrorId,
    /// Human-readable description, interpolating the offending id.
    pub message: String,
}

impl GenericError {
    pub fn new(id: ErrorId, message: impl Into<String>) -> Self {
        Self {
            model: GENERIC_ERROR_MODEL.to_owned(),
            model_version: MODEL_VERSION,
            id,
            message: message.into(),
        }
    }
}

/// A request field that failed validation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct RequestValidationError {
    model: String,
    model_version: u32,
    /// Name of the offending field (or `body` / `headers`).
    pub field: String,
    /// Human-readable description of the problem.
    pub message: String,
}

impl RequestValidationError {
    pub fn new(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            model: REQUEST_VALIDATION_ERROR_MODEL.to_owned(),
            model_version: MODEL_VERSION,
            field: field.into(),
            message: message.into(),
        }
    }
}

/// One entry in the envelope's error collection.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(untagged)]
pub enum ErrorDetail {
    Generic(GenericError),
    Validation(RequestValidationError),
}

impl From<GenericError> for ErrorDetail {
    fn from(error: GenericError) -> Self {
        Self::Generic(error)
    }
}

impl From<RequestValidationError> for ErrorDetail {
    fn from(error: RequestValidationError) -> Self {
        Self::Validation(error)
    }
}

/// HTTP status for the envelope. Not part of the wire payload.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
enum EnvelopeStatus {
    BadRequest,
    NotFound,
    #[default]
    Internal,
}

/// Response-level error envelope.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ApiError {
    model: String,
    model_version: u32,
    /// Optional human-readable summary.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    /// Typed sub-errors; may be empty for 500 responses.
    pub errors: Vec<ErrorDetail>,
    #[serde(skip)]
    status: EnvelopeStatus,
}

impl ApiError {
    fn envelope(status: EnvelopeStatus) -> Self {
        Self {
            model: API_ERROR_MODEL.to_owned(),
            model_version: MODEL_VERSION,
            message: None,
            errors: Vec::new(),
            status,
        }
    }

    /// 400 envelope carrying every validation error found.
    pub fn bad_request(errors: impl IntoIterator<Item = ErrorDetail>) -> Self {
        let mut envelope = Self::envelope(EnvelopeStatus::BadRequest);
        envelope.errors.extend(errors);
        envelope
    }

    /// 400 envelope with a single field validation error.
    pub fn bad_request_field(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self::bad_request([RequestValidationError::new(field, message).into()])
    }

    /// 404 envelope with one [`GenericError`].
    pub fn not_found(id: ErrorId, message: impl Into<String>) -> Self {
        let mut envelope = Self::envelope(EnvelopeStatus::NotFound);
        envelope.errors.push(GenericError::new(id, message).into());
        envelope
    }

    /// 500 envelope with the fixed processing message.
    pub fn processing() -> Self {
        let mut envelope = Self::envelope(EnvelopeStatus::Internal);
        envelope.message = Some(PROCESSING_ERROR_MESSAGE.to_owned());
        envelope
    }

    /// Log an unexpected failure and return the redacted 500 envelope.
    pub fn unexpected(source: impl std::fmt::Display) -> Self {
        error!(error = %source, "unexpected error while processing request");
        Self::processing()
    }
}

impl std::fmt::Display for ApiError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match &self.message {
            Some(message) => f.write_str(message),
            None => write!(f, "request failed with {} error(s)", self.errors.len()),
        }
    }
}

impl std::error::Error for ApiError {}

impl ResponseError for ApiError {
    fn status_code(&self) -> StatusCode {
        match self.status {
            EnvelopeStatus::BadRequest => StatusCode::BAD_REQUEST,
            EnvelopeStatus::NotFound => StatusCode::NOT_FOUND,
            EnvelopeStatus::Internal => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_response(&self) -> HttpResponse {
        HttpResponse::build(self.status_code()).json(self)
    }
}
