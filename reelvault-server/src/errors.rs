use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde_json::{Map, Value, json};
use std::fmt;

use crate::blob::BlobError;
use crate::store::StoreError;
use reelvault_model::ValidationError;

pub type ApiResult<T> = Result<T, ApiError>;

/// The one error type that crosses the handler boundary. Every failure is
/// converted into a structured `{error, message}` JSON body with an
/// appropriate status code; nothing propagates past a handler unshaped.
#[derive(Debug)]
pub struct ApiError {
    pub status: StatusCode,
    pub error: &'static str,
    pub message: String,
    /// Extra top-level fields merged into the error body (the creator's
    /// missing-fields case carries `missing_fields` / `required_fields`).
    pub details: Option<Map<String, Value>>,
}

impl ApiError {
    pub fn new(status: StatusCode, error: &'static str, message: impl Into<String>) -> Self {
        Self {
            status,
            error,
            message: message.into(),
            details: None,
        }
    }

    pub fn invalid_parameters(message: impl Into<String>) -> Self {
        Self::new(StatusCode::BAD_REQUEST, "Invalid parameters", message)
    }

    pub fn malformed_payload(message: impl Into<String>) -> Self {
        Self::new(StatusCode::BAD_REQUEST, "Invalid JSON", message)
    }

    pub fn missing_fields(missing: Vec<String>, required: &'static [&'static str]) -> Self {
        let message = format!("missing required fields: {}", missing.join(", "));

        let mut details = Map::new();
        details.insert("missing_fields".to_string(), json!(missing));
        details.insert("required_fields".to_string(), json!(required));

        let mut err = Self::new(StatusCode::BAD_REQUEST, "Missing required fields", message);
        err.details = Some(details);
        err
    }

    pub fn no_file(message: impl Into<String>) -> Self {
        Self::new(StatusCode::BAD_REQUEST, "No file provided", message)
    }

    pub fn configuration(message: impl Into<String>) -> Self {
        Self::new(
            StatusCode::INTERNAL_SERVER_ERROR,
            "Configuration error",
            message,
        )
    }

    pub fn database(message: impl Into<String>) -> Self {
        Self::new(StatusCode::INTERNAL_SERVER_ERROR, "Database error", message)
    }

    pub fn upload(message: impl Into<String>) -> Self {
        Self::new(StatusCode::INTERNAL_SERVER_ERROR, "Upload error", message)
    }

    pub fn internal(message: impl Into<String>) -> Self {
        Self::new(StatusCode::INTERNAL_SERVER_ERROR, "Internal error", message)
    }
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.error, self.message)
    }
}

impl std::error::Error for ApiError {}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let mut body = Map::new();
        body.insert("error".to_string(), json!(self.error));
        body.insert("message".to_string(), json!(self.message));
        if let Some(details) = self.details {
            body.extend(details);
        }

        (self.status, Json(Value::Object(body))).into_response()
    }
}

// Convert from the error types of the seams below the handlers.

impl From<ValidationError> for ApiError {
    fn from(err: ValidationError) -> Self {
        match err {
            ValidationError::InvalidParameter { .. } => {
                Self::invalid_parameters(err.to_string())
            }
            ValidationError::MalformedPayload => Self::malformed_payload(err.to_string()),
            ValidationError::MissingFields { missing, required } => {
                Self::missing_fields(missing, required)
            }
        }
    }
}

impl From<StoreError> for ApiError {
    fn from(err: StoreError) -> Self {
        tracing::error!(error = %err, "document store operation failed");
        Self::database(err.to_string())
    }
}

impl From<BlobError> for ApiError {
    fn from(err: BlobError) -> Self {
        tracing::error!(error = %err, "blob store operation failed");
        Self::upload(err.to_string())
    }
}

impl From<anyhow::Error> for ApiError {
    fn from(err: anyhow::Error) -> Self {
        Self::internal(err.to_string())
    }
}
