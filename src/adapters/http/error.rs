//! Error responses shared by every HTTP adapter.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::{Deserialize, Serialize};

use crate::domain::forms::FormError;

/// JSON error body.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ErrorResponse {
    pub code: String,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub field: Option<String>,
}

impl ErrorResponse {
    pub fn bad_request(message: impl Into<String>) -> Self {
        Self {
            code: "BAD_REQUEST".to_string(),
            message: message.into(),
            field: None,
        }
    }

    pub fn not_found(resource_type: &str, id: &str) -> Self {
        Self {
            code: "NOT_FOUND".to_string(),
            message: format!("{} not found: {}", resource_type, id),
            field: None,
        }
    }

    pub fn internal(message: impl Into<String>) -> Self {
        Self {
            code: "INTERNAL_ERROR".to_string(),
            message: message.into(),
            field: None,
        }
    }
}

/// 400 for an id path segment that is not a UUID.
pub fn invalid_id(raw: &str) -> Response {
    (
        StatusCode::BAD_REQUEST,
        Json(ErrorResponse::bad_request(format!("Invalid form id: {}", raw))),
    )
        .into_response()
}

/// Maps a form error to its HTTP status and JSON body.
pub fn form_error_response(error: FormError) -> Response {
    let status = match &error {
        FormError::NotFound(_) => StatusCode::NOT_FOUND,
        FormError::StepIncomplete { .. } => StatusCode::UNPROCESSABLE_ENTITY,
        FormError::InvalidState(_) | FormError::AlreadyGenerating => StatusCode::CONFLICT,
        FormError::Analysis(_) | FormError::Infrastructure(_) => {
            tracing::error!(error = %error, "Form request failed");
            StatusCode::INTERNAL_SERVER_ERROR
        }
    };

    let body = match &error {
        FormError::NotFound(id) => ErrorResponse::not_found("Form session", &id.to_string()),
        FormError::StepIncomplete { field, .. } => ErrorResponse {
            code: error.code().to_string(),
            message: error.message(),
            field: Some(field.clone()),
        },
        _ => ErrorResponse {
            code: error.code().to_string(),
            message: error.message(),
            field: None,
        },
    };

    (status, Json(body)).into_response()
}
