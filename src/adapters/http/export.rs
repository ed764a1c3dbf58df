//! Report download helpers shared by the quick and wizard adapters.

use axum::{
    http::{header, StatusCode},
    response::{IntoResponse, Response},
    Json,
};
use serde::Deserialize;

use super::error::ErrorResponse;
use crate::ports::{ExportFormat, ExportedReport};

/// `?format=html|markdown`; HTML when omitted.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ExportQuery {
    #[serde(default)]
    pub format: Option<String>,
}

impl ExportQuery {
    /// Parsed format, or a ready 400 response.
    pub fn format(&self) -> Result<ExportFormat, Response> {
        match self.format.as_deref() {
            None => Ok(ExportFormat::Html),
            Some(raw) => raw.parse().map_err(|e: crate::ports::ExportError| {
                (
                    StatusCode::BAD_REQUEST,
                    Json(ErrorResponse::bad_request(e.to_string())),
                )
                    .into_response()
            }),
        }
    }
}

/// Sends an exported report inline, with a filename for "save as".
pub fn download_response(exported: ExportedReport) -> Response {
    (
        [
            (header::CONTENT_TYPE, exported.content_type.to_string()),
            (
                header::CONTENT_DISPOSITION,
                format!("inline; filename=\"{}\"", exported.filename),
            ),
        ],
        exported.content,
    )
        .into_response()
}
