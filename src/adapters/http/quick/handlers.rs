//! HTTP handlers for quick report endpoints.

use std::sync::Arc;

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};

use crate::adapters::http::error::{form_error_response, invalid_id};
use crate::adapters::http::export::{download_response, ExportQuery};
use crate::application::handlers::quick::{
    CreateQuickReportCommand, CreateQuickReportHandler, ExportQuickReportHandler,
    ExportQuickReportQuery, GenerateQuickReportCommand, GenerateQuickReportHandler,
    GetQuickReportHandler, GetQuickReportQuery, ResetQuickReportCommand, ResetQuickReportHandler,
    SetBusinessNameCommand, SetBusinessNameHandler,
};
use crate::domain::foundation::FormSessionId;

use super::dto::{CreateQuickReportRequest, QuickReportResponse, SetBusinessNameRequest};

// ════════════════════════════════════════════════════════════════════════════
// Handler state
// ════════════════════════════════════════════════════════════════════════════

#[derive(Clone)]
pub struct QuickReportHandlers {
    pub(crate) create_handler: Arc<CreateQuickReportHandler>,
    pub(crate) get_handler: Arc<GetQuickReportHandler>,
    pub(crate) set_name_handler: Arc<SetBusinessNameHandler>,
    pub(crate) generate_handler: Arc<GenerateQuickReportHandler>,
    pub(crate) reset_handler: Arc<ResetQuickReportHandler>,
    pub(crate) export_handler: Arc<ExportQuickReportHandler>,
}

fn parse_id(raw: &str) -> Result<FormSessionId, Response> {
    raw.parse::<FormSessionId>().map_err(|_| invalid_id(raw))
}

// ════════════════════════════════════════════════════════════════════════════
// HTTP handlers
// ════════════════════════════════════════════════════════════════════════════

/// POST /api/quick - Open a quick form
pub async fn create_quick_report(
    State(handlers): State<QuickReportHandlers>,
    body: Option<Json<CreateQuickReportRequest>>,
) -> Response {
    let req = body.map(|Json(req)| req).unwrap_or_default();
    let cmd = CreateQuickReportCommand {
        business_name: req.business_name,
    };

    match handlers.create_handler.handle(cmd).await {
        Ok(form) => (StatusCode::CREATED, Json(QuickReportResponse::from(&form))).into_response(),
        Err(e) => form_error_response(e),
    }
}

/// GET /api/quick/:id - Current form state
pub async fn get_quick_report(
    State(handlers): State<QuickReportHandlers>,
    Path(form_id): Path<String>,
) -> Response {
    let form_id = match parse_id(&form_id) {
        Ok(id) => id,
        Err(response) => return response,
    };

    match handlers.get_handler.handle(GetQuickReportQuery { form_id }).await {
        Ok(form) => Json(QuickReportResponse::from(&form)).into_response(),
        Err(e) => form_error_response(e),
    }
}

/// PUT /api/quick/:id/name - Replace the business name
pub async fn set_business_name(
    State(handlers): State<QuickReportHandlers>,
    Path(form_id): Path<String>,
    Json(req): Json<SetBusinessNameRequest>,
) -> Response {
    let form_id = match parse_id(&form_id) {
        Ok(id) => id,
        Err(response) => return response,
    };
    let cmd = SetBusinessNameCommand {
        form_id,
        business_name: req.business_name,
    };

    match handlers.set_name_handler.handle(cmd).await {
        Ok(form) => Json(QuickReportResponse::from(&form)).into_response(),
        Err(e) => form_error_response(e),
    }
}

/// POST /api/quick/:id/generate - Submit; responds once the report is ready
pub async fn generate_quick_report(
    State(handlers): State<QuickReportHandlers>,
    Path(form_id): Path<String>,
) -> Response {
    let form_id = match parse_id(&form_id) {
        Ok(id) => id,
        Err(response) => return response,
    };

    match handlers
        .generate_handler
        .handle(GenerateQuickReportCommand { form_id })
        .await
    {
        Ok(form) => Json(QuickReportResponse::from(&form)).into_response(),
        Err(e) => form_error_response(e),
    }
}

/// POST /api/quick/:id/reset - Clear the form and discard any report
pub async fn reset_quick_report(
    State(handlers): State<QuickReportHandlers>,
    Path(form_id): Path<String>,
) -> Response {
    let form_id = match parse_id(&form_id) {
        Ok(id) => id,
        Err(response) => return response,
    };

    match handlers
        .reset_handler
        .handle(ResetQuickReportCommand { form_id })
        .await
    {
        Ok(form) => Json(QuickReportResponse::from(&form)).into_response(),
        Err(e) => form_error_response(e),
    }
}

/// GET /api/quick/:id/export?format=html|markdown - Download the report
pub async fn export_quick_report(
    State(handlers): State<QuickReportHandlers>,
    Path(form_id): Path<String>,
    Query(query): Query<ExportQuery>,
) -> Response {
    let form_id = match parse_id(&form_id) {
        Ok(id) => id,
        Err(response) => return response,
    };
    let format = match query.format() {
        Ok(format) => format,
        Err(response) => return response,
    };

    match handlers
        .export_handler
        .handle(ExportQuickReportQuery { form_id, format })
        .await
    {
        Ok(exported) => download_response(exported),
        Err(e) => form_error_response(e),
    }
}
