//! HTTP handlers for wizard endpoints.

use std::sync::Arc;

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};

use crate::adapters::http::error::{form_error_response, invalid_id};
use crate::adapters::http::export::{download_response, ExportQuery};
use crate::application::handlers::wizard::{
    AdvanceWizardCommand, AdvanceWizardHandler, CreateWizardHandler, ExportWizardReportHandler,
    ExportWizardReportQuery, GetWizardHandler, GetWizardQuery, ResetWizardCommand,
    ResetWizardHandler, StepBackWizardCommand, StepBackWizardHandler, UpdateWizardFieldsCommand,
    UpdateWizardFieldsHandler,
};
use crate::domain::forms::{FormError, Wizard};
use crate::domain::foundation::FormSessionId;

use super::dto::{UpdateWizardFieldsRequest, WizardResponse};

// ════════════════════════════════════════════════════════════════════════════
// Handler state
// ════════════════════════════════════════════════════════════════════════════

#[derive(Clone)]
pub struct WizardHandlers {
    pub(crate) create_handler: Arc<CreateWizardHandler>,
    pub(crate) get_handler: Arc<GetWizardHandler>,
    pub(crate) update_handler: Arc<UpdateWizardFieldsHandler>,
    pub(crate) advance_handler: Arc<AdvanceWizardHandler>,
    pub(crate) back_handler: Arc<StepBackWizardHandler>,
    pub(crate) reset_handler: Arc<ResetWizardHandler>,
    pub(crate) export_handler: Arc<ExportWizardReportHandler>,
}

fn parse_id(raw: &str) -> Result<FormSessionId, Response> {
    raw.parse::<FormSessionId>().map_err(|_| invalid_id(raw))
}

fn wizard_response(result: Result<Wizard, FormError>) -> Response {
    match result {
        Ok(wizard) => Json(WizardResponse::from(&wizard)).into_response(),
        Err(e) => form_error_response(e),
    }
}

// ════════════════════════════════════════════════════════════════════════════
// HTTP handlers
// ════════════════════════════════════════════════════════════════════════════

/// POST /api/wizard - Start a wizard at step 1
pub async fn create_wizard(State(handlers): State<WizardHandlers>) -> Response {
    match handlers.create_handler.handle().await {
        Ok(wizard) => (StatusCode::CREATED, Json(WizardResponse::from(&wizard))).into_response(),
        Err(e) => form_error_response(e),
    }
}

/// GET /api/wizard/:id - Current step, fields, and report
pub async fn get_wizard(
    State(handlers): State<WizardHandlers>,
    Path(form_id): Path<String>,
) -> Response {
    let form_id = match parse_id(&form_id) {
        Ok(id) => id,
        Err(response) => return response,
    };
    wizard_response(handlers.get_handler.handle(GetWizardQuery { form_id }).await)
}

/// PATCH /api/wizard/:id/fields - Edit any subset of fields
pub async fn update_wizard_fields(
    State(handlers): State<WizardHandlers>,
    Path(form_id): Path<String>,
    Json(req): Json<UpdateWizardFieldsRequest>,
) -> Response {
    let form_id = match parse_id(&form_id) {
        Ok(id) => id,
        Err(response) => return response,
    };
    let fields = match req.into_fields() {
        Ok(fields) => fields,
        Err(e) => return form_error_response(e.into()),
    };

    wizard_response(
        handlers
            .update_handler
            .handle(UpdateWizardFieldsCommand { form_id, fields })
            .await,
    )
}

/// POST /api/wizard/:id/next - Next step; on step 4 generates the report
pub async fn advance_wizard(
    State(handlers): State<WizardHandlers>,
    Path(form_id): Path<String>,
) -> Response {
    let form_id = match parse_id(&form_id) {
        Ok(id) => id,
        Err(response) => return response,
    };
    wizard_response(
        handlers
            .advance_handler
            .handle(AdvanceWizardCommand { form_id })
            .await,
    )
}

/// POST /api/wizard/:id/back - Previous step
pub async fn step_back_wizard(
    State(handlers): State<WizardHandlers>,
    Path(form_id): Path<String>,
) -> Response {
    let form_id = match parse_id(&form_id) {
        Ok(id) => id,
        Err(response) => return response,
    };
    wizard_response(
        handlers
            .back_handler
            .handle(StepBackWizardCommand { form_id })
            .await,
    )
}

/// POST /api/wizard/:id/reset - Clear everything and return to step 1
pub async fn reset_wizard(
    State(handlers): State<WizardHandlers>,
    Path(form_id): Path<String>,
) -> Response {
    let form_id = match parse_id(&form_id) {
        Ok(id) => id,
        Err(response) => return response,
    };
    wizard_response(
        handlers
            .reset_handler
            .handle(ResetWizardCommand { form_id })
            .await,
    )
}

/// GET /api/wizard/:id/export?format=html|markdown - Download the report
pub async fn export_wizard_report(
    State(handlers): State<WizardHandlers>,
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
        .handle(ExportWizardReportQuery { form_id, format })
        .await
    {
        Ok(exported) => download_response(exported),
        Err(e) => form_error_response(e),
    }
}
