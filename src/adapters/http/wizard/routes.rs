//! HTTP routes for wizard endpoints.

use axum::{
    routing::{get, patch, post},
    Router,
};

use super::handlers::{
    advance_wizard, create_wizard, export_wizard_report, get_wizard, reset_wizard,
    step_back_wizard, update_wizard_fields, WizardHandlers,
};

/// Creates the wizard router; nest it under `/api/wizard`.
pub fn wizard_routes(handlers: WizardHandlers) -> Router {
    Router::new()
        .route("/", post(create_wizard))
        .route("/:id", get(get_wizard))
        .route("/:id/fields", patch(update_wizard_fields))
        .route("/:id/next", post(advance_wizard))
        .route("/:id/back", post(step_back_wizard))
        .route("/:id/reset", post(reset_wizard))
        .route("/:id/export", get(export_wizard_report))
        .with_state(handlers)
}
