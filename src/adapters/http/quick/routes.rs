//! HTTP routes for quick report endpoints.

use axum::{
    routing::{get, post, put},
    Router,
};

use super::handlers::{
    create_quick_report, export_quick_report, generate_quick_report, get_quick_report,
    reset_quick_report, set_business_name, QuickReportHandlers,
};

/// Creates the quick report router; nest it under `/api/quick`.
pub fn quick_routes(handlers: QuickReportHandlers) -> Router {
    Router::new()
        .route("/", post(create_quick_report))
        .route("/:id", get(get_quick_report))
        .route("/:id/name", put(set_business_name))
        .route("/:id/generate", post(generate_quick_report))
        .route("/:id/reset", post(reset_quick_report))
        .route("/:id/export", get(export_quick_report))
        .with_state(handlers)
}
