//! HTTP integration tests for the guided wizard.
//!
//! Walks the four input steps over HTTP, checks the per-step gates, and
//! exports the localized report.

mod common;

use axum::http::StatusCode;
use axum::Router;
use serde_json::{json, Value};

use common::{get, post, send, test_app};

const ACME_DESCRIPTION: &str =
    "Family-owned plumbing company offering residential repairs and water heater installs.";

async fn create_wizard(app: &Router) -> String {
    let response = post(app, "/api/wizard", None).await;
    assert_eq!(response.status, StatusCode::CREATED);
    response.json()["id"].as_str().unwrap().to_string()
}

async fn patch_fields(app: &Router, id: &str, fields: Value) -> common::TestResponse {
    send(app, "PATCH", &format!("/api/wizard/{id}/fields"), Some(fields)).await
}

async fn next(app: &Router, id: &str) -> common::TestResponse {
    post(app, &format!("/api/wizard/{id}/next"), None).await
}

/// Fills and advances the wizard through all four input steps.
async fn complete_acme(app: &Router) -> (String, Value) {
    let id = create_wizard(app).await;

    patch_fields(app, &id, json!({ "business_name": "Acme Plumbing Co" })).await;
    assert_eq!(next(app, &id).await.status, StatusCode::OK);
    patch_fields(app, &id, json!({ "industry": "Construction" })).await;
    assert_eq!(next(app, &id).await.status, StatusCode::OK);
    patch_fields(app, &id, json!({ "target_location": "Austin, TX" })).await;
    assert_eq!(next(app, &id).await.status, StatusCode::OK);
    patch_fields(app, &id, json!({ "business_description": ACME_DESCRIPTION })).await;

    let response = next(app, &id).await;
    assert_eq!(response.status, StatusCode::OK);
    (id, response.json())
}

// =============================================================================
// Step navigation
// =============================================================================

#[tokio::test]
async fn new_wizard_starts_at_name_step() {
    let app = test_app();
    let id = create_wizard(&app).await;

    let json = get(&app, &format!("/api/wizard/{id}")).await.json();

    assert_eq!(json["step"], "name");
    assert_eq!(json["step_number"], 1);
    assert_eq!(json["total_steps"], 4);
    assert_eq!(json["can_advance"], false);
    assert_eq!(json["can_go_back"], false);
}

#[tokio::test]
async fn empty_name_blocks_first_step() {
    let app = test_app();
    let id = create_wizard(&app).await;

    let response = next(&app, &id).await;

    assert_eq!(response.status, StatusCode::UNPROCESSABLE_ENTITY);
    let json = response.json();
    assert_eq!(json["code"], "STEP_INCOMPLETE");
    assert_eq!(json["field"], "business_name");

    let state = get(&app, &format!("/api/wizard/{id}")).await.json();
    assert_eq!(state["step"], "name");
}

#[tokio::test]
async fn back_keeps_entered_values() {
    let app = test_app();
    let id = create_wizard(&app).await;
    patch_fields(&app, &id, json!({ "business_name": "Acme Plumbing Co" })).await;
    next(&app, &id).await;
    patch_fields(&app, &id, json!({ "industry": "construction" })).await;

    let response = post(&app, &format!("/api/wizard/{id}/back"), None).await;

    assert_eq!(response.status, StatusCode::OK);
    let json = response.json();
    assert_eq!(json["step"], "name");
    assert_eq!(json["fields"]["business_name"], "Acme Plumbing Co");
    assert_eq!(json["fields"]["industry"], "Construction");
}

#[tokio::test]
async fn back_from_first_step_is_conflict() {
    let app = test_app();
    let id = create_wizard(&app).await;

    let response = post(&app, &format!("/api/wizard/{id}/back"), None).await;

    assert_eq!(response.status, StatusCode::CONFLICT);
}

#[tokio::test]
async fn unknown_industry_label_is_unprocessable() {
    let app = test_app();
    let id = create_wizard(&app).await;

    let response = patch_fields(&app, &id, json!({ "industry": "Space Mining" })).await;

    assert_eq!(response.status, StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(response.json()["field"], "industry");
}

#[tokio::test]
async fn short_description_blocks_generation() {
    let app = test_app();
    let id = create_wizard(&app).await;
    patch_fields(&app, &id, json!({ "business_name": "Acme Plumbing Co" })).await;
    next(&app, &id).await;
    patch_fields(&app, &id, json!({ "industry": "Construction" })).await;
    next(&app, &id).await;
    patch_fields(&app, &id, json!({ "target_location": "Austin, TX" })).await;
    next(&app, &id).await;
    // Exactly twenty characters: the gate needs more.
    patch_fields(&app, &id, json!({ "business_description": "Residential plumbing" })).await;

    let response = next(&app, &id).await;

    assert_eq!(response.status, StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(response.json()["field"], "business_description");
    let state = get(&app, &format!("/api/wizard/{id}")).await.json();
    assert_eq!(state["step"], "description");
}

// =============================================================================
// Generation
// =============================================================================

#[tokio::test]
async fn completed_wizard_produces_localized_report() {
    let app = test_app();

    let (_, json) = complete_acme(&app).await;

    assert_eq!(json["step"], "report");
    assert_eq!(json["step_number"], 5);
    assert_eq!(json["is_generating"], false);
    let report = &json["report"];
    assert_eq!(report["variant"], "guided");
    assert_eq!(report["industry"], "Construction");
    assert!(report["overview"]
        .as_str()
        .unwrap()
        .starts_with("Acme Plumbing Co is a construction business serving Austin, TX."));

    let competitors = report["competitors"].as_array().unwrap();
    assert_eq!(competitors.len(), 4);
    assert_eq!(competitors[3]["name"], "Austin Construction Experts");
    assert_eq!(competitors[3]["website"], "www.austinconstructionexperts.com");

    let keywords = report["seo_keywords"].as_array().unwrap();
    assert_eq!(keywords[1]["keyword"], "best construction in austin");
}

#[tokio::test]
async fn report_step_rejects_field_edits() {
    let app = test_app();
    let (id, _) = complete_acme(&app).await;

    let response = patch_fields(&app, &id, json!({ "business_name": "Other Name" })).await;

    assert_eq!(response.status, StatusCode::CONFLICT);
}

#[tokio::test]
async fn reset_returns_to_empty_first_step() {
    let app = test_app();
    let (id, _) = complete_acme(&app).await;

    let response = post(&app, &format!("/api/wizard/{id}/reset"), None).await;

    assert_eq!(response.status, StatusCode::OK);
    let json = response.json();
    assert_eq!(json["step"], "name");
    assert_eq!(json["fields"]["business_name"], "");
    assert!(json["fields"]["industry"].is_null());
    assert!(json.get("report").is_none());
}

// =============================================================================
// Export
// =============================================================================

#[tokio::test]
async fn export_html_has_print_layout() {
    let app = test_app();
    let (id, _) = complete_acme(&app).await;

    let response = get(&app, &format!("/api/wizard/{id}/export?format=html")).await;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(
        response.content_disposition.as_deref(),
        Some("inline; filename=\"acmeplumbingco-report.html\"")
    );
    assert!(response.body.contains("page-break"));
    assert!(response.body.contains("window.print()"));
    assert!(response.body.contains("Austin Construction Experts"));
}

#[tokio::test]
async fn export_markdown_lists_sections_in_order() {
    let app = test_app();
    let (id, _) = complete_acme(&app).await;

    let response = get(&app, &format!("/api/wizard/{id}/export?format=md")).await;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(
        response.content_disposition.as_deref(),
        Some("inline; filename=\"acmeplumbingco-report.md\"")
    );
    let body = &response.body;
    let overview = body.find("## Business Overview").unwrap();
    let trends = body.find("## Market Trends").unwrap();
    let plan = body.find("## Action Plan").unwrap();
    assert!(overview < trends && trends < plan);
}

#[tokio::test]
async fn export_before_report_is_conflict() {
    let app = test_app();
    let id = create_wizard(&app).await;

    let response = get(&app, &format!("/api/wizard/{id}/export")).await;

    assert_eq!(response.status, StatusCode::CONFLICT);
}
