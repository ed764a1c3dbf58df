//! HTTP adapter for industry reference data.
//!
//! - `GET /api/industries` - Selectable industries, in form order
//! - `POST /api/industries/classify` - Infer an industry from a business name

use axum::{
    routing::{get, post},
    Json, Router,
};
use serde::{Deserialize, Serialize};

use crate::domain::industry::{classify, Industry};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct IndustryListResponse {
    pub industries: Vec<Industry>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ClassifyRequest {
    pub business_name: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ClassifyResponse {
    pub business_name: String,
    pub industry: Industry,
}

/// GET /api/industries
pub async fn list_industries() -> Json<IndustryListResponse> {
    Json(IndustryListResponse {
        industries: Industry::ALL.to_vec(),
    })
}

/// POST /api/industries/classify
pub async fn classify_business(Json(req): Json<ClassifyRequest>) -> Json<ClassifyResponse> {
    let industry = classify(&req.business_name);
    tracing::debug!(business_name = %req.business_name, industry = %industry, "Classified business");
    Json(ClassifyResponse {
        business_name: req.business_name,
        industry,
    })
}

/// Stateless; nest under `/api/industries`.
pub fn industry_routes() -> Router {
    Router::new()
        .route("/", get(list_industries))
        .route("/classify", post(classify_business))
}
