//! Shared helpers for the HTTP integration tests.

#![allow(dead_code)]

use std::time::Duration;

use axum::{
    body::Body,
    http::{Request, StatusCode},
    Router,
};
use serde_json::Value;
use tower::ServiceExt;

use enigma_report::adapters::http::{build_router, AppServices};
use enigma_report::adapters::memory::InMemoryFormStore;
use enigma_report::config::AppConfig;

/// Router over a fresh store with an instant analyzer.
pub fn test_app() -> Router {
    test_app_with(AppConfig::default())
}

pub fn test_app_with(config: AppConfig) -> Router {
    build_router(
        &config,
        AppServices::in_memory(InMemoryFormStore::new(), Duration::ZERO),
    )
}

/// Response parts the tests assert on.
pub struct TestResponse {
    pub status: StatusCode,
    pub content_type: Option<String>,
    pub content_disposition: Option<String>,
    pub body: String,
}

impl TestResponse {
    pub fn json(&self) -> Value {
        serde_json::from_str(&self.body).expect("response body is not JSON")
    }
}

pub async fn send(app: &Router, method: &str, uri: &str, body: Option<Value>) -> TestResponse {
    let builder = Request::builder().method(method).uri(uri);
    let request = match body {
        Some(json) => builder
            .header("Content-Type", "application/json")
            .body(Body::from(json.to_string()))
            .unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    };

    let response = app.clone().oneshot(request).await.unwrap();
    let header = |name: &str| {
        response
            .headers()
            .get(name)
            .and_then(|value| value.to_str().ok())
            .map(str::to_string)
    };
    let status = response.status();
    let content_type = header("content-type");
    let content_disposition = header("content-disposition");
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();

    TestResponse {
        status,
        content_type,
        content_disposition,
        body: String::from_utf8(bytes.to_vec()).unwrap(),
    }
}

pub async fn get(app: &Router, uri: &str) -> TestResponse {
    send(app, "GET", uri, None).await
}

pub async fn post(app: &Router, uri: &str, body: Option<Value>) -> TestResponse {
    send(app, "POST", uri, body).await
}
