//! ReportAnalyzer port - turns a validated request into a report.
//!
//! The analyzer is the only asynchronous step in either flow. Callers race
//! it against form resets, so implementations must be cancel-safe: dropping
//! the returned future abandons the analysis with no side effects.

use async_trait::async_trait;
use thiserror::Error;

use crate::domain::report::{ReportData, ReportRequest};

/// Produces business reports.
#[async_trait]
pub trait ReportAnalyzer: Send + Sync {
    /// Builds the report for `request`.
    ///
    /// # Errors
    ///
    /// Returns `AnalysisError` if the report could not be produced.
    async fn analyze(&self, request: &ReportRequest) -> Result<ReportData, AnalysisError>;
}

/// Errors that can occur during analysis.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum AnalysisError {
    /// The request is missing something the analyzer needs.
    #[error("Invalid analysis request: {0}")]
    InvalidRequest(String),

    /// The analyzer backend is not reachable.
    #[error("Analyzer unavailable: {0}")]
    Unavailable(String),
}

impl AnalysisError {
    pub fn invalid_request(reason: impl Into<String>) -> Self {
        Self::InvalidRequest(reason.into())
    }

    pub fn unavailable(reason: impl Into<String>) -> Self {
        Self::Unavailable(reason.into())
    }
}
