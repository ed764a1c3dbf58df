//! Report Export Service Port - Report download interface.
//!
//! Reports are rendered to markdown first; HTML is produced from that
//! markdown and wrapped in a printable page, so "Export to PDF" is just the
//! browser's print dialog on the HTML export.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::domain::report::{slug::slugify, ReportData};

/// Port for exporting reports.
///
/// # Contract
///
/// Implementations must:
/// - Include every section of the report, in display order
/// - Escape user-supplied text so it cannot inject markup
/// - Produce a standalone document for HTML (`<html>`, `<head>`, `<body>`)
#[async_trait]
pub trait ReportExportService: Send + Sync {
    /// Render the report as markdown.
    async fn to_markdown(&self, report: &ReportData) -> Result<String, ExportError>;

    /// Render the report as a complete, print-ready HTML page.
    async fn to_html(&self, report: &ReportData) -> Result<String, ExportError>;

    /// Render in the requested format, with a download filename.
    async fn export(
        &self,
        report: &ReportData,
        format: ExportFormat,
    ) -> Result<ExportedReport, ExportError> {
        let content = match format {
            ExportFormat::Markdown => self.to_markdown(report).await?,
            ExportFormat::Html => self.to_html(report).await?,
        };
        Ok(ExportedReport::new(content, format, report.business_name()))
    }
}

/// Export formats supported by the service.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ExportFormat {
    Markdown,
    Html,
}

impl ExportFormat {
    /// MIME content type for this format.
    pub fn content_type(&self) -> &'static str {
        match self {
            ExportFormat::Markdown => "text/markdown; charset=utf-8",
            ExportFormat::Html => "text/html; charset=utf-8",
        }
    }

    pub fn extension(&self) -> &'static str {
        match self {
            ExportFormat::Markdown => "md",
            ExportFormat::Html => "html",
        }
    }
}

impl std::fmt::Display for ExportFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ExportFormat::Markdown => write!(f, "markdown"),
            ExportFormat::Html => write!(f, "html"),
        }
    }
}

impl std::str::FromStr for ExportFormat {
    type Err = ExportError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "markdown" | "md" => Ok(ExportFormat::Markdown),
            "html" | "htm" => Ok(ExportFormat::Html),
            _ => Err(ExportError::UnsupportedFormat(s.to_string())),
        }
    }
}

/// Rendered report ready to send as a download.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExportedReport {
    pub content: String,
    pub content_type: &'static str,
    pub filename: String,
    pub format: ExportFormat,
}

impl ExportedReport {
    /// Wraps rendered content. The filename keeps only ASCII alphanumerics
    /// of the business name so it is safe in a `Content-Disposition` header.
    pub fn new(content: String, format: ExportFormat, business_name: &str) -> Self {
        let stem: String = slugify(business_name)
            .chars()
            .filter(|c| c.is_ascii_alphanumeric())
            .collect();
        let stem = if stem.is_empty() { "business".to_string() } else { stem };
        Self {
            content,
            content_type: format.content_type(),
            filename: format!("{}-report.{}", stem, format.extension()),
            format,
        }
    }
}

/// Errors that can occur during report export.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ExportError {
    #[error("Unsupported export format: {0}")]
    UnsupportedFormat(String),
}
