//! Ports - Interfaces for external dependencies.
//!
//! Following hexagonal architecture, ports define the contracts between
//! the domain and the outside world. Adapters implement these ports.
//!
//! - `QuickReportRepository` / `WizardRepository` - Form session storage
//! - `ReportAnalyzer` - Produces a report from a validated request
//! - `ReportExportService` - Markdown and printable HTML downloads

mod form_repository;
mod report_analyzer;
mod report_export_service;

pub use form_repository::{QuickReportRepository, WizardRepository};
pub use report_analyzer::{AnalysisError, ReportAnalyzer};
pub use report_export_service::{ExportError, ExportFormat, ExportedReport, ReportExportService};
