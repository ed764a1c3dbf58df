//! Document adapters - report rendering and export.
//!
//! - `MarkdownReportRenderer` - Fixed-template markdown layout of a report
//! - `PulldownReportExporter` - `ReportExportService` producing markdown and
//!   print-ready HTML

mod markdown_renderer;
mod report_exporter;

pub use markdown_renderer::{escape_inline, MarkdownReportRenderer, ReportSection};
pub use report_exporter::PulldownReportExporter;
