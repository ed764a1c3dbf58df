//! Pulldown-cmark based report exporter.
//!
//! Markdown export is the renderer's output as-is. HTML export renders each
//! report section through pulldown-cmark and wraps the result in a
//! standalone page whose print stylesheet hides the on-screen toolbar and
//! starts selected sections on a new page. Printing that page from the
//! browser is the PDF export.

use async_trait::async_trait;
use pulldown_cmark::{html, Event, Options, Parser};

use super::markdown_renderer::{MarkdownReportRenderer, ReportSection};
use crate::domain::report::ReportData;
use crate::ports::{ExportError, ReportExportService};

/// Export service using the markdown template and pulldown-cmark for HTML.
#[derive(Debug, Clone)]
pub struct PulldownReportExporter {
    renderer: MarkdownReportRenderer,
    include_default_css: bool,
}

impl Default for PulldownReportExporter {
    fn default() -> Self {
        Self::new()
    }
}

impl PulldownReportExporter {
    pub fn new() -> Self {
        Self {
            renderer: MarkdownReportRenderer::new(),
            include_default_css: true,
        }
    }

    /// Disable default CSS styling for HTML output. Print rules are kept.
    pub fn without_default_css(mut self) -> Self {
        self.include_default_css = false;
        self
    }

    fn section_html(&self, section: &ReportSection) -> String {
        let class = if section.page_break {
            "report-section page-break"
        } else {
            "report-section"
        };
        format!(
            "<section class=\"{class}\">\n<h2>{title}</h2>\n{body}</section>\n",
            class = class,
            title = html_escape(section.title),
            body = markdown_to_html(&section.markdown)
        )
    }

    fn wrap_html(&self, body: String, title: &str) -> String {
        let css = if self.include_default_css {
            DEFAULT_CSS
        } else {
            ""
        };

        format!(
            r#"<!DOCTYPE html>
<html lang="en">
<head>
    <meta charset="UTF-8">
    <meta name="viewport" content="width=device-width, initial-scale=1.0">
    <title>{title}</title>
    <style>
{css}
{print_css}
    </style>
</head>
<body>
    <div class="toolbar no-print">
        <button type="button" onclick="window.print()">Export to PDF</button>
    </div>
    <article class="business-report">
{body}
    </article>
</body>
</html>"#,
            title = html_escape(title),
            css = css,
            print_css = PRINT_CSS,
            body = body
        )
    }
}

#[async_trait]
impl ReportExportService for PulldownReportExporter {
    async fn to_markdown(&self, report: &ReportData) -> Result<String, ExportError> {
        Ok(self.renderer.render(report))
    }

    async fn to_html(&self, report: &ReportData) -> Result<String, ExportError> {
        let mut body = markdown_to_html(&self.renderer.header(report));
        for section in self.renderer.sections(report) {
            body.push_str(&self.section_html(&section));
        }

        let title = format!("Business Report: {}", report.business_name());
        Ok(self.wrap_html(body, &title))
    }
}

/// Renders markdown with tables enabled; raw HTML in the input is emitted
/// as escaped text rather than markup.
fn markdown_to_html(markdown: &str) -> String {
    let parser = Parser::new_ext(markdown, Options::ENABLE_TABLES).map(|event| match event {
        Event::Html(raw) | Event::InlineHtml(raw) => Event::Text(raw),
        other => other,
    });

    let mut out = String::new();
    html::push_html(&mut out, parser);
    out
}

/// Escape HTML special characters.
fn html_escape(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
}

/// Rules that apply even without the default theme.
const PRINT_CSS: &str = r#"
@media print {
    .no-print {
        display: none !important;
    }

    .page-break {
        break-before: page;
        page-break-before: always;
    }

    body {
        background: #ffffff;
        color: #000000;
    }
}
"#;

/// Default CSS for styled HTML output.
const DEFAULT_CSS: &str = r#"
:root {
    --accent-color: #4f46e5;
    --text-color: #1f2937;
    --muted-color: #6b7280;
    --border-color: #e5e7eb;
    --panel-bg: #f9fafb;
}

* {
    box-sizing: border-box;
}

body {
    font-family: -apple-system, BlinkMacSystemFont, 'Segoe UI', Roboto, 'Helvetica Neue', Arial, sans-serif;
    font-size: 16px;
    line-height: 1.6;
    color: var(--text-color);
    max-width: 960px;
    margin: 0 auto;
    padding: 2rem;
}

.toolbar {
    display: flex;
    justify-content: flex-end;
    margin-bottom: 1rem;
}

.toolbar button {
    background: var(--accent-color);
    color: #ffffff;
    border: none;
    border-radius: 0.5rem;
    padding: 0.5rem 1rem;
    font-size: 0.9rem;
    cursor: pointer;
}

.business-report > h1 {
    text-align: center;
    margin-bottom: 0.25rem;
}

.business-report > p:first-of-type {
    text-align: center;
    color: var(--accent-color);
}

.report-section {
    background: var(--panel-bg);
    border: 1px solid var(--border-color);
    border-radius: 1rem;
    padding: 1.5rem;
    margin: 2rem 0;
}

.report-section h2 {
    margin-top: 0;
    font-size: 1.25rem;
}

.report-section h3 {
    margin-bottom: 0.25rem;
    font-size: 1rem;
}

table {
    width: 100%;
    border-collapse: collapse;
}

th, td {
    padding: 0.5rem 0.75rem;
    text-align: left;
    border-bottom: 1px solid var(--border-color);
}

th {
    color: var(--muted-color);
    font-weight: 500;
}
"#;
