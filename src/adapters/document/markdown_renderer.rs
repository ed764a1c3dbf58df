//! Template-based report renderer.
//!
//! Lays a [`ReportData`] out as markdown in a fixed section order. The HTML
//! exporter renders the same sections one by one so it can attach print
//! rules to each.

use crate::domain::report::{
    Competitor, KeywordTrend, MarketTrend, ReportData, SeoKeyword, TrendDirection,
};

/// One titled block of the rendered report.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReportSection {
    pub title: &'static str,
    /// Printed documents start this section on a fresh page.
    pub page_break: bool,
    pub markdown: String,
}

/// Renders reports with a fixed markdown template.
#[derive(Debug, Clone, Default)]
pub struct MarkdownReportRenderer;

impl MarkdownReportRenderer {
    pub fn new() -> Self {
        Self
    }

    /// Full markdown document: header followed by every section.
    pub fn render(&self, report: &ReportData) -> String {
        let mut doc = self.header(report);
        for section in self.sections(report) {
            doc.push_str(&format!("## {}\n\n", section.title));
            doc.push_str(&section.markdown);
        }
        doc
    }

    /// Report title and industry line.
    pub fn header(&self, report: &ReportData) -> String {
        format!(
            "# Business Report: {}\n\nIndustry: {}\n\n",
            escape_inline(report.business_name()),
            escape_inline(report.industry().label())
        )
    }

    /// Section bodies in display order, without their `##` headings.
    pub fn sections(&self, report: &ReportData) -> Vec<ReportSection> {
        vec![
            section("Business Overview", false, paragraph(report.overview())),
            section("Strengths", false, bullets(report.strengths())),
            section("Weaknesses", false, bullets(report.weaknesses())),
            section(
                "Revenue Generation Opportunities",
                true,
                numbered(report.opportunities()),
            ),
            section(
                "Competitor Analysis",
                false,
                competitors(report.competitors()),
            ),
            section("Market Trends", true, market_trends(report.market_trends())),
            section(
                "SEO Keywords & Search Trends",
                false,
                keyword_table(report.seo_keywords()),
            ),
            section("Action Plan", true, numbered(report.action_plan())),
        ]
    }
}

fn section(title: &'static str, page_break: bool, markdown: String) -> ReportSection {
    ReportSection {
        title,
        page_break,
        markdown,
    }
}

fn paragraph(text: &str) -> String {
    format!("{}\n\n", escape_inline(text))
}

fn bullets(items: &[String]) -> String {
    let mut out: String = items
        .iter()
        .map(|item| format!("- {}\n", escape_inline(item)))
        .collect();
    out.push('\n');
    out
}

fn numbered(items: &[String]) -> String {
    let mut out: String = items
        .iter()
        .enumerate()
        .map(|(i, item)| format!("{}. {}\n", i + 1, escape_inline(item)))
        .collect();
    out.push('\n');
    out
}

fn competitors(competitors: &[Competitor]) -> String {
    let mut out = String::new();
    for c in competitors {
        out.push_str(&format!("### {}\n\n", escape_inline(&c.name)));
        out.push_str(&format!(
            "*{}* · {}\n\n",
            escape_inline(&c.strength),
            escape_inline(&c.website)
        ));
        out.push_str(&format!("{}\n\n", escape_inline(&c.description)));
    }
    out
}

fn market_trends(trends: &[MarketTrend]) -> String {
    let mut out: String = trends
        .iter()
        .map(|t| {
            let arrow = match t.direction {
                TrendDirection::Up => "↑",
                TrendDirection::Down => "↓",
            };
            format!(
                "- {}: **{}** {}\n",
                escape_inline(&t.trend),
                escape_inline(&t.percentage),
                arrow
            )
        })
        .collect();
    out.push('\n');
    out
}

fn keyword_table(keywords: &[SeoKeyword]) -> String {
    let mut out = String::from("| Keyword | Volume | Difficulty | Trend |\n");
    out.push_str("|---------|--------|------------|-------|\n");
    for k in keywords {
        let trend = match k.trend {
            KeywordTrend::Up => "↑ up",
            KeywordTrend::Down => "↓ down",
            KeywordTrend::Stable => "→ stable",
        };
        out.push_str(&format!(
            "| {} | {} | {:?} | {} |\n",
            escape_inline(&k.keyword),
            escape_inline(&k.volume),
            k.difficulty,
            trend
        ));
    }
    out.push('\n');
    out
}

/// Backslash-escapes characters that would otherwise be read as markdown
/// syntax (or raw HTML) in user-supplied text.
pub fn escape_inline(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for ch in text.chars() {
        if matches!(
            ch,
            '\\' | '*' | '_' | '`' | '[' | ']' | '<' | '>' | '|' | '#'
        ) {
            out.push('\\');
        }
        // Newlines in a field would break list items and table rows.
        if ch == '\n' || ch == '\r' {
            out.push(' ');
            continue;
        }
        out.push(ch);
    }
    out
}
