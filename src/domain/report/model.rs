//! Report value objects.
//!
//! A [`ReportData`] is produced in one step by the synthesizer and never
//! patched afterwards: there are accessors but no setters. Forms replace a
//! report wholesale or drop it on reset.

use serde::{Deserialize, Serialize};

use crate::domain::industry::Industry;

/// Raw form fields collected by the wizard.
///
/// Every field starts empty and is edited one at a time; optional fields
/// stay as empty strings rather than `None` so the form can echo them back.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct BusinessInput {
    pub business_name: String,
    pub industry: Option<Industry>,
    pub website_url: String,
    pub target_location: String,
    pub business_description: String,
}

impl BusinessInput {
    /// True when a non-blank website URL was supplied.
    pub fn has_website(&self) -> bool {
        !self.website_url.trim().is_empty()
    }
}

/// Keyword competition tier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Difficulty {
    Low,
    Medium,
    High,
}

/// Search interest direction for a keyword.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum KeywordTrend {
    Up,
    Down,
    Stable,
}

/// Direction of a market trend.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TrendDirection {
    Up,
    Down,
}

/// Which form produced the report.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ReportVariant {
    /// Single business-name field, industry inferred.
    Quick,
    /// Multi-step wizard with industry, location, and description.
    Guided,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Competitor {
    pub name: String,
    pub website: String,
    pub description: String,
    pub strength: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SeoKeyword {
    pub keyword: String,
    pub volume: String,
    pub difficulty: Difficulty,
    pub trend: KeywordTrend,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MarketTrend {
    pub trend: String,
    /// Display string such as `"73%"`.
    pub percentage: String,
    pub direction: TrendDirection,
}

/// Complete synthesized business report.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ReportData {
    pub(super) business_name: String,
    pub(super) industry: Industry,
    pub(super) variant: ReportVariant,
    pub(super) overview: String,
    pub(super) strengths: Vec<String>,
    pub(super) weaknesses: Vec<String>,
    pub(super) opportunities: Vec<String>,
    pub(super) competitors: Vec<Competitor>,
    pub(super) market_trends: Vec<MarketTrend>,
    pub(super) seo_keywords: Vec<SeoKeyword>,
    pub(super) action_plan: Vec<String>,
}

impl ReportData {
    pub fn business_name(&self) -> &str {
        &self.business_name
    }

    /// Industry the report was written for (inferred or selected).
    pub fn industry(&self) -> Industry {
        self.industry
    }

    pub fn variant(&self) -> ReportVariant {
        self.variant
    }

    pub fn overview(&self) -> &str {
        &self.overview
    }

    pub fn strengths(&self) -> &[String] {
        &self.strengths
    }

    pub fn weaknesses(&self) -> &[String] {
        &self.weaknesses
    }

    pub fn opportunities(&self) -> &[String] {
        &self.opportunities
    }

    pub fn competitors(&self) -> &[Competitor] {
        &self.competitors
    }

    pub fn market_trends(&self) -> &[MarketTrend] {
        &self.market_trends
    }

    pub fn seo_keywords(&self) -> &[SeoKeyword] {
        &self.seo_keywords
    }

    pub fn action_plan(&self) -> &[String] {
        &self.action_plan
    }
}
