//! Report model and deterministic synthesis.
//!
//! # Components
//!
//! - `model` - Report value objects (`ReportData`, `Competitor`, `SeoKeyword`, ...)
//! - `request` - Validated synthesis inputs for the quick and guided forms
//! - `synthesizer` - Template-driven report construction
//! - `slug` - Pseudo-domain and keyword phrase helpers shared by both variants
//!
//! All functions here are pure: no clocks, no randomness, no I/O.

mod model;
mod request;
pub mod slug;
mod synthesizer;

pub use model::{
    BusinessInput, Competitor, Difficulty, KeywordTrend, MarketTrend, ReportData, ReportVariant,
    SeoKeyword, TrendDirection,
};
pub use request::{GuidedRequest, ReportRequest};
pub use synthesizer::{
    synthesize, synthesize_guided, synthesize_quick, COMPETITOR_COUNT, MARKET_TREND_COUNT,
    SEO_KEYWORD_COUNT,
};
