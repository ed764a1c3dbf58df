//! Deterministic report synthesis.
//!
//! Every section is template text keyed on the business name, industry, and
//! (for wizard reports) location. There is no randomness and no I/O: equal
//! requests give equal reports.

use super::slug::{phrase, primary_locality, pseudo_domain};
use super::{
    Competitor, Difficulty, GuidedRequest, KeywordTrend, MarketTrend, ReportData, ReportRequest,
    ReportVariant, SeoKeyword, TrendDirection,
};
use crate::domain::industry::{classify, Industry};

/// Number of competitor records in every report.
pub const COMPETITOR_COUNT: usize = 4;
/// Number of market trend records in every report.
pub const MARKET_TREND_COUNT: usize = 5;
/// Number of SEO keyword records in every report.
pub const SEO_KEYWORD_COUNT: usize = 8;

/// Builds a complete report for either form variant.
pub fn synthesize(request: &ReportRequest) -> ReportData {
    match request {
        ReportRequest::Quick { business_name } => synthesize_quick(business_name),
        ReportRequest::Guided(guided) => synthesize_guided(guided),
    }
}

/// Single-field report: the industry is inferred from the name and the
/// location is left generic.
pub fn synthesize_quick(business_name: &str) -> ReportData {
    let industry = classify(business_name);
    let label = industry.label();
    let lower_owned = label.to_lowercase();
    let lower = lower_owned.as_str();

    ReportData {
        business_name: business_name.to_string(),
        industry,
        variant: ReportVariant::Quick,
        overview: format!(
            "{business_name} operates in the {lower} sector with significant market potential. \
             Based on industry analysis, businesses in this sector are experiencing increased \
             demand for digital transformation and online presence. The company has strong \
             opportunities to capture market share through strategic positioning, enhanced \
             digital marketing, and customer-centric service delivery."
        ),
        strengths: vec![
            format!("Established brand identity as \"{business_name}\""),
            format!("Operating in growing {label} market"),
            "Opportunity to define unique value proposition".to_string(),
            "Flexibility to adapt to market trends".to_string(),
            "Potential for strong customer relationships".to_string(),
        ],
        weaknesses: vec![
            "Limited or no current web presence detected".to_string(),
            "Need for stronger online visibility and SEO".to_string(),
            "Customer acquisition cost may be high without digital channels".to_string(),
            "Missing opportunities from organic search traffic".to_string(),
            "Competitors may have established digital presence".to_string(),
        ],
        opportunities: vec![
            "Develop a professional, conversion-optimized website".to_string(),
            "Implement comprehensive SEO strategy for local and industry keywords".to_string(),
            "Create content marketing to establish thought leadership".to_string(),
            "Leverage Google Business Profile for local visibility".to_string(),
            "Build email marketing funnel for customer retention".to_string(),
            "Establish strong social media presence".to_string(),
        ],
        competitors: {
            let mut competitors = national_competitors(industry);
            competitors.push(Competitor {
                name: format!("Local {label} Experts"),
                website: pseudo_domain(&["local", label, "experts"]),
                description: format!(
                    "Community-focused {lower} business with strong local ties and engagement."
                ),
                strength: "Local Trust".to_string(),
            });
            competitors
        },
        market_trends: market_trends(industry),
        seo_keywords: vec![
            keyword(phrase(&[lower, "near me"]), "5,100/mo", Difficulty::High, KeywordTrend::Up),
            keyword(phrase(&["best", lower, "services"]), "2,400/mo", Difficulty::Medium, KeywordTrend::Up),
            keyword(phrase(&[lower, "company"]), "1,800/mo", Difficulty::Medium, KeywordTrend::Up),
            keyword(phrase(&["affordable", lower]), "3,600/mo", Difficulty::Medium, KeywordTrend::Stable),
            keyword(phrase(&[lower, "reviews"]), "890/mo", Difficulty::Low, KeywordTrend::Up),
            keyword(phrase(&["local", lower]), "720/mo", Difficulty::Low, KeywordTrend::Up),
            keyword(phrase(&[lower, "consultation"]), "1,200/mo", Difficulty::Low, KeywordTrend::Up),
            keyword(phrase(&["top rated", lower]), "480/mo", Difficulty::Medium, KeywordTrend::Up),
        ],
        action_plan: vec![
            "Build a professional, mobile-responsive website optimized for conversions".to_string(),
            "Claim and optimize Google Business Profile with photos, hours, and service details"
                .to_string(),
            format!("Implement SEO targeting \"{lower}\" and related keywords"),
            "Create valuable content (blog posts, guides, FAQs) to attract organic traffic"
                .to_string(),
            "Set up email capture with lead magnets for prospect nurturing".to_string(),
            "Establish presence on 2-3 key social media platforms for your audience".to_string(),
            "Implement Google Analytics to track performance and user behavior".to_string(),
            "Launch targeted Google Ads campaign for high-intent keywords".to_string(),
            "Develop a customer review strategy to build social proof".to_string(),
            "Create a referral program to leverage satisfied customers".to_string(),
        ],
    }
}

/// Wizard report: industry is the user's selection and copy is localized to
/// the first token of the target location.
pub fn synthesize_guided(request: &GuidedRequest) -> ReportData {
    let GuidedRequest {
        business_name,
        industry,
        location,
        website_url,
        description,
    } = request;
    let industry = *industry;
    let label = industry.label();
    let lower_owned = label.to_lowercase();
    let lower = lower_owned.as_str();
    let city = primary_locality(location);
    let city_owned = city.to_lowercase();
    let city_lower = city_owned.as_str();
    let area = if city.is_empty() { "your local area" } else { city };
    let local_brand = if city.is_empty() { "Local" } else { city };

    let mut overview = format!("{business_name} is a {lower} business serving {location}.");
    if !description.is_empty() {
        overview.push(' ');
        overview.push_str(description);
    }
    overview.push_str(&format!(
        " Based on industry analysis, {lower} businesses in {area} are experiencing \
         increased demand for digital transformation and online presence. The company \
         has strong opportunities to capture local market share through strategic \
         positioning, enhanced digital marketing, and customer-centric service delivery."
    ));

    let web_presence = if website_url.is_some() {
        "Existing website may need SEO optimization"
    } else {
        "Limited or no current web presence detected"
    };

    ReportData {
        business_name: business_name.clone(),
        industry,
        variant: ReportVariant::Guided,
        overview,
        strengths: vec![
            format!("Established brand identity as \"{business_name}\""),
            format!("Operating in growing {label} market in {area}"),
            format!("Local market knowledge of {area}"),
            "Opportunity to define unique value proposition".to_string(),
            "Potential for strong customer relationships".to_string(),
        ],
        weaknesses: vec![
            web_presence.to_string(),
            format!("Need for stronger visibility in {area} search results"),
            "Customer acquisition cost may be high without digital channels".to_string(),
            "Missing opportunities from organic search traffic".to_string(),
            format!("Competitors in {area} may have established digital presence"),
        ],
        opportunities: vec![
            "Optimize the online customer journey from search to conversion".to_string(),
            format!(
                "Rank for \"{}\" and related local keywords",
                phrase(&[lower, "in", city_lower])
            ),
            "Create content marketing to establish thought leadership".to_string(),
            format!("Leverage Google Business Profile for visibility in {area}"),
            "Build email marketing funnel for customer retention".to_string(),
            format!("Partner with complementary businesses in {area} for referrals"),
        ],
        competitors: {
            let mut competitors = national_competitors(industry);
            competitors.push(Competitor {
                name: format!("{local_brand} {label} Experts"),
                website: pseudo_domain(&[local_brand, label, "experts"]),
                description: format!(
                    "Community-focused {lower} business with strong ties across {area}."
                ),
                strength: "Local Trust".to_string(),
            });
            competitors
        },
        market_trends: market_trends(industry),
        seo_keywords: vec![
            keyword(phrase(&[lower, "near me"]), "5,100/mo", Difficulty::High, KeywordTrend::Up),
            keyword(phrase(&["best", lower, "in", city_lower]), "2,400/mo", Difficulty::Medium, KeywordTrend::Up),
            keyword(phrase(&[lower, city_lower]), "1,900/mo", Difficulty::Medium, KeywordTrend::Up),
            keyword(phrase(&["affordable", lower, city_lower]), "1,300/mo", Difficulty::Medium, KeywordTrend::Stable),
            keyword(phrase(&[lower, "reviews", city_lower]), "880/mo", Difficulty::Low, KeywordTrend::Up),
            keyword(phrase(&["local", lower, "services"]), "720/mo", Difficulty::Low, KeywordTrend::Up),
            keyword(phrase(&[lower, "consultation"]), "1,200/mo", Difficulty::Low, KeywordTrend::Up),
            keyword(phrase(&["top rated", lower, city_lower]), "480/mo", Difficulty::Medium, KeywordTrend::Up),
        ],
        action_plan: vec![
            "Build or refresh a professional, mobile-responsive website optimized for conversions"
                .to_string(),
            format!(
                "Claim and optimize Google Business Profile for {area} with photos, hours, and service details"
            ),
            format!(
                "Implement SEO targeting \"{}\" and related local keywords",
                phrase(&[lower, city_lower])
            ),
            "Create valuable content (blog posts, guides, FAQs) to attract organic traffic"
                .to_string(),
            "Set up email capture with lead magnets for prospect nurturing".to_string(),
            "Establish presence on 2-3 key social media platforms for your audience".to_string(),
            "Implement Google Analytics to track performance and user behavior".to_string(),
            format!("Launch geo-targeted Google Ads campaigns for high-intent searches in {area}"),
            "Develop a customer review strategy to build social proof".to_string(),
            format!("Join {area} business associations and community events to grow referrals"),
        ],
    }
}

/// The three brand-template competitors shared by both variants.
fn national_competitors(industry: Industry) -> Vec<Competitor> {
    let label = industry.label();
    let lower = label.to_lowercase();

    vec![
        Competitor {
            name: format!("{label} Solutions Pro"),
            website: pseudo_domain(&[label, "solutions", "pro"]),
            description: format!(
                "Established {lower} provider with comprehensive service offerings. \
                 Known for reliable service and competitive pricing."
            ),
            strength: "Strong Reviews".to_string(),
        },
        Competitor {
            name: format!("Premier {label} Group"),
            website: pseudo_domain(&["premier", label]),
            description: format!(
                "Full-service {lower} company with heavy investment in digital marketing and SEO presence."
            ),
            strength: "Great SEO".to_string(),
        },
        Competitor {
            name: format!("Elite {label} Services"),
            website: pseudo_domain(&["elite", label, "services"]),
            description: format!(
                "Premium {lower} provider targeting high-end clients with emphasis on quality."
            ),
            strength: "Premium Brand".to_string(),
        },
    ]
}

fn market_trends(industry: Industry) -> Vec<MarketTrend> {
    vec![
        trend("Digital-first customer journeys", "73%", TrendDirection::Up),
        trend(format!("{} online search growth", industry.label()), "45%", TrendDirection::Up),
        trend("Mobile commerce adoption", "62%", TrendDirection::Up),
        trend("Local SEO importance", "88%", TrendDirection::Up),
        trend("Traditional advertising effectiveness", "23%", TrendDirection::Down),
    ]
}

fn trend(text: impl Into<String>, percentage: &str, direction: TrendDirection) -> MarketTrend {
    MarketTrend {
        trend: text.into(),
        percentage: percentage.to_string(),
        direction,
    }
}

fn keyword(
    keyword: String,
    volume: &str,
    difficulty: Difficulty,
    trend: KeywordTrend,
) -> SeoKeyword {
    SeoKeyword {
        keyword,
        volume: volume.to_string(),
        difficulty,
        trend,
    }
}
