//! String helpers for building pseudo-domain names and keyword phrases.

/// Lower-cases `text` and strips all whitespace: `"Real Estate"` becomes
/// `"realestate"`. Punctuation is kept.
pub fn slugify(text: &str) -> String {
    text.to_lowercase().split_whitespace().collect()
}

/// First comma-delimited token of a location, trimmed.
///
/// `"Austin, TX"` yields `"Austin"`; an empty location yields `""`.
pub fn primary_locality(location: &str) -> &str {
    location.split(',').next().unwrap_or_default().trim()
}

/// Builds `www.{parts...}.com` from slugified parts.
pub fn pseudo_domain(parts: &[&str]) -> String {
    let body: String = parts.iter().map(|part| slugify(part)).collect();
    format!("www.{}.com", body)
}

/// Joins the non-blank parts with single spaces.
pub fn phrase(parts: &[&str]) -> String {
    parts
        .iter()
        .map(|part| part.trim())
        .filter(|part| !part.is_empty())
        .collect::<Vec<_>>()
        .join(" ")
}
