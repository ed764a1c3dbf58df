//! Industry categories offered by the wizard and returned by the classifier.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::domain::foundation::ValidationError;

/// Business vertical used to select report wording.
///
/// Serialized by its display label so API clients see the same strings the
/// form shows (`"Food & Beverage"`, not `"food_and_beverage"`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Industry {
    Technology,
    Healthcare,
    Finance,
    Retail,
    #[serde(rename = "Food & Beverage")]
    FoodAndBeverage,
    #[serde(rename = "Real Estate")]
    RealEstate,
    #[serde(rename = "Professional Services")]
    ProfessionalServices,
    Construction,
    Education,
    Fitness,
    Beauty,
    Automotive,
    Other,
}

impl Industry {
    /// Every selectable industry, in the order the form lists them.
    pub const ALL: [Industry; 13] = [
        Industry::Technology,
        Industry::Healthcare,
        Industry::Finance,
        Industry::Retail,
        Industry::FoodAndBeverage,
        Industry::RealEstate,
        Industry::ProfessionalServices,
        Industry::Construction,
        Industry::Education,
        Industry::Fitness,
        Industry::Beauty,
        Industry::Automotive,
        Industry::Other,
    ];

    /// Human-readable label, also used as template text.
    pub fn label(&self) -> &'static str {
        match self {
            Industry::Technology => "Technology",
            Industry::Healthcare => "Healthcare",
            Industry::Finance => "Finance",
            Industry::Retail => "Retail",
            Industry::FoodAndBeverage => "Food & Beverage",
            Industry::RealEstate => "Real Estate",
            Industry::ProfessionalServices => "Professional Services",
            Industry::Construction => "Construction",
            Industry::Education => "Education",
            Industry::Fitness => "Fitness",
            Industry::Beauty => "Beauty",
            Industry::Automotive => "Automotive",
            Industry::Other => "Other",
        }
    }
}

impl fmt::Display for Industry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for Industry {
    type Err = ValidationError;

    /// Parses a label case-insensitively, ignoring surrounding whitespace.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim();
        Industry::ALL
            .iter()
            .copied()
            .find(|industry| industry.label().eq_ignore_ascii_case(wanted))
            .ok_or_else(|| {
                ValidationError::invalid_format("industry", format!("unknown industry '{}'", wanted))
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn thirteen_selectable_values() {
        assert_eq!(Industry::ALL.len(), 13);
        assert_eq!(Industry::ALL.last(), Some(&Industry::Other));
    }

    #[test]
    fn parses_labels_case_insensitively() {
        assert_eq!("food & beverage".parse::<Industry>(), Ok(Industry::FoodAndBeverage));
        assert_eq!("  Real Estate ".parse::<Industry>(), Ok(Industry::RealEstate));
    }

    #[test]
    fn rejects_unknown_label() {
        assert!("Aerospace".parse::<Industry>().is_err());
    }

    #[test]
    fn serializes_as_label() {
        let json = serde_json::to_string(&Industry::ProfessionalServices).unwrap();
        assert_eq!(json, "\"Professional Services\"");

        let parsed: Industry = serde_json::from_str("\"Food & Beverage\"").unwrap();
        assert_eq!(parsed, Industry::FoodAndBeverage);
    }
}
