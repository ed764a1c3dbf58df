//! Validated inputs for report synthesis.

use serde::{Deserialize, Serialize};

use super::BusinessInput;
use crate::domain::foundation::ValidationError;
use crate::domain::industry::Industry;

/// Fields for a wizard report, after the form gates have passed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GuidedRequest {
    pub business_name: String,
    pub industry: Industry,
    pub location: String,
    /// `None` when the website field was left blank.
    pub website_url: Option<String>,
    pub description: String,
}

impl GuidedRequest {
    /// Builds a request from raw wizard fields, trimming text and requiring
    /// an industry selection.
    pub fn from_input(input: &BusinessInput) -> Result<Self, ValidationError> {
        let industry = input
            .industry
            .ok_or_else(|| ValidationError::empty_field("industry"))?;

        Ok(Self {
            business_name: input.business_name.trim().to_string(),
            industry,
            location: input.target_location.trim().to_string(),
            website_url: input
                .has_website()
                .then(|| input.website_url.trim().to_string()),
            description: input.business_description.trim().to_string(),
        })
    }
}

/// What the synthesizer is asked to build.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "variant", rename_all = "snake_case")]
pub enum ReportRequest {
    /// Single-field flow; the industry is inferred from the name.
    Quick { business_name: String },
    /// Wizard flow with explicit industry and location.
    Guided(GuidedRequest),
}

impl ReportRequest {
    pub fn quick(business_name: impl Into<String>) -> Self {
        ReportRequest::Quick {
            business_name: business_name.into(),
        }
    }

    pub fn business_name(&self) -> &str {
        match self {
            ReportRequest::Quick { business_name } => business_name,
            ReportRequest::Guided(request) => &request.business_name,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_input_trims_and_drops_blank_website() {
        let input = BusinessInput {
            business_name: "  Acme Plumbing Co ".to_string(),
            industry: Some(Industry::Construction),
            website_url: "  ".to_string(),
            target_location: " Austin, TX ".to_string(),
            business_description: " Residential plumbing and repairs. ".to_string(),
        };

        let request = GuidedRequest::from_input(&input).unwrap();
        assert_eq!(request.business_name, "Acme Plumbing Co");
        assert_eq!(request.location, "Austin, TX");
        assert_eq!(request.website_url, None);
        assert_eq!(request.description, "Residential plumbing and repairs.");
    }

    #[test]
    fn from_input_keeps_trimmed_website() {
        let input = BusinessInput {
            business_name: "Acme".to_string(),
            industry: Some(Industry::Construction),
            website_url: " https://acme.example ".to_string(),
            ..Default::default()
        };

        let request = GuidedRequest::from_input(&input).unwrap();
        assert_eq!(request.website_url.as_deref(), Some("https://acme.example"));
    }

    #[test]
    fn from_input_requires_industry() {
        let input = BusinessInput {
            business_name: "Acme".to_string(),
            ..Default::default()
        };
        assert_eq!(
            GuidedRequest::from_input(&input),
            Err(ValidationError::empty_field("industry"))
        );
    }

    #[test]
    fn request_serializes_with_variant_tag() {
        let json = serde_json::to_value(ReportRequest::quick("Acme")).unwrap();
        assert_eq!(json["variant"], "quick");
        assert_eq!(json["business_name"], "Acme");
    }
}
