//! HTTP DTOs for wizard endpoints.

use serde::{Deserialize, Serialize};

use crate::domain::forms::{Wizard, WizardFields, WizardStep};
use crate::domain::foundation::ValidationError;
use crate::domain::industry::Industry;
use crate::domain::report::{BusinessInput, ReportData};

/// Steps that take input, shown by the progress indicator.
pub const INPUT_STEPS: u8 = 4;

// ════════════════════════════════════════════════════════════════════════════
// Request DTOs
// ════════════════════════════════════════════════════════════════════════════

/// Partial field update; omitted fields are left as they are.
///
/// `industry` takes a display label such as `"Food & Beverage"`
/// (case-insensitive).
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct UpdateWizardFieldsRequest {
    pub business_name: Option<String>,
    pub industry: Option<String>,
    pub website_url: Option<String>,
    pub target_location: Option<String>,
    pub business_description: Option<String>,
}

impl UpdateWizardFieldsRequest {
    pub fn into_fields(self) -> Result<WizardFields, ValidationError> {
        let industry = self
            .industry
            .map(|label| label.parse::<Industry>())
            .transpose()?;

        Ok(WizardFields {
            business_name: self.business_name,
            industry,
            website_url: self.website_url,
            target_location: self.target_location,
            business_description: self.business_description,
        })
    }
}

// ════════════════════════════════════════════════════════════════════════════
// Response DTOs
// ════════════════════════════════════════════════════════════════════════════

/// Wizard state as rendered by the front-end.
#[derive(Debug, Clone, Serialize)]
pub struct WizardResponse {
    pub id: String,
    pub step: WizardStep,
    pub step_number: u8,
    pub total_steps: u8,
    /// Forward control enabled
    pub can_advance: bool,
    /// Back control enabled
    pub can_go_back: bool,
    pub is_generating: bool,
    pub fields: BusinessInput,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub report: Option<ReportData>,
    pub created_at: String,
    pub updated_at: String,
}

impl From<&Wizard> for WizardResponse {
    fn from(wizard: &Wizard) -> Self {
        Self {
            id: wizard.id().to_string(),
            step: wizard.step(),
            step_number: wizard.step().number(),
            total_steps: INPUT_STEPS,
            can_advance: wizard.can_advance(),
            can_go_back: wizard.can_go_back(),
            is_generating: wizard.step() == WizardStep::Generating,
            fields: wizard.input().clone(),
            report: wizard.report().cloned(),
            created_at: wizard.created_at().as_datetime().to_rfc3339(),
            updated_at: wizard.updated_at().as_datetime().to_rfc3339(),
        }
    }
}
