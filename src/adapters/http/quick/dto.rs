//! HTTP DTOs for quick report endpoints.

use serde::{Deserialize, Serialize};

use crate::domain::forms::{QuickReport, QuickStatus};
use crate::domain::report::ReportData;

// ════════════════════════════════════════════════════════════════════════════
// Request DTOs
// ════════════════════════════════════════════════════════════════════════════

/// Request to open a quick form. The body may be omitted.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct CreateQuickReportRequest {
    #[serde(default)]
    pub business_name: Option<String>,
}

/// Request to replace the business name.
#[derive(Debug, Clone, Deserialize)]
pub struct SetBusinessNameRequest {
    pub business_name: String,
}

// ════════════════════════════════════════════════════════════════════════════
// Response DTOs
// ════════════════════════════════════════════════════════════════════════════

/// Quick form state as rendered by the front-end.
#[derive(Debug, Clone, Serialize)]
pub struct QuickReportResponse {
    pub id: String,
    pub business_name: String,
    pub status: QuickStatus,
    /// Submit control enabled
    pub can_generate: bool,
    /// Loading indicator shown
    pub is_generating: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub report: Option<ReportData>,
    pub created_at: String,
    pub updated_at: String,
}

impl From<&QuickReport> for QuickReportResponse {
    fn from(form: &QuickReport) -> Self {
        Self {
            id: form.id().to_string(),
            business_name: form.business_name().to_string(),
            status: form.status(),
            can_generate: form.can_generate(),
            is_generating: form.status() == QuickStatus::Generating,
            report: form.report().cloned(),
            created_at: form.created_at().as_datetime().to_rfc3339(),
            updated_at: form.updated_at().as_datetime().to_rfc3339(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::foundation::FormSessionId;

    #[test]
    fn idle_form_omits_report() {
        let form = QuickReport::new(FormSessionId::new());
        let json = serde_json::to_value(QuickReportResponse::from(&form)).unwrap();
        assert_eq!(json["status"], "idle");
        assert_eq!(json["can_generate"], false);
        assert!(json.get("report").is_none());
    }
}
