//! ExportWizardReportHandler - Query handler for downloading a guided report.

use std::sync::Arc;

use super::load;
use crate::domain::forms::FormError;
use crate::domain::foundation::FormSessionId;
use crate::ports::{ExportFormat, ExportedReport, ReportExportService, WizardRepository};

#[derive(Debug, Clone)]
pub struct ExportWizardReportQuery {
    pub form_id: FormSessionId,
    pub format: ExportFormat,
}

pub struct ExportWizardReportHandler {
    repository: Arc<dyn WizardRepository>,
    exporter: Arc<dyn ReportExportService>,
}

impl ExportWizardReportHandler {
    pub fn new(
        repository: Arc<dyn WizardRepository>,
        exporter: Arc<dyn ReportExportService>,
    ) -> Self {
        Self {
            repository,
            exporter,
        }
    }

    pub async fn handle(
        &self,
        query: ExportWizardReportQuery,
    ) -> Result<ExportedReport, FormError> {
        let wizard = load(self.repository.as_ref(), query.form_id).await?;
        let report = wizard
            .report()
            .ok_or_else(|| FormError::invalid_state("the wizard has not produced a report yet"))?;

        self.exporter
            .export(report, query.format)
            .await
            .map_err(|e| FormError::infrastructure(e.to_string()))
    }
}
