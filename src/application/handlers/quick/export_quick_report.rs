//! ExportQuickReportHandler - Query handler for downloading a quick report.

use std::sync::Arc;

use super::load;
use crate::domain::forms::FormError;
use crate::domain::foundation::FormSessionId;
use crate::ports::{ExportFormat, ExportedReport, QuickReportRepository, ReportExportService};

#[derive(Debug, Clone)]
pub struct ExportQuickReportQuery {
    pub form_id: FormSessionId,
    pub format: ExportFormat,
}

pub struct ExportQuickReportHandler {
    repository: Arc<dyn QuickReportRepository>,
    exporter: Arc<dyn ReportExportService>,
}

impl ExportQuickReportHandler {
    pub fn new(
        repository: Arc<dyn QuickReportRepository>,
        exporter: Arc<dyn ReportExportService>,
    ) -> Self {
        Self {
            repository,
            exporter,
        }
    }

    /// # Errors
    ///
    /// - `InvalidState` if no report is shown
    pub async fn handle(&self, query: ExportQuickReportQuery) -> Result<ExportedReport, FormError> {
        let form = load(self.repository.as_ref(), query.form_id).await?;
        let report = form
            .report()
            .ok_or_else(|| FormError::invalid_state("there is no report to export yet"))?;

        self.exporter
            .export(report, query.format)
            .await
            .map_err(|e| FormError::infrastructure(e.to_string()))
    }
}
