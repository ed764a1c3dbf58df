//! GetQuickReportHandler - Query handler for reading a quick form.

use std::sync::Arc;

use super::load;
use crate::domain::forms::{FormError, QuickReport};
use crate::domain::foundation::FormSessionId;
use crate::ports::QuickReportRepository;

#[derive(Debug, Clone)]
pub struct GetQuickReportQuery {
    pub form_id: FormSessionId,
}

pub struct GetQuickReportHandler {
    repository: Arc<dyn QuickReportRepository>,
}

impl GetQuickReportHandler {
    pub fn new(repository: Arc<dyn QuickReportRepository>) -> Self {
        Self { repository }
    }

    pub async fn handle(&self, query: GetQuickReportQuery) -> Result<QuickReport, FormError> {
        load(self.repository.as_ref(), query.form_id).await
    }
}
