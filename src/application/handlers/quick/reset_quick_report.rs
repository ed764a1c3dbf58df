//! ResetQuickReportHandler - Command handler for the "new report" control.

use std::sync::Arc;

use super::load;
use crate::application::handlers::FormWriteLock;
use crate::domain::forms::{FormError, QuickReport};
use crate::domain::foundation::FormSessionId;
use crate::ports::QuickReportRepository;

#[derive(Debug, Clone)]
pub struct ResetQuickReportCommand {
    pub form_id: FormSessionId,
}

/// Resets a quick form from any state, including mid-generation.
pub struct ResetQuickReportHandler {
    repository: Arc<dyn QuickReportRepository>,
    write_lock: FormWriteLock,
}

impl ResetQuickReportHandler {
    pub fn new(repository: Arc<dyn QuickReportRepository>, write_lock: FormWriteLock) -> Self {
        Self {
            repository,
            write_lock,
        }
    }

    pub async fn handle(&self, cmd: ResetQuickReportCommand) -> Result<QuickReport, FormError> {
        let _guard = self.write_lock.lock().await;
        let mut form = load(self.repository.as_ref(), cmd.form_id).await?;
        form.reset();
        self.repository.save(&form).await?;
        tracing::debug!(form_id = %cmd.form_id, "Quick form reset");
        Ok(form)
    }
}
