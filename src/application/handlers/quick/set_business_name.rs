//! SetBusinessNameHandler - Command handler for editing the quick form.

use std::sync::Arc;

use super::load;
use crate::application::handlers::FormWriteLock;
use crate::domain::forms::{FormError, QuickReport};
use crate::domain::foundation::FormSessionId;
use crate::ports::QuickReportRepository;

#[derive(Debug, Clone)]
pub struct SetBusinessNameCommand {
    pub form_id: FormSessionId,
    pub business_name: String,
}

pub struct SetBusinessNameHandler {
    repository: Arc<dyn QuickReportRepository>,
    write_lock: FormWriteLock,
}

impl SetBusinessNameHandler {
    pub fn new(repository: Arc<dyn QuickReportRepository>, write_lock: FormWriteLock) -> Self {
        Self {
            repository,
            write_lock,
        }
    }

    pub async fn handle(&self, cmd: SetBusinessNameCommand) -> Result<QuickReport, FormError> {
        let _guard = self.write_lock.lock().await;
        let mut form = load(self.repository.as_ref(), cmd.form_id).await?;
        form.set_business_name(cmd.business_name)?;
        self.repository.save(&form).await?;
        Ok(form)
    }
}
