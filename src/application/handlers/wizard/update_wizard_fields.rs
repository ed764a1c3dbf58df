//! UpdateWizardFieldsHandler - Command handler for editing wizard fields.

use std::sync::Arc;

use super::load;
use crate::application::handlers::FormWriteLock;
use crate::domain::forms::{FormError, Wizard, WizardFields};
use crate::domain::foundation::FormSessionId;
use crate::ports::WizardRepository;

#[derive(Debug, Clone)]
pub struct UpdateWizardFieldsCommand {
    pub form_id: FormSessionId,
    pub fields: WizardFields,
}

pub struct UpdateWizardFieldsHandler {
    repository: Arc<dyn WizardRepository>,
    write_lock: FormWriteLock,
}

impl UpdateWizardFieldsHandler {
    pub fn new(repository: Arc<dyn WizardRepository>, write_lock: FormWriteLock) -> Self {
        Self {
            repository,
            write_lock,
        }
    }

    pub async fn handle(&self, cmd: UpdateWizardFieldsCommand) -> Result<Wizard, FormError> {
        let _guard = self.write_lock.lock().await;
        let mut wizard = load(self.repository.as_ref(), cmd.form_id).await?;
        wizard.update_fields(cmd.fields)?;
        self.repository.save(&wizard).await?;
        Ok(wizard)
    }
}
