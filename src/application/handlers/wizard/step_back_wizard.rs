//! StepBackWizardHandler - Command handler for the wizard's back control.

use std::sync::Arc;

use super::load;
use crate::application::handlers::FormWriteLock;
use crate::domain::forms::{FormError, Wizard};
use crate::domain::foundation::FormSessionId;
use crate::ports::WizardRepository;

#[derive(Debug, Clone)]
pub struct StepBackWizardCommand {
    pub form_id: FormSessionId,
}

/// Moves back one step; never gated on field validity.
pub struct StepBackWizardHandler {
    repository: Arc<dyn WizardRepository>,
    write_lock: FormWriteLock,
}

impl StepBackWizardHandler {
    pub fn new(repository: Arc<dyn WizardRepository>, write_lock: FormWriteLock) -> Self {
        Self {
            repository,
            write_lock,
        }
    }

    pub async fn handle(&self, cmd: StepBackWizardCommand) -> Result<Wizard, FormError> {
        let _guard = self.write_lock.lock().await;
        let mut wizard = load(self.repository.as_ref(), cmd.form_id).await?;
        wizard.back()?;
        self.repository.save(&wizard).await?;
        Ok(wizard)
    }
}
