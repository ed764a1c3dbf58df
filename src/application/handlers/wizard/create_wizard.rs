//! CreateWizardHandler - Command handler for starting a wizard.

use std::sync::Arc;

use crate::domain::forms::{FormError, Wizard};
use crate::domain::foundation::FormSessionId;
use crate::ports::WizardRepository;

pub struct CreateWizardHandler {
    repository: Arc<dyn WizardRepository>,
}

impl CreateWizardHandler {
    pub fn new(repository: Arc<dyn WizardRepository>) -> Self {
        Self { repository }
    }

    pub async fn handle(&self) -> Result<Wizard, FormError> {
        let wizard = Wizard::new(FormSessionId::new());
        self.repository.save(&wizard).await?;
        tracing::info!(form_id = %wizard.id(), "Wizard created");
        Ok(wizard)
    }
}
