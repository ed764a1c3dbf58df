//! GetWizardHandler - Query handler for reading a wizard.

use std::sync::Arc;

use super::load;
use crate::domain::forms::{FormError, Wizard};
use crate::domain::foundation::FormSessionId;
use crate::ports::WizardRepository;

#[derive(Debug, Clone)]
pub struct GetWizardQuery {
    pub form_id: FormSessionId,
}

pub struct GetWizardHandler {
    repository: Arc<dyn WizardRepository>,
}

impl GetWizardHandler {
    pub fn new(repository: Arc<dyn WizardRepository>) -> Self {
        Self { repository }
    }

    pub async fn handle(&self, query: GetWizardQuery) -> Result<Wizard, FormError> {
        load(self.repository.as_ref(), query.form_id).await
    }
}
