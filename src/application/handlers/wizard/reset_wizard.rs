//! ResetWizardHandler - Command handler for starting over.

use std::sync::Arc;

use super::load;
use crate::application::handlers::FormWriteLock;
use crate::domain::forms::{FormError, Wizard};
use crate::domain::foundation::FormSessionId;
use crate::ports::WizardRepository;

#[derive(Debug, Clone)]
pub struct ResetWizardCommand {
    pub form_id: FormSessionId,
}

/// Clears every field and returns to step 1, from any step.
pub struct ResetWizardHandler {
    repository: Arc<dyn WizardRepository>,
    write_lock: FormWriteLock,
}

impl ResetWizardHandler {
    pub fn new(repository: Arc<dyn WizardRepository>, write_lock: FormWriteLock) -> Self {
        Self {
            repository,
            write_lock,
        }
    }

    pub async fn handle(&self, cmd: ResetWizardCommand) -> Result<Wizard, FormError> {
        let _guard = self.write_lock.lock().await;
        let mut wizard = load(self.repository.as_ref(), cmd.form_id).await?;
        wizard.reset();
        self.repository.save(&wizard).await?;
        tracing::debug!(form_id = %cmd.form_id, "Wizard reset");
        Ok(wizard)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::analysis::SimulatedAnalyzer;
    use crate::adapters::memory::InMemoryFormStore;
    use crate::application::handlers::new_write_lock;
    use crate::application::handlers::wizard::test_support::wizard_at_description;
    use crate::application::handlers::wizard::{AdvanceWizardCommand, AdvanceWizardHandler};
    use crate::domain::forms::WizardStep;
    use std::time::Duration;

    #[tokio::test(start_paused = true)]
    async fn reset_while_generating_wins() {
        let repo = Arc::new(InMemoryFormStore::new());
        let wizard = wizard_at_description("Residential plumbing and emergency repairs.");
        let form_id = *wizard.id();
        WizardRepository::save(repo.as_ref(), &wizard).await.unwrap();

        let lock = new_write_lock();
        let advance = AdvanceWizardHandler::new(
            repo.clone(),
            Arc::new(SimulatedAnalyzer::new(Duration::from_millis(2000))),
            lock.clone(),
        );
        let reset = ResetWizardHandler::new(repo.clone(), lock);

        let pending =
            tokio::spawn(async move { advance.handle(AdvanceWizardCommand { form_id }).await });
        tokio::time::sleep(Duration::from_millis(100)).await;

        let during = WizardRepository::find_by_id(repo.as_ref(), &form_id)
            .await
            .unwrap()
            .unwrap();
        assert_eq!(during.step(), WizardStep::Generating);

        reset.handle(ResetWizardCommand { form_id }).await.unwrap();
        assert!(matches!(
            pending.await.unwrap(),
            Err(FormError::InvalidState(_))
        ));

        let after = WizardRepository::find_by_id(repo.as_ref(), &form_id)
            .await
            .unwrap()
            .unwrap();
        assert_eq!(after.step(), WizardStep::Name);
        assert!(after.report().is_none());
        assert_eq!(after.input().business_name, "");
    }
}
