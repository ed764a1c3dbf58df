//! AdvanceWizardHandler - Command handler for the wizard's forward control.
//!
//! On steps 1-3 this moves to the next step. On the description step it
//! starts report generation and, like the quick form, completes it unless
//! the wizard is reset while the analyzer runs. Completion happens on a
//! spawned task, so a dropped request does not strand the wizard.

use std::sync::Arc;

use super::load;
use crate::application::handlers::{join_generation, run_analysis, FormWriteLock};
use crate::domain::forms::{FormError, GenerationTicket, Wizard, WizardStep};
use crate::domain::foundation::FormSessionId;
use crate::ports::{ReportAnalyzer, WizardRepository};

#[derive(Debug, Clone)]
pub struct AdvanceWizardCommand {
    pub form_id: FormSessionId,
}

pub struct AdvanceWizardHandler {
    repository: Arc<dyn WizardRepository>,
    analyzer: Arc<dyn ReportAnalyzer>,
    write_lock: FormWriteLock,
}

impl AdvanceWizardHandler {
    pub fn new(
        repository: Arc<dyn WizardRepository>,
        analyzer: Arc<dyn ReportAnalyzer>,
        write_lock: FormWriteLock,
    ) -> Self {
        Self {
            repository,
            analyzer,
            write_lock,
        }
    }

    /// # Errors
    ///
    /// - `StepIncomplete` if the current step's field fails its gate
    /// - `AlreadyGenerating` while a report is being generated
    /// - `InvalidState` from the report step, or if the wizard was reset
    ///   before the report arrived
    /// - `Analysis` if the analyzer failed (the wizard returns to step 4)
    pub async fn handle(&self, cmd: AdvanceWizardCommand) -> Result<Wizard, FormError> {
        let ticket = {
            let _guard = self.write_lock.lock().await;
            let mut wizard = load(self.repository.as_ref(), cmd.form_id).await?;
            if wizard.step() != WizardStep::Description {
                let step = wizard.advance()?;
                self.repository.save(&wizard).await?;
                tracing::debug!(form_id = %cmd.form_id, step = step.number(), "Wizard advanced");
                return Ok(wizard);
            }
            let ticket = wizard.begin_generation()?;
            self.repository.save(&wizard).await?;
            ticket
        };
        tracing::info!(
            form_id = %cmd.form_id,
            generation = ticket.generation,
            business_name = %ticket.request.business_name(),
            "Guided report generation started"
        );

        let task = tokio::spawn(finish_generation(
            self.repository.clone(),
            self.analyzer.clone(),
            self.write_lock.clone(),
            cmd.form_id,
            ticket,
        ));
        join_generation(task).await
    }
}

async fn finish_generation(
    repository: Arc<dyn WizardRepository>,
    analyzer: Arc<dyn ReportAnalyzer>,
    write_lock: FormWriteLock,
    form_id: FormSessionId,
    ticket: GenerationTicket,
) -> Result<Wizard, FormError> {
    let outcome = run_analysis(analyzer.as_ref(), &ticket).await;

    let _guard = write_lock.lock().await;
    let mut wizard = load(repository.as_ref(), form_id).await?;
    match outcome {
        Ok(report) => {
            if let Err(e) = wizard.complete_generation(ticket.generation, report) {
                tracing::info!(
                    form_id = %form_id,
                    generation = ticket.generation,
                    "Discarding report for a wizard that was reset"
                );
                return Err(e);
            }
            repository.save(&wizard).await?;
            Ok(wizard)
        }
        Err(e) => {
            wizard.abort_generation(ticket.generation)?;
            repository.save(&wizard).await?;
            Err(e)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::analysis::SimulatedAnalyzer;
    use crate::adapters::memory::InMemoryFormStore;
    use crate::application::handlers::new_write_lock;
    use crate::application::handlers::wizard::test_support::wizard_at_description;
    use crate::domain::forms::WizardFields;
    use crate::domain::report::ReportVariant;

    fn handler(repo: Arc<InMemoryFormStore>) -> AdvanceWizardHandler {
        AdvanceWizardHandler::new(repo, Arc::new(SimulatedAnalyzer::instant()), new_write_lock())
    }

    #[tokio::test]
    async fn blank_name_blocks_step_one() {
        let repo = Arc::new(InMemoryFormStore::new());
        let mut wizard = Wizard::new(FormSessionId::new());
        wizard
            .update_fields(WizardFields {
                business_name: Some("  ".to_string()),
                ..Default::default()
            })
            .unwrap();
        WizardRepository::save(repo.as_ref(), &wizard).await.unwrap();

        let result = handler(repo)
            .handle(AdvanceWizardCommand {
                form_id: *wizard.id(),
            })
            .await;
        assert!(matches!(result, Err(FormError::StepIncomplete { .. })));
    }

    #[tokio::test]
    async fn description_step_generates_guided_report() {
        let repo = Arc::new(InMemoryFormStore::new());
        let wizard = wizard_at_description("Residential plumbing and emergency repairs.");
        WizardRepository::save(repo.as_ref(), &wizard).await.unwrap();

        let done = handler(repo)
            .handle(AdvanceWizardCommand {
                form_id: *wizard.id(),
            })
            .await
            .unwrap();

        assert_eq!(done.step(), WizardStep::Report);
        let report = done.report().unwrap();
        assert_eq!(report.variant(), ReportVariant::Guided);
        assert_eq!(report.competitors()[3].name, "Austin Construction Experts");
    }

    #[tokio::test]
    async fn short_description_is_rejected_without_generating() {
        let repo = Arc::new(InMemoryFormStore::new());
        let wizard = wizard_at_description("too short");
        WizardRepository::save(repo.as_ref(), &wizard).await.unwrap();

        let result = handler(repo.clone())
            .handle(AdvanceWizardCommand {
                form_id: *wizard.id(),
            })
            .await;
        assert!(matches!(result, Err(FormError::StepIncomplete { .. })));

        let stored = WizardRepository::find_by_id(repo.as_ref(), wizard.id())
            .await
            .unwrap()
            .unwrap();
        assert_eq!(stored.step(), WizardStep::Description);
    }

    #[tokio::test(start_paused = true)]
    async fn dropped_request_still_shows_report() {
        let repo = Arc::new(InMemoryFormStore::new());
        let wizard = wizard_at_description("Residential plumbing and emergency repairs.");
        WizardRepository::save(repo.as_ref(), &wizard).await.unwrap();
        let advance = AdvanceWizardHandler::new(
            repo.clone(),
            Arc::new(SimulatedAnalyzer::new(std::time::Duration::from_millis(2000))),
            new_write_lock(),
        );

        let cut_short = tokio::time::timeout(
            std::time::Duration::from_millis(100),
            advance.handle(AdvanceWizardCommand {
                form_id: *wizard.id(),
            }),
        )
        .await;
        assert!(cut_short.is_err());

        tokio::time::sleep(std::time::Duration::from_secs(5)).await;

        let stored = WizardRepository::find_by_id(repo.as_ref(), wizard.id())
            .await
            .unwrap()
            .unwrap();
        assert_eq!(stored.step(), WizardStep::Report);
        assert!(stored.report().is_some());
    }
}
