//! GenerateQuickReportHandler - Command handler for submitting the quick form.
//!
//! 1. Enter `Generating` and persist, so the form reports its loading state
//! 2. Run the analyzer with no lock held
//! 3. Reload and complete, unless the form was reset in the meantime
//!
//! Steps 2 and 3 run on a spawned task. A dropped request (client gone,
//! request timeout) stops waiting but the generation still finishes.

use std::sync::Arc;

use super::load;
use crate::application::handlers::{join_generation, run_analysis, FormWriteLock};
use crate::domain::forms::{FormError, GenerationTicket, QuickReport};
use crate::domain::foundation::FormSessionId;
use crate::ports::{QuickReportRepository, ReportAnalyzer};

#[derive(Debug, Clone)]
pub struct GenerateQuickReportCommand {
    pub form_id: FormSessionId,
}

pub struct GenerateQuickReportHandler {
    repository: Arc<dyn QuickReportRepository>,
    analyzer: Arc<dyn ReportAnalyzer>,
    write_lock: FormWriteLock,
}

impl GenerateQuickReportHandler {
    pub fn new(
        repository: Arc<dyn QuickReportRepository>,
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
    /// - `StepIncomplete` if the name is blank
    /// - `AlreadyGenerating` while a previous submission is in flight
    /// - `InvalidState` if the form was reset before the report arrived
    /// - `Analysis` if the analyzer failed (the form returns to idle)
    pub async fn handle(&self, cmd: GenerateQuickReportCommand) -> Result<QuickReport, FormError> {
        let ticket = {
            let _guard = self.write_lock.lock().await;
            let mut form = load(self.repository.as_ref(), cmd.form_id).await?;
            let ticket = form.begin_generation()?;
            self.repository.save(&form).await?;
            ticket
        };
        tracing::info!(
            form_id = %cmd.form_id,
            generation = ticket.generation,
            business_name = %ticket.request.business_name(),
            "Quick report generation started"
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
    repository: Arc<dyn QuickReportRepository>,
    analyzer: Arc<dyn ReportAnalyzer>,
    write_lock: FormWriteLock,
    form_id: FormSessionId,
    ticket: GenerationTicket,
) -> Result<QuickReport, FormError> {
    let outcome = run_analysis(analyzer.as_ref(), &ticket).await;

    let _guard = write_lock.lock().await;
    let mut form = load(repository.as_ref(), form_id).await?;
    match outcome {
        Ok(report) => {
            if let Err(e) = form.complete_generation(ticket.generation, report) {
                tracing::info!(
                    form_id = %form_id,
                    generation = ticket.generation,
                    "Discarding report for a form that was reset"
                );
                return Err(e);
            }
            repository.save(&form).await?;
            Ok(form)
        }
        Err(e) => {
            form.abort_generation(ticket.generation)?;
            repository.save(&form).await?;
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
    use crate::application::handlers::quick::{ResetQuickReportCommand, ResetQuickReportHandler};
    use crate::domain::forms::QuickStatus;
    use crate::domain::industry::Industry;
    use crate::domain::report::{ReportData, ReportRequest};
    use crate::ports::AnalysisError;
    use async_trait::async_trait;
    use std::time::Duration;

    struct FailingAnalyzer;

    #[async_trait]
    impl ReportAnalyzer for FailingAnalyzer {
        async fn analyze(&self, _request: &ReportRequest) -> Result<ReportData, AnalysisError> {
            Err(AnalysisError::unavailable("offline"))
        }
    }

    async fn idle_form(repo: &InMemoryFormStore, name: &str) -> FormSessionId {
        let mut form = QuickReport::new(FormSessionId::new());
        form.set_business_name(name).unwrap();
        QuickReportRepository::save(repo, &form).await.unwrap();
        *form.id()
    }

    #[tokio::test]
    async fn generates_and_shows_report() {
        let repo = Arc::new(InMemoryFormStore::new());
        let form_id = idle_form(&repo, "Bright Smile Dental").await;
        let handler = GenerateQuickReportHandler::new(
            repo,
            Arc::new(SimulatedAnalyzer::instant()),
            new_write_lock(),
        );

        let form = handler
            .handle(GenerateQuickReportCommand { form_id })
            .await
            .unwrap();

        assert_eq!(form.status(), QuickStatus::Shown);
        assert_eq!(form.report().unwrap().industry(), Industry::Healthcare);
    }

    #[tokio::test]
    async fn analyzer_failure_returns_form_to_idle() {
        let repo = Arc::new(InMemoryFormStore::new());
        let form_id = idle_form(&repo, "Acme").await;
        let handler =
            GenerateQuickReportHandler::new(repo.clone(), Arc::new(FailingAnalyzer), new_write_lock());

        let result = handler.handle(GenerateQuickReportCommand { form_id }).await;
        assert!(matches!(result, Err(FormError::Analysis(_))));

        let form = QuickReportRepository::find_by_id(repo.as_ref(), &form_id)
            .await
            .unwrap()
            .unwrap();
        assert_eq!(form.status(), QuickStatus::Idle);
        assert_eq!(form.business_name(), "Acme");
    }

    #[tokio::test(start_paused = true)]
    async fn reset_during_generation_discards_report() {
        let repo = Arc::new(InMemoryFormStore::new());
        let form_id = idle_form(&repo, "Acme").await;
        let lock = new_write_lock();
        let generate = GenerateQuickReportHandler::new(
            repo.clone(),
            Arc::new(SimulatedAnalyzer::new(Duration::from_millis(2000))),
            lock.clone(),
        );
        let reset = ResetQuickReportHandler::new(repo.clone(), lock);

        let pending = tokio::spawn(async move {
            generate.handle(GenerateQuickReportCommand { form_id }).await
        });
        tokio::time::sleep(Duration::from_millis(100)).await;

        let form = reset
            .handle(ResetQuickReportCommand { form_id })
            .await
            .unwrap();
        assert_eq!(form.status(), QuickStatus::Idle);

        let result = pending.await.unwrap();
        assert!(matches!(result, Err(FormError::InvalidState(_))));

        let form = QuickReportRepository::find_by_id(repo.as_ref(), &form_id)
            .await
            .unwrap()
            .unwrap();
        assert_eq!(form.status(), QuickStatus::Idle);
        assert!(form.report().is_none());
    }

    #[tokio::test(start_paused = true)]
    async fn dropped_request_still_completes_generation() {
        let repo = Arc::new(InMemoryFormStore::new());
        let form_id = idle_form(&repo, "Bright Smile Dental").await;
        let handler = GenerateQuickReportHandler::new(
            repo.clone(),
            Arc::new(SimulatedAnalyzer::new(Duration::from_millis(2000))),
            new_write_lock(),
        );

        let cut_short = tokio::time::timeout(
            Duration::from_millis(100),
            handler.handle(GenerateQuickReportCommand { form_id }),
        )
        .await;
        assert!(cut_short.is_err());

        tokio::time::sleep(Duration::from_secs(5)).await;

        let form = QuickReportRepository::find_by_id(repo.as_ref(), &form_id)
            .await
            .unwrap()
            .unwrap();
        assert_eq!(form.status(), QuickStatus::Shown);
        assert_eq!(form.report().unwrap().industry(), Industry::Healthcare);
    }
}
