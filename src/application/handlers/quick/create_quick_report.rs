//! CreateQuickReportHandler - Command handler for opening a quick form.

use std::sync::Arc;

use crate::domain::forms::{FormError, QuickReport};
use crate::domain::foundation::FormSessionId;
use crate::ports::QuickReportRepository;

/// Command to open a quick form, optionally pre-filled.
#[derive(Debug, Clone, Default)]
pub struct CreateQuickReportCommand {
    pub business_name: Option<String>,
}

/// Handler for creating quick forms.
pub struct CreateQuickReportHandler {
    repository: Arc<dyn QuickReportRepository>,
}

impl CreateQuickReportHandler {
    pub fn new(repository: Arc<dyn QuickReportRepository>) -> Self {
        Self { repository }
    }

    pub async fn handle(&self, cmd: CreateQuickReportCommand) -> Result<QuickReport, FormError> {
        let mut form = QuickReport::new(FormSessionId::new());
        if let Some(name) = cmd.business_name {
            form.set_business_name(name)?;
        }

        self.repository.save(&form).await?;
        tracing::info!(form_id = %form.id(), "Quick form created");
        Ok(form)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::foundation::{DomainError, ErrorCode, Timestamp};
    use async_trait::async_trait;

    struct FailingRepository;

    #[async_trait]
    impl QuickReportRepository for FailingRepository {
        async fn save(&self, _form: &QuickReport) -> Result<(), DomainError> {
            Err(DomainError::new(ErrorCode::StorageError, "Simulated save failure"))
        }

        async fn find_by_id(
            &self,
            _id: &FormSessionId,
        ) -> Result<Option<QuickReport>, DomainError> {
            Ok(None)
        }

        async fn delete(&self, _id: &FormSessionId) -> Result<(), DomainError> {
            Ok(())
        }

        async fn prune_idle(&self, _cutoff: Timestamp) -> Result<usize, DomainError> {
            Ok(0)
        }
    }

    #[tokio::test]
    async fn creates_prefilled_form() {
        let repo = Arc::new(crate::adapters::memory::InMemoryFormStore::new());
        let handler = CreateQuickReportHandler::new(repo.clone());

        let form = handler
            .handle(CreateQuickReportCommand {
                business_name: Some("Acme".to_string()),
            })
            .await
            .unwrap();

        assert_eq!(form.business_name(), "Acme");
        assert!(form.can_generate());
        let stored = QuickReportRepository::find_by_id(repo.as_ref(), form.id())
            .await
            .unwrap();
        assert_eq!(stored, Some(form));
    }

    #[tokio::test]
    async fn storage_failure_is_infrastructure_error() {
        let handler = CreateQuickReportHandler::new(Arc::new(FailingRepository));
        let result = handler.handle(CreateQuickReportCommand::default()).await;
        assert!(matches!(result, Err(FormError::Infrastructure(_))));
    }
}
