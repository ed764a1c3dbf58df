//! Wizard command and query handlers.

mod advance_wizard;
mod create_wizard;
mod export_wizard_report;
mod get_wizard;
mod reset_wizard;
mod step_back_wizard;
mod update_wizard_fields;

pub use advance_wizard::{AdvanceWizardCommand, AdvanceWizardHandler};
pub use create_wizard::CreateWizardHandler;
pub use export_wizard_report::{ExportWizardReportHandler, ExportWizardReportQuery};
pub use get_wizard::{GetWizardHandler, GetWizardQuery};
pub use reset_wizard::{ResetWizardCommand, ResetWizardHandler};
pub use step_back_wizard::{StepBackWizardCommand, StepBackWizardHandler};
pub use update_wizard_fields::{UpdateWizardFieldsCommand, UpdateWizardFieldsHandler};

use crate::domain::forms::{FormError, Wizard};
use crate::domain::foundation::FormSessionId;
use crate::ports::WizardRepository;

async fn load(repository: &dyn WizardRepository, form_id: FormSessionId) -> Result<Wizard, FormError> {
    repository
        .find_by_id(&form_id)
        .await?
        .ok_or_else(|| FormError::not_found(form_id))
}
